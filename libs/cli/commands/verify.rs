use std::collections::BTreeMap;

use clap::Args;
use csmac_client::{Client, JobInstruction};
use prettytable::{row, Table};

use crate::utils::tally;

#[derive(Args, Debug)]
pub struct Command {}

/// Tally jobs by their TPO link, folding unlinked rows into "Unknown".
fn tally_by_tpo(jobs: &[JobInstruction]) -> BTreeMap<String, u64> {
    tally(jobs.iter().map(|job| {
        job.tpo_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }))
}

fn tally_by_status(jobs: &[JobInstruction]) -> BTreeMap<String, u64> {
    tally(jobs.iter().map(|job| job.status.to_string()))
}

fn print_counts(header: &str, counts: &BTreeMap<String, u64>) {
    let mut table = Table::new();
    table.add_row(row![header, "Count"]);
    for (key, count) in counts {
        table.add_row(row![key, count]);
    }
    table.printstd();
}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    println!("--- Verifying job instructions data ---");

    let jobs: Vec<JobInstruction> = client
        .from("job_instructions")
        .select("id, tpo_id, task_group_id, team, status, subject, created_at")
        .fetch()
        .await?;

    println!("Total job instructions: {}", jobs.len());

    println!("\n--- Counts by TPO ID ---");
    print_counts("TPO", &tally_by_tpo(&jobs));

    println!("\n--- Counts by status ---");
    print_counts("Status", &tally_by_status(&jobs));

    println!("\n--- Recent 5 jobs ---");
    for job in jobs.iter().take(5) {
        println!(
            "[{}] {} - {} (TPO: {})",
            job.id,
            job.status,
            job.subject,
            job.tpo_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "null".to_string()),
        );
    }

    Ok(())
}

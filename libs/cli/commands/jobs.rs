use clap::Args;
use csmac_client::{Client, JobInstruction, Order};
use prettytable::{row, Table};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let jobs: Vec<JobInstruction> = client
        .from("job_instructions")
        .order("id", Order::Desc)
        .limit(10)
        .fetch()
        .await?;

    let mut table = Table::new();
    table.add_row(row!["id", "subject", "assignee", "status", "verification"]);
    for job in &jobs {
        table.add_row(row![
            job.id,
            job.subject,
            job.assignee.as_deref().unwrap_or("null"),
            job.status,
            job.verification_result.as_deref().unwrap_or("null"),
        ]);
    }
    table.printstd();

    Ok(())
}

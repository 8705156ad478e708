use std::collections::BTreeMap;

use clap::Args;
use colored::Colorize;
use csmac_client::Client;
use prettytable::{row, Table};

use crate::utils::tally;

#[derive(Args, Debug)]
pub struct Command {}

/// Literal scanned for in assignee names; rows seeded with the generic
/// "person in charge" placeholder instead of a real name are data bugs.
const SUSPICIOUS_LITERAL: &str = "담당자";

/// Tally assignee occurrences, folding missing values into a "NULL"
/// entry.
fn tally_assignees<'a>(assignees: impl IntoIterator<Item = Option<&'a str>>) -> BTreeMap<String, u64> {
    tally(
        assignees
            .into_iter()
            .map(|assignee| assignee.unwrap_or("NULL").to_string()),
    )
}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    println!("Starting data audit for the job_instructions table...\n");

    let total = client.from("job_instructions").count().await?;
    println!("Total records in job_instructions: {total}");

    let rows = client
        .from("job_instructions")
        .select("assignee")
        .fetch_json()
        .await?;
    let counts = tally_assignees(
        rows.iter()
            .map(|row| row.get("assignee").and_then(|v| v.as_str())),
    );

    println!("\nAssignee distribution (raw data in DB):");
    let mut table = Table::new();
    table.add_row(row!["Name", "Count"]);
    for (name, count) in &counts {
        table.add_row(row![name, count]);
    }
    table.printstd();

    let suspicious: Vec<&String> = counts
        .keys()
        .filter(|name| name.contains(SUSPICIOUS_LITERAL))
        .collect();

    if suspicious.is_empty() {
        println!(
            "\n{} No '{SUSPICIOUS_LITERAL}' literal strings found as raw values.",
            "✔".green().bold()
        );
    } else {
        println!("\n{} Suspicious data found:", "⚠".yellow().bold());
        for name in suspicious {
            println!("   - \"{}\": {} records", name, counts[name]);
        }
    }

    println!("\nAudit complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_assignees_with_null_bucket() {
        let counts = tally_assignees([Some("A"), None, Some("A"), Some("B")]);

        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("NULL"), Some(&1));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn tallies_empty_input_to_empty_table() {
        let counts = tally_assignees(std::iter::empty::<Option<&str>>());
        assert!(counts.is_empty());
    }
}

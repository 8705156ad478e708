use clap::Args;
use colored::Colorize;
use csmac_client::{Client, JobInstruction, JobStatus, Order};
use serde_json::json;

#[derive(Args, Debug)]
pub struct Command {}

/// One reassignment rule: a subject substring and the name it maps to.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub needle: &'static str,
    pub assignee: &'static str,
}

/// Ordered first-match-wins policy used for the one-off repair of jobs
/// that lost their assignee. Earlier rules win when a subject matches
/// more than one needle.
pub const RULES: &[Rule] = &[
    Rule {
        needle: "복도 소음",
        assignee: "노현우",
    },
    Rule {
        needle: "침대 베딩",
        assignee: "윤하준",
    },
];

pub const FALLBACK_ASSIGNEE: &str = "권도현";

/// Statuses a broken row may be in and still qualify for repair.
const REPAIRABLE_STATUSES: [JobStatus; 3] = [
    JobStatus::Waiting,
    JobStatus::NonCompliant,
    JobStatus::Completed,
];

/// Pick the replacement assignee for a subject: first matching rule
/// wins, otherwise the fallback name.
pub fn pick_assignee(subject: &str, rules: &[Rule], fallback: &'static str) -> &'static str {
    rules
        .iter()
        .find(|rule| subject.contains(rule.needle))
        .map(|rule| rule.assignee)
        .unwrap_or(fallback)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    pub succeeded: u64,
    pub failed: u64,
}

/// Apply the rule table to each row, one update at a time. Per-row
/// failures are logged and skipped; partial success is the accepted
/// outcome of this migration, and no summary is reconciled afterwards.
async fn repair_rows<F, Fut>(
    rows: &[JobInstruction],
    rules: &[Rule],
    fallback: &'static str,
    mut apply: F,
) -> RepairOutcome
where
    F: FnMut(i64, &'static str) -> Fut,
    Fut: std::future::Future<Output = csmac_client::ClientResult<()>>,
{
    let mut outcome = RepairOutcome::default();

    for task in rows {
        let target = pick_assignee(&task.subject, rules, fallback);

        println!(
            "Re-assigning Task ID [{}] \"{}\" to {} ...",
            task.id, task.subject, target
        );

        match apply(task.id, target).await {
            Ok(()) => {
                outcome.succeeded += 1;
                println!("{}", "Success!".green());
            }
            Err(e) => {
                outcome.failed += 1;
                eprintln!(
                    "{} Failed to update Task ID {}: {e}",
                    "✗".red().bold(),
                    task.id
                );
            }
        }
    }

    outcome
}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let broken: Vec<JobInstruction> = client
        .from("job_instructions")
        .is_null("assignee")
        .in_list("status", REPAIRABLE_STATUSES.map(|s| s.as_str()))
        .order("id", Order::Desc)
        .fetch()
        .await?;

    println!("Found {} unassigned tasks.", broken.len());

    repair_rows(&broken, RULES, FALLBACK_ASSIGNEE, |id, target| async move {
        client
            .from("job_instructions")
            .eq("id", id.to_string())
            .update(&json!({ "assignee": target }))
            .await
    })
    .await;

    Ok(())
}

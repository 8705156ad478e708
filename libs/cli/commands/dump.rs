use clap::Args;
use csmac_client::{Client, JobInstruction, Order};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let jobs: Vec<JobInstruction> = client
        .from("job_instructions")
        .order("id", Order::Desc)
        .limit(20)
        .fetch()
        .await?;

    println!("Latest jobs:");
    for job in &jobs {
        println!(
            "[{}] nullGroup={} status={} subject=\"{}\" assignee={} team={}",
            job.id,
            job.task_group_id.is_none(),
            job.status,
            job.subject,
            job.assignee.as_deref().unwrap_or("null"),
            job.team,
        );
    }

    Ok(())
}

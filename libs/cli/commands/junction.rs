use clap::Args;
use csmac_client::{Client, TaskGroup, TaskGroupItem};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let junctions: Vec<TaskGroupItem> = client.from("task_group_items").fetch().await?;
    println!("Junctions:");
    for junction in &junctions {
        println!(
            "  [{}] group={} item={}",
            junction.id, junction.task_group_id, junction.checklist_item_id
        );
    }

    let groups: Vec<TaskGroup> = client
        .from("task_groups")
        .select("id, tpo_id")
        .fetch()
        .await?;
    println!("Groups:");
    for group in &groups {
        println!("  [{}] tpo_id={:?}", group.id, group.tpo_id);
    }

    Ok(())
}

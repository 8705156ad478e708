use clap::Args;
use csmac_client::{ChecklistItem, Client};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let tpo_count = client.from("tpo").count().await?;
    let item_count = client.from("checklist_items").count().await?;
    let group_count = client.from("task_groups").count().await?;
    let junction_count = client.from("task_group_items").count().await?;

    println!("TPO count: {tpo_count}");
    println!("Checklist items count: {item_count}");
    println!("Task groups count: {group_count}");
    println!("Task group items (junction) count: {junction_count}");

    let samples: Vec<ChecklistItem> = client.from("checklist_items").limit(3).fetch().await?;
    println!("Sample items:");
    for item in &samples {
        println!("  [{}] {}", item.id, item.content);
    }

    Ok(())
}

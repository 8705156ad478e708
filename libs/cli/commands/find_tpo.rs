use clap::Args;
use csmac_client::{ChecklistItem, Client, TaskGroup, TaskGroupItem, Tpo};

#[derive(Args, Debug)]
pub struct Command {}

// The one TPO context this script was written to trace.
const TPO_TIME: &str = "업무후";
const TPO_PLACE: &str = "기계실/상황실";
const TPO_OCCASION: &str = "시설/안전 점검";

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let tpos: Vec<Tpo> = client
        .from("tpo")
        .eq("tpo_time", TPO_TIME)
        .eq("tpo_place", TPO_PLACE)
        .eq("tpo_occasion", TPO_OCCASION)
        .fetch()
        .await?;

    println!("Target TPOs:");
    for tpo in &tpos {
        println!(
            "  [{}] {} / {} / {}",
            tpo.id, tpo.tpo_time, tpo.tpo_place, tpo.tpo_occasion
        );
    }

    if tpos.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    let tpo_ids = tpos.iter().map(|t| t.id.to_string());
    let groups: Vec<TaskGroup> = client
        .from("task_groups")
        .in_list("tpo_id", tpo_ids)
        .fetch()
        .await?;

    println!("Target groups:");
    for group in &groups {
        println!("  [{}] tpo_id={:?}", group.id, group.tpo_id);
    }

    if groups.is_empty() {
        return Ok(());
    }

    let group_ids = groups.iter().map(|g| g.id.to_string());
    let junctions: Vec<TaskGroupItem> = client
        .from("task_group_items")
        .in_list("task_group_id", group_ids)
        .fetch()
        .await?;

    let mut item_ids: Vec<i64> = junctions.iter().map(|j| j.checklist_item_id).collect();
    item_ids.sort_unstable();
    item_ids.dedup();

    if item_ids.is_empty() {
        println!("Target items: (none)");
        return Ok(());
    }

    let items: Vec<ChecklistItem> = client
        .from("checklist_items")
        .in_list("id", item_ids.iter().map(|id| id.to_string()))
        .fetch()
        .await?;

    println!("Target items:");
    for item in &items {
        println!("  [{}] {}", item.id, item.content);
    }

    Ok(())
}

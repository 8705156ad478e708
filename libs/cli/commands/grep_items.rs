use clap::Args;
use csmac_client::{ChecklistItem, Client};

#[derive(Args, Debug)]
pub struct Command {}

// Substring this script was written to look for.
const NEEDLE: &str = "소화기 비치";

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let items: Vec<ChecklistItem> = client
        .from("checklist_items")
        .ilike("content", NEEDLE)
        .fetch()
        .await?;

    println!("{} item(s) matching \"{NEEDLE}\":", items.len());
    for item in &items {
        println!(
            "  [{}] {} (image: {})",
            item.id,
            item.content,
            item.image_url.as_deref().unwrap_or("null"),
        );
    }

    Ok(())
}

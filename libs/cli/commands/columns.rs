use clap::Args;
use csmac_client::Client;

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, client: &Client) -> eyre::Result<()> {
    let rows = client.from("job_instructions").limit(1).fetch_json().await?;

    let Some(row) = rows.first().and_then(|row| row.as_object()) else {
        println!("Table is empty or does not exist.");
        return Ok(());
    };

    println!("Columns of job_instructions:");
    for column in row.keys() {
        println!("- {column}");
    }

    Ok(())
}

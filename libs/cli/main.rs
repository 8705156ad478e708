use clap::Parser;

mod commands;
mod tracing;
mod utils;

#[derive(Parser, Debug)]
#[command(
    name = "csmac",
    version,
    long_about = Some("Operational scripts for the CSMAC dashboard backend: audits, dumps, one-off data repairs and bucket provisioning.")
)]
struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
pub async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();

    args.command.execute().await?;
    Ok(())
}

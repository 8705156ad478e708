use clap::Subcommand;
use csmac_client::Client;

pub mod audit;
pub mod buckets;
pub mod check_db;
pub mod columns;
pub mod dump;
pub mod find_tpo;
pub mod grep_items;
pub mod jobs;
pub mod junction;
pub mod reassign;
pub mod verify;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Audit the job_instructions table: totals, assignee distribution, suspicious entries
    Audit(audit::Command),
    /// Dump the latest job instructions, one line per row
    Dump(dump::Command),
    /// Show the latest job instructions as a table
    Jobs(jobs::Command),
    /// Walk one TPO context down to its checklist items
    FindTpo(find_tpo::Command),
    /// Count every checklist collection and show sample items
    CheckDb(check_db::Command),
    /// Dump the task-group/checklist junction rows
    Junction(junction::Command),
    /// Find checklist items by a fixed content substring
    GrepItems(grep_items::Command),
    /// Print the column names of the job_instructions table
    Columns(columns::Command),
    /// Re-assign unassigned jobs using the substring rule table
    Reassign(reassign::Command),
    /// Summarize job instructions by TPO link and status
    Verify(verify::Command),
    /// Manage object-storage buckets
    Buckets(buckets::Command),
}

impl Command {
    pub async fn execute(self) -> eyre::Result<()> {
        let credentials = csmac_config::load().map_err(|e| {
            eyre::eyre!(
                "Backend credentials could not be loaded.\n\n\
                csmac reads the web app's .env.local (or .env) file from the current\n\
                directory, falling back to process environment variables.\n\n\
                Internal error: {e}"
            )
        })?;

        // Bucket administration wants the privileged key when one is
        // configured; everything else runs with the anonymous key.
        let key = match &self {
            Self::Buckets(_) => credentials.admin_key().to_string(),
            _ => credentials.anon_key.clone(),
        };

        let client = Client::new(&credentials.url, &key)
            .map_err(|e| eyre::eyre!("Failed to open the backend client handle: {e}"))?;
        tracing::debug!(url = %credentials.url, "backend client handle ready");

        match self {
            Self::Audit(o) => audit::handle(o, &client).await?,
            Self::Dump(o) => dump::handle(o, &client).await?,
            Self::Jobs(o) => jobs::handle(o, &client).await?,
            Self::FindTpo(o) => find_tpo::handle(o, &client).await?,
            Self::CheckDb(o) => check_db::handle(o, &client).await?,
            Self::Junction(o) => junction::handle(o, &client).await?,
            Self::GrepItems(o) => grep_items::handle(o, &client).await?,
            Self::Columns(o) => columns::handle(o, &client).await?,
            Self::Reassign(o) => reassign::handle(o, &client).await?,
            Self::Verify(o) => verify::handle(o, &client).await?,
            Self::Buckets(o) => buckets::handle(o, &client).await?,
        };

        Ok(())
    }
}

use clap::{Args, Subcommand};
use colored::Colorize;
use csmac_client::{Bucket, Client, NewBucket};

/// Bucket holding job evidence photos; provisioned by this tool.
pub const EVIDENCE_BUCKET: &str = "evidence-photos";

/// Bucket holding checklist reference images; owned by the wider
/// application, only checked for here.
pub const REFERENCE_BUCKET: &str = "checklist-reference-images";

const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
const FILE_SIZE_LIMIT: u64 = 10 * 1024 * 1024;

#[derive(Subcommand, Debug)]
enum Operation {
    /// List existing buckets
    List,
    /// Create the evidence bucket if it does not exist yet
    Provision,
}

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    operation: Operation,
}

#[derive(Debug)]
pub enum ProvisionPlan {
    AlreadyExists,
    Create(NewBucket),
}

/// Decide what provisioning has to do, given the current bucket
/// listing. Pure so idempotence is testable without a backend.
pub fn provision_plan(existing: &[Bucket], name: &str) -> ProvisionPlan {
    if existing.iter().any(|bucket| bucket.name == name) {
        return ProvisionPlan::AlreadyExists;
    }

    ProvisionPlan::Create(NewBucket {
        id: name.to_string(),
        name: name.to_string(),
        public: true,
        allowed_mime_types: ALLOWED_MIME_TYPES.iter().map(|s| s.to_string()).collect(),
        file_size_limit: FILE_SIZE_LIMIT,
    })
}

pub async fn handle(command: Command, client: &Client) -> eyre::Result<()> {
    match command.operation {
        Operation::List => {
            let buckets = client.storage().list_buckets().await?;
            let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();

            println!("Buckets: {names:?}");
            println!(
                "Has {REFERENCE_BUCKET}: {}",
                names.contains(&REFERENCE_BUCKET)
            );
        }
        Operation::Provision => {
            let buckets = client.storage().list_buckets().await?;

            match provision_plan(&buckets, EVIDENCE_BUCKET) {
                ProvisionPlan::AlreadyExists => {
                    println!("Bucket \"{EVIDENCE_BUCKET}\" already exists!");
                }
                ProvisionPlan::Create(bucket) => {
                    client.storage().create_bucket(&bucket).await?;
                    println!(
                        "{} Successfully created bucket \"{EVIDENCE_BUCKET}\"",
                        "✔".green().bold()
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str) -> Bucket {
        Bucket {
            id: name.to_string(),
            name: name.to_string(),
            public: true,
        }
    }

    #[test]
    fn plans_creation_when_bucket_is_absent() {
        let plan = provision_plan(&[bucket("other")], EVIDENCE_BUCKET);

        match plan {
            ProvisionPlan::Create(new_bucket) => {
                assert_eq!(new_bucket.name, EVIDENCE_BUCKET);
                assert!(new_bucket.public);
                assert_eq!(new_bucket.allowed_mime_types.len(), 4);
                assert_eq!(new_bucket.file_size_limit, 10_485_760);
            }
            ProvisionPlan::AlreadyExists => panic!("expected a create plan"),
        }
    }

    #[test]
    fn plans_nothing_when_bucket_exists() {
        let existing = [bucket("other"), bucket(EVIDENCE_BUCKET)];
        assert!(matches!(
            provision_plan(&existing, EVIDENCE_BUCKET),
            ProvisionPlan::AlreadyExists
        ));
    }

    #[test]
    fn planning_after_creation_is_a_no_op() {
        // Second run against a listing that now contains the bucket.
        let after_first_run = [bucket(EVIDENCE_BUCKET)];
        assert!(matches!(
            provision_plan(&after_first_run, EVIDENCE_BUCKET),
            ProvisionPlan::AlreadyExists
        ));
    }
}

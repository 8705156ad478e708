mod client;
mod error;
mod filter;
mod model;
mod query;
mod storage;

pub use client::Client;
pub use error::{ClientError, ClientResult};
pub use filter::{Filter, Order};
pub use model::{
    Bucket, ChecklistItem, JobInstruction, JobStatus, TaskGroup, TaskGroupItem, Tpo,
};
pub use query::QueryBuilder;
pub use storage::{NewBucket, StorageApi};

pub mod client;
pub mod job;

pub use client::BatchClient;
pub use job::JobSummary;

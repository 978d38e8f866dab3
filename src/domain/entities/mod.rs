pub mod application;
pub mod job;
pub mod session;

pub use application::FreelanceApplication;
pub use job::{now_timestamp, seed_jobs, JobDraft, JobRecord};
pub use session::{EditState, SyncSession};

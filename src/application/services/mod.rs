pub mod application_service;
pub mod sync_service;

pub use application_service::{FreelanceService, FreelanceServiceTrait};
pub use sync_service::{JobSyncService, JobSyncServiceTrait, StoreSource, Synced};

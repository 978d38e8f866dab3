pub mod kv;
pub mod mirror;

pub use kv::SqliteKvStorage;
pub use mirror::{SqliteMirrorStore, JOBS_KEY};

pub mod application_handler;
pub mod job_handler;

pub use application_handler::ApplicationHandler;
pub use job_handler::JobAdminHandler;

pub mod application_gateway;
pub mod mirror_store;
pub mod remote_store;

pub use application_gateway::ApplicationGateway;
pub use mirror_store::MirrorJobStore;
pub use remote_store::RemoteJobStore;

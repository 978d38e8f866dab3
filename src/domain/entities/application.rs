use serde::{Deserialize, Serialize};

/// A freelance application as submitted to the site. There is no local
/// mirror for these; they only ever travel to the remote store, which stamps
/// `created_at` itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreelanceApplication {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub portfolio_link: Option<String>,
}

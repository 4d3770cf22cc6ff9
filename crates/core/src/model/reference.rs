use serde::{Deserialize, Serialize};

/// A further-reading link supplied by the backend. Immutable, list order
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub url: String,
    pub description: String,
}

use serde::{Deserialize, Serialize};

/// A named grouping of media folders ("Movies", "TV", ...).
///
/// Ids are assigned by the backend; the client never invents one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A filesystem path registered under a category as a media source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub category_id: i64,
    pub path: String,
}

/// Streaming-server state as last confirmed by the backend.
///
/// This is a pure mirror of the last toggle call's outcome; it is never
/// inferred from polling or elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Stopped,
    Running,
}

impl ServerStatus {
    pub fn is_running(self) -> bool {
        matches!(self, ServerStatus::Running)
    }

    /// The state a toggle from `self` requests.
    pub fn toggled(self) -> ServerStatus {
        match self {
            ServerStatus::Stopped => ServerStatus::Running,
            ServerStatus::Running => ServerStatus::Stopped,
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerStatus::Stopped => write!(f, "stopped"),
            ServerStatus::Running => write!(f, "running"),
        }
    }
}

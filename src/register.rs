use serde::{Deserialize, Serialize};

/// The type a service declares for itself when it registers with the
/// backend.
///
/// This enumeration is owned by the registration protocol, not by this
/// crate; `non_exhaustive` because the protocol may grow members we do not
/// know about yet. Wire decoders fold values they cannot name into
/// `Unrecognized`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Normal,
    Database,
    Cache,
    Mq,
    Browser,
    Unrecognized,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Cache => write!(f, "CACHE"),
            Self::Mq => write!(f, "MQ"),
            Self::Browser => write!(f, "BROWSER"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

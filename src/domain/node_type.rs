use serde::{Deserialize, Serialize};

/// What kind of technology a topology node (a service or a network address)
/// represents.
///
/// Each variant has a published integer code used on the wire; the encode and
/// decode tables live in `crate::convert`. Codes are a protocol contract and
/// are never renumbered, so neither table relies on declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Normal,
    Database,
    RpcFramework,
    Http,
    Mq,
    Cache,
    Browser,
    Unrecognized,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::RpcFramework => write!(f, "RPC_FRAMEWORK"),
            Self::Http => write!(f, "HTTP"),
            Self::Mq => write!(f, "MQ"),
            Self::Cache => write!(f, "CACHE"),
            Self::Browser => write!(f, "BROWSER"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(NodeType::RpcFramework.to_string(), "RPC_FRAMEWORK");
        assert_eq!(NodeType::Mq.to_string(), "MQ");
        assert_eq!(NodeType::Unrecognized.to_string(), "UNRECOGNIZED");
    }

    #[test]
    fn serde_keeps_browser_reachable() {
        // Browser has no case in the integer decode table, so serialization
        // must go by name, not by code.
        let json = serde_json::to_string(&NodeType::Browser).unwrap();
        assert_eq!(json, "\"Browser\"");
        let back: NodeType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeType::Browser);
    }
}

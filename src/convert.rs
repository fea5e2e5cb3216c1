use crate::domain::node_type::NodeType;
use crate::register::ServiceType;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("unrecognized node type code: {0}")]
    UnrecognizedNodeType(i32),
}

// --- NodeType wire codes ---

impl TryFrom<i32> for NodeType {
    type Error = ConversionError;

    /// Decodes the canonical wire encoding. Exact match only; anything
    /// outside the table is a contract violation on the caller's side and
    /// surfaces as an error rather than a default.
    ///
    /// `Browser` (code 6) has no decode case: browser nodes never arrive on
    /// this channel and only enter through the registration mapping.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NodeType::Normal),
            1 => Ok(NodeType::Database),
            2 => Ok(NodeType::RpcFramework),
            3 => Ok(NodeType::Http),
            4 => Ok(NodeType::Mq),
            5 => Ok(NodeType::Cache),
            -1 => Ok(NodeType::Unrecognized),
            other => Err(ConversionError::UnrecognizedNodeType(other)),
        }
    }
}

impl From<NodeType> for i32 {
    fn from(value: NodeType) -> Self {
        match value {
            NodeType::Normal => 0,
            NodeType::Database => 1,
            NodeType::RpcFramework => 2,
            NodeType::Http => 3,
            NodeType::Mq => 4,
            NodeType::Cache => 5,
            NodeType::Browser => 6,
            NodeType::Unrecognized => -1,
        }
    }
}

// --- Span layer ---

/// Converts a span layer value from instrumentation metadata.
///
/// Span layer values are currently identical to node type codes; this entry
/// point exists so call sites record which upstream the value came from.
/// Same error semantics as `NodeType::try_from`.
pub fn node_type_from_span_layer(value: i32) -> Result<NodeType, ConversionError> {
    NodeType::try_from(value)
}

// --- Registration mapping ---

/// Registration is best-effort classification: members with no node type
/// counterpart fold to `Normal` instead of failing.
impl From<ServiceType> for NodeType {
    fn from(value: ServiceType) -> Self {
        match value {
            ServiceType::Normal => NodeType::Normal,
            ServiceType::Database => NodeType::Database,
            ServiceType::Cache => NodeType::Cache,
            ServiceType::Mq => NodeType::Mq,
            ServiceType::Browser => NodeType::Browser,
            other => {
                tracing::debug!(service_type = %other, "unmapped service type, classifying as NORMAL");
                NodeType::Normal
            }
        }
    }
}

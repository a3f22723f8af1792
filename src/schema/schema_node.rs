use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Primitive type tags a scalar schema node can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

impl ScalarKind {
    /// Type name as shown in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => "null",
        }
    }

    /// Check whether a document value is an instance of this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ScalarKind::String => value.is_string(),
            ScalarKind::Integer => {
                matches!(value, Value::Number(n) if n.is_i64() || n.is_u64())
            }
            ScalarKind::Float => matches!(value, Value::Number(n) if n.is_f64()),
            ScalarKind::Boolean => value.is_bool(),
            ScalarKind::Null => value.is_null(),
        }
    }
}

/// Expected shape of one node of the document tree.
///
/// The schema is static data: constructed once, immutable for the life of
/// the checker, and never derived from the document being validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaNode {
    /// Leaf value that must match at least one of the listed kinds
    Scalar { types: Vec<ScalarKind> },

    /// Mapping that must contain every listed field, in declared order.
    /// Extra keys in the document are ignored.
    Mapping { fields: Vec<(String, SchemaNode)> },

    /// Sequence whose elements each match `element`.
    /// `None` imposes no per-element constraint.
    Sequence { element: Option<Box<SchemaNode>> },
}

impl SchemaNode {
    /// Scalar node accepting a single kind
    pub fn scalar(kind: ScalarKind) -> Self {
        SchemaNode::Scalar { types: vec![kind] }
    }

    /// Scalar node accepting any of the listed kinds
    pub fn either(kinds: &[ScalarKind]) -> Self {
        SchemaNode::Scalar {
            types: kinds.to_vec(),
        }
    }

    /// Mapping node with the given required fields
    pub fn mapping(fields: Vec<(&str, SchemaNode)>) -> Self {
        SchemaNode::Mapping {
            fields: fields
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    /// Sequence node whose elements must match `element`
    pub fn sequence_of(element: SchemaNode) -> Self {
        SchemaNode::Sequence {
            element: Some(Box::new(element)),
        }
    }

    /// Sequence node with no per-element constraint
    pub fn any_sequence() -> Self {
        SchemaNode::Sequence { element: None }
    }

    /// Descriptor used when this node's expectation is reported: the shape
    /// tag for containers, the primary type name for scalars.
    pub fn expected_descriptor(&self) -> &'static str {
        match self {
            SchemaNode::Scalar { types } => {
                types.first().map(ScalarKind::name).unwrap_or("null")
            }
            SchemaNode::Mapping { .. } => "mapping",
            SchemaNode::Sequence { .. } => "sequence",
        }
    }
}

/// Runtime type name of a document value, as shown in diagnostics
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

use crate::schema::{value_type_name, SchemaNode};

/// One step in a document path: a mapping field or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl PathSegment {
    pub fn field(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }

    pub fn index(index: usize) -> Self {
        PathSegment::Index(index)
    }

    /// Field name carried by this segment, if any
    pub fn as_field(&self) -> Option<&str> {
        match self {
            PathSegment::Field(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }

    /// Sequence index carried by this segment, if any
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(index) => Some(*index),
            PathSegment::Field(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// What the validator actually found at a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActualType {
    /// Required field absent from the document
    Missing,
    /// Present, with this runtime type
    Type(&'static str),
}

impl ActualType {
    pub fn is_missing(&self) -> bool {
        matches!(self, ActualType::Missing)
    }

    /// Name as shown in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ActualType::Missing => "missing",
            ActualType::Type(name) => name,
        }
    }
}

/// A single structural or type mismatch, located by its document path.
///
/// Created during one validation pass and consumed by the reporter within
/// the same check; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    /// Path from the document root to the offending node
    pub path: Vec<PathSegment>,
    /// Primitive type tag, or the shape tag `mapping`/`sequence`
    pub expected: &'static str,
    /// Runtime type encountered, or the missing sentinel
    pub actual: ActualType,
}

impl Discrepancy {
    /// Top-level section this discrepancy belongs to
    pub fn section(&self) -> &str {
        self.path
            .first()
            .and_then(PathSegment::as_field)
            .unwrap_or("")
    }

    /// Leaf field label: the last field segment plus any trailing indices,
    /// e.g. `websites[2]`. For a top-level discrepancy this is the section
    /// name itself.
    pub fn leaf_label(&self) -> String {
        let start = self
            .path
            .iter()
            .rposition(|segment| matches!(segment, PathSegment::Field(_)))
            .unwrap_or(0);
        self.path[start..]
            .iter()
            .map(PathSegment::to_string)
            .collect()
    }

    /// Index of the repeated entry this discrepancy falls under: the first
    /// numeric segment after the section name, at any nesting depth.
    pub fn entry_index(&self) -> Option<usize> {
        self.path.iter().skip(1).find_map(PathSegment::as_index)
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut path = String::new();
        for segment in &self.path {
            if matches!(segment, PathSegment::Field(_)) && !path.is_empty() {
                path.push('/');
            }
            path.push_str(&segment.to_string());
        }
        write!(
            f,
            "discrepancy at '{}': expected {}, got {}",
            path,
            self.expected,
            self.actual.name()
        )
    }
}

/// Validates a parsed document against a schema, accumulating every
/// discrepancy found in a single depth-first pass.
pub struct StructuralValidator;

impl StructuralValidator {
    /// Walk `document` against `schema` and return all discrepancies in
    /// traversal order. Pure function of its inputs: no side effects, no
    /// hidden state, no exceptions for structural mismatches.
    pub fn validate(document: &Value, schema: &SchemaNode) -> Vec<Discrepancy> {
        let mut discrepancies = Vec::new();
        let mut path = Vec::new();
        Self::validate_node(document, schema, &mut path, &mut discrepancies);
        discrepancies
    }

    fn validate_node(
        value: &Value,
        schema: &SchemaNode,
        path: &mut Vec<PathSegment>,
        discrepancies: &mut Vec<Discrepancy>,
    ) {
        match schema {
            SchemaNode::Mapping { fields } => match value {
                Value::Mapping(mapping) => {
                    for (field_name, field_schema) in fields {
                        path.push(PathSegment::field(field_name));
                        match mapping.get(field_name.as_str()) {
                            Some(field_value) => {
                                Self::validate_node(field_value, field_schema, path, discrepancies);
                            }
                            None => discrepancies.push(Discrepancy {
                                path: path.clone(),
                                expected: field_schema.expected_descriptor(),
                                actual: ActualType::Missing,
                            }),
                        }
                        path.pop();
                    }
                }
                // wrong container kind: report once, do not descend
                _ => discrepancies.push(Discrepancy {
                    path: path.clone(),
                    expected: "mapping",
                    actual: ActualType::Type(value_type_name(value)),
                }),
            },
            SchemaNode::Sequence { element } => match value {
                Value::Sequence(items) => {
                    if let Some(element_schema) = element {
                        for (index, item) in items.iter().enumerate() {
                            path.push(PathSegment::Index(index));
                            Self::validate_node(item, element_schema, path, discrepancies);
                            path.pop();
                        }
                    }
                }
                _ => discrepancies.push(Discrepancy {
                    path: path.clone(),
                    expected: "sequence",
                    actual: ActualType::Type(value_type_name(value)),
                }),
            },
            SchemaNode::Scalar { types } => {
                if !types.iter().any(|kind| kind.matches(value)) {
                    discrepancies.push(Discrepancy {
                        path: path.clone(),
                        expected: schema.expected_descriptor(),
                        actual: ActualType::Type(value_type_name(value)),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScalarKind;

    #[test]
    fn test_leaf_label_keeps_trailing_indices() {
        let discrepancy = Discrepancy {
            path: vec![
                PathSegment::field("basic"),
                PathSegment::field("websites"),
                PathSegment::Index(2),
            ],
            expected: "string",
            actual: ActualType::Type("integer"),
        };
        assert_eq!(discrepancy.leaf_label(), "websites[2]");
        assert_eq!(discrepancy.section(), "basic");
    }

    #[test]
    fn test_entry_index_found_at_any_depth() {
        let discrepancy = Discrepancy {
            path: vec![
                PathSegment::field("experiences"),
                PathSegment::Index(1),
                PathSegment::field("titles"),
                PathSegment::Index(0),
                PathSegment::field("startdate"),
            ],
            expected: "integer",
            actual: ActualType::Type("sequence"),
        };
        assert_eq!(discrepancy.entry_index(), Some(1));
    }

    #[test]
    fn test_non_mapping_root_reports_once() {
        let schema = SchemaNode::mapping(vec![(
            "name",
            SchemaNode::scalar(ScalarKind::String),
        )]);
        let document: Value = serde_yaml::from_str("just a string").unwrap();

        let discrepancies = StructuralValidator::validate(&document, &schema);
        assert_eq!(discrepancies.len(), 1);
        assert_eq!(discrepancies[0].expected, "mapping");
        assert_eq!(discrepancies[0].actual, ActualType::Type("string"));
        assert!(discrepancies[0].path.is_empty());
    }
}

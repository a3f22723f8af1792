pub mod resume_schema;
pub mod schema_node;

pub use resume_schema::ResumeSchema;
pub use schema_node::{value_type_name, ScalarKind, SchemaNode};

pub mod structural_validator;

pub use structural_validator::{ActualType, Discrepancy, PathSegment, StructuralValidator};

pub mod field_ops;
pub mod validation;

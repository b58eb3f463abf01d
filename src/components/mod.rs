//! UI components.

pub mod fabric_field;

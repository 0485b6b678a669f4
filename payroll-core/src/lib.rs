pub mod calculations;
pub mod models;

pub use calculations::{
    StructureViolation, ValidationReport, auto_balance_components, calculate_salary,
    validate_structure,
};
pub use models::*;

//! Salary structure calculation engine.
//!
//! Three responsibilities form a pipeline: the component resolver turns
//! one configured component into an absolute amount, the aggregator runs
//! the resolver over earnings then deductions to produce the payslip
//! breakdown, and the balancer/validator adjusts the flexible component
//! to meet the CTC and checks the structure's invariants.
//!
//! Every public operation here is a pure, stateless function of its
//! explicit inputs.

mod aggregate;
mod balance;
pub mod common;
mod resolver;

pub use aggregate::calculate_salary;
pub use balance::{
    StructureViolation, ValidationReport, auto_balance_components, validate_structure,
};
pub use resolver::{Aggregates, Resolution, ResolvedComponent, resolve_component};

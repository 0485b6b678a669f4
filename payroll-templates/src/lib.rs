//! Component catalog collaborator for the salary calculation engine.
//!
//! Supplies the default Indian payroll component set, built-in
//! designation-keyed templates, and a CSV loader for externally supplied
//! templates. Everything here produces plain data for `payroll-core`;
//! nothing calls back into it except the tests and the `payslip` binary.

mod catalog;
mod loader;

pub use catalog::{designation_templates, standard_components, template_for};
pub use loader::{TemplateLoader, TemplateLoaderError, TemplateRecord};

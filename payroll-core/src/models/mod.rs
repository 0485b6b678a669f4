mod payroll_calculation;
mod salary_component;
mod salary_structure;
mod salary_template;

pub use payroll_calculation::PayrollCalculation;
pub use salary_component::{
    BaseReference, CalculationType, ComponentKind, ComponentRole, SalaryComponent,
};
pub use salary_structure::EmployeeSalaryStructure;
pub use salary_template::{ComponentOverride, DesignationTemplate};

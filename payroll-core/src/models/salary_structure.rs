use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::salary_component::SalaryComponent;

/// A salary structure assigned to an employee.
///
/// Caller-owned record; the engine never stores or retains one. The
/// component list inside it is exactly what the calculation functions
/// consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalaryStructure {
    pub employee_id: String,
    pub designation_id: String,
    pub ctc: Decimal,
    pub components: Vec<SalaryComponent>,
    pub effective_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

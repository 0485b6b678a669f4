use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::salary_component::SalaryComponent;

/// Fully resolved salary breakdown for one CTC and component list.
///
/// A pure value object: the engine hands it back by value and retains no
/// reference to it. The `earnings` and `deductions` entries carry their
/// resolved absolute amounts in `value`, regardless of calculation
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    pub ctc: Decimal,
    pub gross_salary: Decimal,
    pub total_earnings: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
    pub monthly_gross: Decimal,
    pub monthly_net: Decimal,
    pub earnings: Vec<SalaryComponent>,
    pub deductions: Vec<SalaryComponent>,

    /// Names of percentage components whose base could not be resolved and
    /// therefore degraded to zero. Ignored by default; the validator
    /// surfaces them as warnings.
    pub unresolved_bases: Vec<String>,
}

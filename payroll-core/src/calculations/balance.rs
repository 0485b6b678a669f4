//! Balancing and structural validation of a salary structure.
//!
//! Balancing lets one designated earning (the flexible balancer, normally
//! "Special Allowance") absorb whatever amount is needed so the
//! structure's gross equals the target CTC exactly, instead of requiring
//! every percentage to be hand-tuned. Validation checks the structural
//! invariants a structure must satisfy before the caller accepts it, and
//! collects every failure rather than stopping at the first.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::aggregate::calculate_salary;
use crate::calculations::common::format_inr;
use crate::models::{ComponentKind, ComponentRole, SalaryComponent};

/// Allowed gap between target CTC and computed gross, in rupees.
///
/// Per-component rounding can leave the balanced gross a few rupees off
/// the target; anything beyond this band is a configuration problem.
const CTC_MATCH_TOLERANCE: Decimal = Decimal::ONE_HUNDRED;

/// A structural problem found by [`validate_structure`].
///
/// The `Display` strings are user-facing and shown verbatim in the form
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureViolation {
    #[error("Basic Salary is mandatory")]
    MissingBasicSalary,

    #[error("Provident Fund is mandatory")]
    MissingProvidentFund,

    #[error("CTC must be greater than 0")]
    NonPositiveCtc,

    #[error(
        "Salary components (₹{}) don't match CTC (₹{})",
        format_inr(.gross),
        format_inr(.ctc)
    )]
    CtcMismatch { gross: Decimal, ctc: Decimal },
}

/// Outcome of [`validate_structure`]: all violations found, plus
/// non-blocking warnings for percentage bases that silently degraded to
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// `true` iff no violation was found. Warnings never affect this.
    pub valid: bool,
    pub violations: Vec<StructureViolation>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// The violations rendered as user-facing message strings.
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Adjusts the flexible balancer so the structure's gross meets the CTC.
///
/// The balancer is found by role, not by name. Its value is zeroed, the
/// structure is recomputed to get a baseline gross, and the positive
/// deficit (if any) becomes the balancer's new value. A structure that
/// already meets or exceeds the CTC leaves the balancer at zero; a
/// negative allowance is never produced.
///
/// Returns a fresh component list; the input slice is not touched. With
/// no flexible balancer present the input is returned as an unchanged
/// copy. Re-invoking on the output yields the same result, since the
/// balancer is re-zeroed before each recomputation.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::{auto_balance_components, calculate_salary};
/// use payroll_core::{CalculationType, ComponentKind, ComponentRole, SalaryComponent};
///
/// let components = vec![
///     SalaryComponent {
///         id: "basic".to_string(),
///         name: "Basic Salary".to_string(),
///         kind: ComponentKind::Earning,
///         calculation_type: CalculationType::Fixed,
///         value: dec!(240000),
///         base: None,
///         role: ComponentRole::Basic,
///         is_mandatory: true,
///         is_taxable: true,
///         is_statutory: false,
///         display_order: 1,
///     },
///     SalaryComponent {
///         id: "special".to_string(),
///         name: "Special Allowance".to_string(),
///         kind: ComponentKind::Earning,
///         calculation_type: CalculationType::Fixed,
///         value: dec!(0),
///         base: None,
///         role: ComponentRole::FlexibleBalancer,
///         is_mandatory: false,
///         is_taxable: true,
///         is_statutory: false,
///         display_order: 2,
///     },
/// ];
///
/// let balanced = auto_balance_components(dec!(600000), &components);
///
/// assert_eq!(balanced[1].value, dec!(360000));
/// assert_eq!(calculate_salary(dec!(600000), &balanced).gross_salary, dec!(600000));
/// ```
pub fn auto_balance_components(
    ctc: Decimal,
    components: &[SalaryComponent],
) -> Vec<SalaryComponent> {
    let Some(position) = components
        .iter()
        .position(|c| c.role == ComponentRole::FlexibleBalancer)
    else {
        debug!("no flexible balancer in structure; returning components unchanged");
        return components.to_vec();
    };

    let mut balanced = components.to_vec();
    balanced[position].value = Decimal::ZERO;

    let baseline = calculate_salary(ctc, &balanced);
    let deficit = ctc - baseline.gross_salary;

    if deficit > Decimal::ZERO {
        balanced[position].value = deficit;
    } else {
        debug!(
            baseline_gross = %baseline.gross_salary,
            ctc = %ctc,
            "structure meets or exceeds CTC without the balancer; leaving it at zero"
        );
    }

    balanced
}

/// Checks the structural invariants of a salary structure.
///
/// Every applicable check runs; nothing short-circuits:
///
/// - an earning with the basic role must exist,
/// - a deduction with the provident fund role must exist,
/// - the CTC must be greater than zero,
/// - the computed gross must match the CTC within the tolerance band.
///
/// Calling this on an un-balanced structure is a legitimate way to detect
/// drift; in the normal flow the caller balances first so the CTC-match
/// check passes.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::validate_structure;
///
/// let report = validate_structure(dec!(0), &[]);
///
/// assert!(!report.valid);
/// assert_eq!(
///     report.errors(),
///     vec![
///         "Basic Salary is mandatory",
///         "Provident Fund is mandatory",
///         "CTC must be greater than 0",
///     ]
/// );
/// ```
pub fn validate_structure(
    ctc: Decimal,
    components: &[SalaryComponent],
) -> ValidationReport {
    let mut violations = Vec::new();

    let has_basic = components
        .iter()
        .any(|c| c.kind == ComponentKind::Earning && c.role == ComponentRole::Basic);
    if !has_basic {
        violations.push(StructureViolation::MissingBasicSalary);
    }

    let has_pf = components
        .iter()
        .any(|c| c.kind == ComponentKind::Deduction && c.role == ComponentRole::ProvidentFund);
    if !has_pf {
        violations.push(StructureViolation::MissingProvidentFund);
    }

    if ctc <= Decimal::ZERO {
        violations.push(StructureViolation::NonPositiveCtc);
    }

    let calculation = calculate_salary(ctc, components);
    let difference = (ctc - calculation.gross_salary).abs();
    if difference > CTC_MATCH_TOLERANCE {
        violations.push(StructureViolation::CtcMismatch {
            gross: calculation.gross_salary,
            ctc,
        });
    }

    let warnings = calculation
        .unresolved_bases
        .iter()
        .map(|name| format!("{name} references an unknown percentage base and resolved to zero"))
        .collect();

    ValidationReport {
        valid: violations.is_empty(),
        violations,
        warnings,
    }
}

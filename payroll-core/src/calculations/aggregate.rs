//! Salary aggregation: resolving a full component list into a payslip
//! breakdown.
//!
//! The pass order is the contract that makes percentage bases sound:
//! all earnings resolve first (in `display_order`, ties broken by input
//! order), publishing `basic` as soon as the basic component resolves and
//! `gross`/`taxable` once the earnings pass completes; deductions resolve
//! after that, against the completed aggregates. Deductions never update
//! an aggregate.
//!
//! This layer has no failure path. Malformed percentage bases degrade to
//! zero inside the resolver and are reported through
//! [`PayrollCalculation::unresolved_bases`]; acceptability of the result
//! is the validator's concern.

use rust_decimal::Decimal;

use crate::calculations::common::round_rupee;
use crate::calculations::resolver::{Aggregates, Resolution, resolve_component};
use crate::models::{ComponentKind, ComponentRole, PayrollCalculation, SalaryComponent};

/// Calculates the complete salary breakdown for a CTC and component list.
///
/// Deterministic for identical inputs, and total: any list of well-formed
/// components produces a breakdown. An empty list yields all-zero totals.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::calculate_salary;
/// use payroll_core::{
///     BaseReference, CalculationType, ComponentKind, ComponentRole, SalaryComponent,
/// };
///
/// let components = vec![
///     SalaryComponent {
///         id: "basic".to_string(),
///         name: "Basic Salary".to_string(),
///         kind: ComponentKind::Earning,
///         calculation_type: CalculationType::Percentage,
///         value: dec!(40),
///         base: Some(BaseReference::Ctc),
///         role: ComponentRole::Basic,
///         is_mandatory: true,
///         is_taxable: true,
///         is_statutory: false,
///         display_order: 1,
///     },
///     SalaryComponent {
///         id: "hra".to_string(),
///         name: "House Rent Allowance (HRA)".to_string(),
///         kind: ComponentKind::Earning,
///         calculation_type: CalculationType::Percentage,
///         value: dec!(50),
///         base: Some(BaseReference::Basic),
///         role: ComponentRole::None,
///         is_mandatory: true,
///         is_taxable: true,
///         is_statutory: false,
///         display_order: 2,
///     },
///     SalaryComponent {
///         id: "pf".to_string(),
///         name: "Provident Fund (PF)".to_string(),
///         kind: ComponentKind::Deduction,
///         calculation_type: CalculationType::Percentage,
///         value: dec!(12),
///         base: Some(BaseReference::Basic),
///         role: ComponentRole::ProvidentFund,
///         is_mandatory: true,
///         is_taxable: false,
///         is_statutory: true,
///         display_order: 3,
///     },
/// ];
///
/// let calculation = calculate_salary(dec!(600000), &components);
///
/// assert_eq!(calculation.earnings[0].value, dec!(240000)); // 40% of CTC
/// assert_eq!(calculation.earnings[1].value, dec!(120000)); // 50% of basic
/// assert_eq!(calculation.deductions[0].value, dec!(28800)); // 12% of basic
/// assert_eq!(calculation.net_salary, dec!(331200));
/// ```
pub fn calculate_salary(
    ctc: Decimal,
    components: &[SalaryComponent],
) -> PayrollCalculation {
    let mut aggregates = Aggregates::new(ctc);
    let mut unresolved_bases = Vec::new();

    // Earnings pass. The basic component publishes its aggregate as soon
    // as it resolves; every earning is recorded under its name for direct
    // component references.
    let mut earnings = Vec::new();
    for component in in_display_order(components, ComponentKind::Earning) {
        let resolved = resolve_component(component, &aggregates);
        if resolved.resolution == Resolution::UnresolvedBase {
            unresolved_bases.push(resolved.component.name.clone());
        }
        if component.role == ComponentRole::Basic {
            aggregates.set_basic(resolved.component.value);
        }
        aggregates.record_earning(&resolved.component.name, resolved.component.value);
        earnings.push(resolved.component);
    }

    let total_earnings: Decimal = earnings.iter().map(|c| c.value).sum();
    let taxable: Decimal = earnings
        .iter()
        .filter(|c| c.is_taxable)
        .map(|c| c.value)
        .sum();
    aggregates.set_gross(total_earnings);
    aggregates.set_taxable(taxable);

    // Deductions pass, against the now-complete aggregates.
    let mut deductions = Vec::new();
    for component in in_display_order(components, ComponentKind::Deduction) {
        let resolved = resolve_component(component, &aggregates);
        if resolved.resolution == Resolution::UnresolvedBase {
            unresolved_bases.push(resolved.component.name.clone());
        }
        deductions.push(resolved.component);
    }

    let total_deductions: Decimal = deductions.iter().map(|c| c.value).sum();
    let net_salary = total_earnings - total_deductions;
    let months = Decimal::from(12);

    PayrollCalculation {
        ctc,
        gross_salary: total_earnings,
        total_earnings,
        total_deductions,
        net_salary,
        monthly_gross: round_rupee(total_earnings / months),
        monthly_net: round_rupee(net_salary / months),
        earnings,
        deductions,
        unresolved_bases,
    }
}

/// Components of one kind, sorted ascending by `display_order`. The sort
/// is stable, so ties keep their input order.
fn in_display_order(
    components: &[SalaryComponent],
    kind: ComponentKind,
) -> Vec<&SalaryComponent> {
    let mut selected: Vec<&SalaryComponent> =
        components.iter().filter(|c| c.kind == kind).collect();
    selected.sort_by_key(|c| c.display_order);
    selected
}

//! Component resolution: turning one configured component into an
//! absolute rupee amount.
//!
//! Resolution is a pure function of the component and the aggregate bag
//! built up by the surrounding calculation pass. A percentage component
//! whose base is absent or unknown degrades to zero instead of failing;
//! the outcome variant records that this happened so validation can
//! surface it without changing the default behavior.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::round_rupee;
use crate::models::{BaseReference, CalculationType, SalaryComponent};

/// Named scalar bag populated during one calculation pass.
///
/// Holds the fixed `ctc` input, the `basic`/`gross`/`taxable` aggregates
/// published as the earnings pass progresses, and every resolved earning
/// keyed by its lowercase display name. Created fresh per calculation
/// call and discarded after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    ctc: Decimal,
    basic: Decimal,
    gross: Decimal,
    taxable: Decimal,
    earnings: HashMap<String, Decimal>,
}

impl Aggregates {
    pub fn new(ctc: Decimal) -> Self {
        Self {
            ctc,
            basic: Decimal::ZERO,
            gross: Decimal::ZERO,
            taxable: Decimal::ZERO,
            earnings: HashMap::new(),
        }
    }

    pub fn ctc(&self) -> Decimal {
        self.ctc
    }

    pub fn set_basic(
        &mut self,
        basic: Decimal,
    ) {
        self.basic = basic;
    }

    pub fn set_gross(
        &mut self,
        gross: Decimal,
    ) {
        self.gross = gross;
    }

    pub fn set_taxable(
        &mut self,
        taxable: Decimal,
    ) {
        self.taxable = taxable;
    }

    /// Records a resolved earning under its lowercase display name so a
    /// later percentage component can reference it directly.
    pub fn record_earning(
        &mut self,
        name: &str,
        value: Decimal,
    ) {
        self.earnings.insert(name.to_lowercase(), value);
    }

    /// Looks up the value a percentage base refers to, if it is known.
    pub fn base_value(
        &self,
        base: &BaseReference,
    ) -> Option<Decimal> {
        match base {
            BaseReference::Ctc => Some(self.ctc),
            BaseReference::Basic => Some(self.basic),
            BaseReference::Gross => Some(self.gross),
            BaseReference::Taxable => Some(self.taxable),
            BaseReference::Component(name) => self.earnings.get(name).copied(),
        }
    }
}

/// How a component's value came to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The calculation rule evaluated normally.
    Resolved,
    /// The percentage base was absent or unknown; the value degraded to zero.
    UnresolvedBase,
    /// The component is a `Formula` type; no formula language is evaluated
    /// yet, so the configured value was taken literally.
    FormulaNotEvaluated,
}

/// A component with its resolved absolute amount, plus the outcome of the
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub component: SalaryComponent,
    pub resolution: Resolution,
}

/// Resolves one component against the current aggregate bag.
///
/// - `Fixed`: the configured value, rounded to a whole rupee.
/// - `Percentage`: `round_rupee(base × value / 100)`. An absent or unknown
///   base evaluates to zero, a documented silent degrade reported only
///   through the [`Resolution::UnresolvedBase`] outcome.
/// - `Formula`: the configured value taken literally.
///
/// Rounding is applied independently per component, so downstream
/// aggregates always consume already-rounded figures.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::{Aggregates, Resolution, resolve_component};
/// use payroll_core::{
///     BaseReference, CalculationType, ComponentKind, ComponentRole, SalaryComponent,
/// };
///
/// let basic = SalaryComponent {
///     id: "basic".to_string(),
///     name: "Basic Salary".to_string(),
///     kind: ComponentKind::Earning,
///     calculation_type: CalculationType::Percentage,
///     value: dec!(40),
///     base: Some(BaseReference::Ctc),
///     role: ComponentRole::Basic,
///     is_mandatory: true,
///     is_taxable: true,
///     is_statutory: false,
///     display_order: 1,
/// };
///
/// let aggregates = Aggregates::new(dec!(600000));
/// let resolved = resolve_component(&basic, &aggregates);
///
/// assert_eq!(resolved.component.value, dec!(240000));
/// assert_eq!(resolved.resolution, Resolution::Resolved);
/// ```
pub fn resolve_component(
    component: &SalaryComponent,
    aggregates: &Aggregates,
) -> ResolvedComponent {
    let (value, resolution) = match component.calculation_type {
        CalculationType::Fixed => (component.value, Resolution::Resolved),
        CalculationType::Percentage => match &component.base {
            Some(base) => match aggregates.base_value(base) {
                Some(base_value) => (
                    base_value * component.value / Decimal::ONE_HUNDRED,
                    Resolution::Resolved,
                ),
                None => {
                    warn!(
                        component = %component.name,
                        base = %base.key(),
                        "percentage base is not a known aggregate; resolving to zero"
                    );
                    (Decimal::ZERO, Resolution::UnresolvedBase)
                }
            },
            None => {
                warn!(
                    component = %component.name,
                    "percentage component has no base; resolving to zero"
                );
                (Decimal::ZERO, Resolution::UnresolvedBase)
            }
        },
        CalculationType::Formula => {
            debug!(
                component = %component.name,
                "formula evaluation is not implemented; using configured value"
            );
            (component.value, Resolution::FormulaNotEvaluated)
        }
    };

    let mut component = component.clone();
    component.value = round_rupee(value);

    ResolvedComponent {
        component,
        resolution,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::models::{ComponentKind, ComponentRole};

    /// Initializes tracing subscriber for tests that exercise warn paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn percentage(
        name: &str,
        value: Decimal,
        base: &str,
    ) -> SalaryComponent {
        SalaryComponent {
            id: name.to_lowercase(),
            name: name.to_string(),
            kind: ComponentKind::Earning,
            calculation_type: CalculationType::Percentage,
            value,
            base: Some(BaseReference::parse(base)),
            role: ComponentRole::infer(name),
            is_mandatory: false,
            is_taxable: true,
            is_statutory: false,
            display_order: 1,
        }
    }

    fn fixed(
        name: &str,
        value: Decimal,
    ) -> SalaryComponent {
        SalaryComponent {
            id: name.to_lowercase(),
            name: name.to_string(),
            kind: ComponentKind::Earning,
            calculation_type: CalculationType::Fixed,
            value,
            base: None,
            role: ComponentRole::infer(name),
            is_mandatory: false,
            is_taxable: false,
            is_statutory: false,
            display_order: 1,
        }
    }

    // =========================================================================
    // Aggregates tests
    // =========================================================================

    #[test]
    fn aggregates_start_with_only_ctc_populated() {
        let aggregates = Aggregates::new(dec!(600000));

        assert_eq!(aggregates.base_value(&BaseReference::Ctc), Some(dec!(600000)));
        assert_eq!(aggregates.base_value(&BaseReference::Basic), Some(dec!(0)));
        assert_eq!(aggregates.base_value(&BaseReference::Gross), Some(dec!(0)));
        assert_eq!(aggregates.base_value(&BaseReference::Taxable), Some(dec!(0)));
    }

    #[test]
    fn aggregates_expose_recorded_earnings_by_lowercase_name() {
        let mut aggregates = Aggregates::new(dec!(600000));

        aggregates.record_earning("Basic Salary", dec!(240000));

        assert_eq!(
            aggregates.base_value(&BaseReference::parse("Basic Salary")),
            Some(dec!(240000))
        );
    }

    #[test]
    fn aggregates_return_none_for_unknown_component_base() {
        let aggregates = Aggregates::new(dec!(600000));

        let result = aggregates.base_value(&BaseReference::parse("Bonus"));

        assert_eq!(result, None);
    }

    // =========================================================================
    // resolve_component tests
    // =========================================================================

    #[test]
    fn fixed_component_resolves_to_its_configured_value() {
        let aggregates = Aggregates::new(dec!(600000));

        let resolved = resolve_component(&fixed("Transport Allowance", dec!(1600)), &aggregates);

        assert_eq!(resolved.component.value, dec!(1600));
        assert_eq!(resolved.resolution, Resolution::Resolved);
    }

    #[test]
    fn percentage_component_resolves_against_ctc() {
        let aggregates = Aggregates::new(dec!(600000));

        let resolved = resolve_component(&percentage("Basic Salary", dec!(40), "ctc"), &aggregates);

        assert_eq!(resolved.component.value, dec!(240000));
        assert_eq!(resolved.resolution, Resolution::Resolved);
    }

    #[test]
    fn percentage_component_resolves_against_published_basic() {
        let mut aggregates = Aggregates::new(dec!(600000));
        aggregates.set_basic(dec!(240000));

        let resolved = resolve_component(
            &percentage("House Rent Allowance (HRA)", dec!(50), "basic"),
            &aggregates,
        );

        assert_eq!(resolved.component.value, dec!(120000));
    }

    #[test]
    fn percentage_resolution_rounds_to_whole_rupees() {
        let mut aggregates = Aggregates::new(dec!(500000));
        aggregates.set_basic(dec!(166667));

        // 166667 × 12% = 20000.04
        let resolved = resolve_component(
            &percentage("Provident Fund (PF)", dec!(12), "basic"),
            &aggregates,
        );

        assert_eq!(resolved.component.value, dec!(20000));
    }

    #[test]
    fn unknown_base_degrades_to_zero() {
        let _guard = init_test_tracing();
        let aggregates = Aggregates::new(dec!(600000));

        let resolved =
            resolve_component(&percentage("Night Shift Bonus", dec!(10), "overtime"), &aggregates);

        assert_eq!(resolved.component.value, dec!(0));
        assert_eq!(resolved.resolution, Resolution::UnresolvedBase);
    }

    #[test]
    fn missing_base_degrades_to_zero() {
        let _guard = init_test_tracing();
        let aggregates = Aggregates::new(dec!(600000));
        let mut component = percentage("Night Shift Bonus", dec!(10), "ctc");
        component.base = None;

        let resolved = resolve_component(&component, &aggregates);

        assert_eq!(resolved.component.value, dec!(0));
        assert_eq!(resolved.resolution, Resolution::UnresolvedBase);
    }

    #[test]
    fn formula_component_falls_back_to_literal_value() {
        let aggregates = Aggregates::new(dec!(600000));
        let mut component = fixed("Performance Incentive", dec!(5000));
        component.calculation_type = CalculationType::Formula;

        let resolved = resolve_component(&component, &aggregates);

        assert_eq!(resolved.component.value, dec!(5000));
        assert_eq!(resolved.resolution, Resolution::FormulaNotEvaluated);
    }

    #[test]
    fn fixed_component_with_fractional_value_is_rounded() {
        let aggregates = Aggregates::new(dec!(600000));

        let resolved = resolve_component(&fixed("Transport Allowance", dec!(1600.5)), &aggregates);

        assert_eq!(resolved.component.value, dec!(1601));
    }

    #[test]
    fn resolution_does_not_mutate_the_input_component() {
        let aggregates = Aggregates::new(dec!(600000));
        let component = percentage("Basic Salary", dec!(40), "ctc");

        let _ = resolve_component(&component, &aggregates);

        assert_eq!(component.value, dec!(40));
    }
}

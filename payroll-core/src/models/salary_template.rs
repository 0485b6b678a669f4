use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::salary_component::SalaryComponent;

/// A single value override applied on top of a base component set.
///
/// `value` is interpreted by the matched component's calculation type:
/// percentage points for percentage components, an absolute amount for
/// fixed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOverride {
    pub name: String,
    pub value: Decimal,
}

/// A designation-keyed salary template: a CTC band plus the component
/// values conventionally used for that designation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignationTemplate {
    pub designation_name: String,
    pub ctc_min: Decimal,
    pub ctc_max: Decimal,
    pub overrides: Vec<ComponentOverride>,
}

impl DesignationTemplate {
    /// Returns whether a CTC falls within this template's band.
    pub fn covers_ctc(&self, ctc: Decimal) -> bool {
        ctc >= self.ctc_min && ctc <= self.ctc_max
    }

    /// Applies the template's overrides to a base component set, returning
    /// a new list. Components without a matching override keep their
    /// configured value; overrides that match nothing are ignored.
    pub fn apply_to(&self, base: &[SalaryComponent]) -> Vec<SalaryComponent> {
        base.iter()
            .map(|component| {
                let mut component = component.clone();
                if let Some(value) = self.override_for(&component.name) {
                    component.value = value;
                }
                component
            })
            .collect()
    }

    fn override_for(&self, name: &str) -> Option<Decimal> {
        self.overrides
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::salary_component::{
        CalculationType, ComponentKind, ComponentRole, SalaryComponent,
    };

    fn component(name: &str, value: Decimal) -> SalaryComponent {
        SalaryComponent {
            id: name.to_lowercase(),
            name: name.to_string(),
            kind: ComponentKind::Earning,
            calculation_type: CalculationType::Fixed,
            value,
            base: None,
            role: ComponentRole::infer(name),
            is_mandatory: false,
            is_taxable: true,
            is_statutory: false,
            display_order: 1,
        }
    }

    fn template() -> DesignationTemplate {
        DesignationTemplate {
            designation_name: "Software Engineer".to_string(),
            ctc_min: dec!(300000),
            ctc_max: dec!(800000),
            overrides: vec![
                ComponentOverride {
                    name: "Basic Salary".to_string(),
                    value: dec!(40),
                },
                ComponentOverride {
                    name: "Gratuity".to_string(),
                    value: dec!(5),
                },
            ],
        }
    }

    #[test]
    fn covers_ctc_is_inclusive_at_both_ends() {
        let template = template();

        assert!(template.covers_ctc(dec!(300000)));
        assert!(template.covers_ctc(dec!(800000)));
        assert!(!template.covers_ctc(dec!(299999)));
        assert!(!template.covers_ctc(dec!(800001)));
    }

    #[test]
    fn apply_to_overrides_matching_components() {
        let base = vec![component("Basic Salary", dec!(0))];

        let applied = template().apply_to(&base);

        assert_eq!(applied[0].value, dec!(40));
    }

    #[test]
    fn apply_to_leaves_unmatched_components_alone() {
        let base = vec![component("Medical Allowance", dec!(1250))];

        let applied = template().apply_to(&base);

        assert_eq!(applied[0].value, dec!(1250));
    }

    #[test]
    fn apply_to_does_not_mutate_the_base_list() {
        let base = vec![component("Basic Salary", dec!(0))];

        let _ = template().apply_to(&base);

        assert_eq!(base[0].value, dec!(0));
    }
}

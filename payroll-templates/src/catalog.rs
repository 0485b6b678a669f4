//! The standard Indian payroll component catalog and the built-in
//! designation templates.
//!
//! The catalog carries structure (kinds, calculation rules, bases, flags,
//! ordering) with all values at zero; a designation template supplies the
//! values conventionally used for that designation. The engine consumes
//! the result as plain data.

use payroll_core::models::{
    BaseReference, CalculationType, ComponentKind, ComponentOverride, ComponentRole,
    DesignationTemplate, SalaryComponent,
};
use rust_decimal::Decimal;

fn component(
    id: &str,
    name: &str,
    kind: ComponentKind,
    calculation_type: CalculationType,
    base: Option<BaseReference>,
    is_mandatory: bool,
    is_taxable: bool,
    is_statutory: bool,
    display_order: i32,
) -> SalaryComponent {
    SalaryComponent {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        calculation_type,
        value: Decimal::ZERO,
        base,
        role: ComponentRole::infer(name),
        is_mandatory,
        is_taxable,
        is_statutory,
        display_order,
    }
}

/// The ten standard components every structure starts from.
///
/// Values are zero until a template or the caller supplies them.
pub fn standard_components() -> Vec<SalaryComponent> {
    use CalculationType::{Fixed, Percentage};
    use ComponentKind::{Deduction, Earning};

    vec![
        component(
            "basic",
            "Basic Salary",
            Earning,
            Percentage,
            Some(BaseReference::Ctc),
            true,
            true,
            false,
            1,
        ),
        component(
            "hra",
            "House Rent Allowance (HRA)",
            Earning,
            Percentage,
            Some(BaseReference::Basic),
            true,
            true,
            false,
            2,
        ),
        component(
            "da",
            "Dearness Allowance (DA)",
            Earning,
            Percentage,
            Some(BaseReference::Basic),
            false,
            true,
            false,
            3,
        ),
        component(
            "transport",
            "Transport Allowance",
            Earning,
            Fixed,
            None,
            false,
            false,
            false,
            4,
        ),
        component(
            "medical",
            "Medical Allowance",
            Earning,
            Fixed,
            None,
            false,
            false,
            false,
            5,
        ),
        component(
            "special",
            "Special Allowance",
            Earning,
            Fixed,
            None,
            false,
            true,
            false,
            6,
        ),
        component(
            "pf",
            "Provident Fund (PF)",
            Deduction,
            Percentage,
            Some(BaseReference::Basic),
            true,
            false,
            true,
            7,
        ),
        component(
            "esi",
            "Employee State Insurance (ESI)",
            Deduction,
            Percentage,
            Some(BaseReference::Gross),
            false,
            false,
            true,
            8,
        ),
        component(
            "pt",
            "Professional Tax",
            Deduction,
            Fixed,
            None,
            false,
            false,
            true,
            9,
        ),
        component(
            "tds",
            "Income Tax (TDS)",
            Deduction,
            Percentage,
            Some(BaseReference::Taxable),
            true,
            false,
            true,
            10,
        ),
    ]
}

fn overrides(pairs: &[(&str, Decimal)]) -> Vec<ComponentOverride> {
    pairs
        .iter()
        .map(|(name, value)| ComponentOverride {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

/// The built-in designation templates with their CTC bands.
pub fn designation_templates() -> Vec<DesignationTemplate> {
    vec![
        DesignationTemplate {
            designation_name: "Software Engineer".to_string(),
            ctc_min: Decimal::from(300_000),
            ctc_max: Decimal::from(800_000),
            overrides: overrides(&[
                ("Basic Salary", Decimal::from(40)),
                ("House Rent Allowance (HRA)", Decimal::from(50)),
                ("Transport Allowance", Decimal::from(1600)),
                ("Medical Allowance", Decimal::from(1250)),
                ("Special Allowance", Decimal::ZERO),
                ("Provident Fund (PF)", Decimal::from(12)),
                ("Professional Tax", Decimal::from(200)),
            ]),
        },
        DesignationTemplate {
            designation_name: "Senior Software Engineer".to_string(),
            ctc_min: Decimal::from(800_000),
            ctc_max: Decimal::from(1_500_000),
            overrides: overrides(&[
                ("Basic Salary", Decimal::from(40)),
                ("House Rent Allowance (HRA)", Decimal::from(50)),
                ("Dearness Allowance (DA)", Decimal::from(10)),
                ("Transport Allowance", Decimal::from(3200)),
                ("Medical Allowance", Decimal::from(1250)),
                ("Special Allowance", Decimal::ZERO),
                ("Provident Fund (PF)", Decimal::from(12)),
                ("Professional Tax", Decimal::from(200)),
            ]),
        },
        DesignationTemplate {
            designation_name: "Team Lead".to_string(),
            ctc_min: Decimal::from(1_200_000),
            ctc_max: Decimal::from(2_000_000),
            overrides: overrides(&[
                ("Basic Salary", Decimal::from(45)),
                ("House Rent Allowance (HRA)", Decimal::from(50)),
                ("Dearness Allowance (DA)", Decimal::from(15)),
                ("Transport Allowance", Decimal::from(3200)),
                ("Medical Allowance", Decimal::from(1250)),
                ("Special Allowance", Decimal::ZERO),
                ("Provident Fund (PF)", Decimal::from(12)),
                ("Professional Tax", Decimal::from(200)),
            ]),
        },
        DesignationTemplate {
            designation_name: "Manager".to_string(),
            ctc_min: Decimal::from(1_500_000),
            ctc_max: Decimal::from(3_000_000),
            overrides: overrides(&[
                ("Basic Salary", Decimal::from(45)),
                ("House Rent Allowance (HRA)", Decimal::from(50)),
                ("Dearness Allowance (DA)", Decimal::from(20)),
                ("Transport Allowance", Decimal::from(6400)),
                ("Medical Allowance", Decimal::from(1250)),
                ("Special Allowance", Decimal::ZERO),
                ("Provident Fund (PF)", Decimal::from(12)),
                ("Professional Tax", Decimal::from(200)),
            ]),
        },
        DesignationTemplate {
            designation_name: "HR Executive".to_string(),
            ctc_min: Decimal::from(250_000),
            ctc_max: Decimal::from(500_000),
            overrides: overrides(&[
                ("Basic Salary", Decimal::from(40)),
                ("House Rent Allowance (HRA)", Decimal::from(50)),
                ("Transport Allowance", Decimal::from(1600)),
                ("Medical Allowance", Decimal::from(1250)),
                ("Special Allowance", Decimal::ZERO),
                ("Provident Fund (PF)", Decimal::from(12)),
                ("Professional Tax", Decimal::from(200)),
            ]),
        },
    ]
}

/// Looks up a built-in template by designation name.
pub fn template_for(designation: &str) -> Option<DesignationTemplate> {
    designation_templates()
        .into_iter()
        .find(|t| t.designation_name == designation)
}

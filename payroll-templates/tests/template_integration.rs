//! End-to-end tests: CSV templates through seeding, balancing, and
//! validation.

use chrono::Utc;
use payroll_core::models::EmployeeSalaryStructure;
use payroll_core::{auto_balance_components, calculate_salary, validate_structure};
use payroll_templates::{TemplateLoader, standard_components};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const TEMPLATES_CSV: &str = include_str!("../test-data/designation_templates.csv");

#[test]
fn loads_both_designations_from_the_fixture() {
    let records = TemplateLoader::parse(TEMPLATES_CSV.as_bytes()).expect("Failed to parse CSV");

    let templates = TemplateLoader::build(&records).expect("Failed to build templates");

    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].designation_name, "Consultant");
    assert_eq!(templates[0].overrides.len(), 7);
    assert_eq!(templates[1].designation_name, "Principal Consultant");
    assert_eq!(templates[1].overrides.len(), 8);
}

#[test]
fn consultant_template_produces_a_balanced_payslip() {
    let records = TemplateLoader::parse(TEMPLATES_CSV.as_bytes()).expect("Failed to parse CSV");
    let templates = TemplateLoader::build(&records).expect("Failed to build templates");
    let consultant = &templates[0];

    let ctc = dec!(750000);
    assert!(consultant.covers_ctc(ctc));

    let components = consultant.apply_to(&standard_components());
    let balanced = auto_balance_components(ctc, &components);
    let report = validate_structure(ctc, &balanced);
    assert!(report.valid, "{:?}", report.errors());

    let calculation = calculate_salary(ctc, &balanced);

    // Basic 40% of CTC, HRA 50% of basic, fixed 2000 + 1500; the Special
    // Allowance absorbs the rest.
    assert_eq!(calculation.gross_salary, dec!(750000));
    let special = calculation
        .earnings
        .iter()
        .find(|c| c.name == "Special Allowance")
        .unwrap();
    assert_eq!(special.value, dec!(296500));
    assert_eq!(calculation.total_deductions, dec!(36200)); // PF 36000 + PT 200
    assert_eq!(calculation.net_salary, dec!(713800));
    assert_eq!(calculation.monthly_gross, dec!(62500));
    assert_eq!(calculation.monthly_net, dec!(59483));
}

#[test]
fn validation_reports_drift_when_a_loaded_value_is_edited() {
    let records = TemplateLoader::parse(TEMPLATES_CSV.as_bytes()).expect("Failed to parse CSV");
    let templates = TemplateLoader::build(&records).expect("Failed to build templates");

    let ctc = dec!(750000);
    let components = templates[0].apply_to(&standard_components());
    let mut balanced = auto_balance_components(ctc, &components);

    // The user bumps the basic percentage after balancing.
    let basic = balanced.iter().position(|c| c.name == "Basic Salary").unwrap();
    balanced[basic].value = dec!(50);

    let report = validate_structure(ctc, &balanced);

    assert!(!report.valid);
    // Basic grows by 75000 and HRA by 37500 on top of the balanced gross.
    assert_eq!(
        report.errors(),
        vec!["Salary components (₹8,62,500) don't match CTC (₹7,50,000)"]
    );
}

#[test]
fn balanced_components_fit_into_an_employee_structure() {
    let records = TemplateLoader::parse(TEMPLATES_CSV.as_bytes()).expect("Failed to parse CSV");
    let templates = TemplateLoader::build(&records).expect("Failed to build templates");

    let ctc = dec!(1200000);
    let principal = &templates[1];
    let balanced = auto_balance_components(ctc, &principal.apply_to(&standard_components()));
    let now = Utc::now();

    let structure = EmployeeSalaryStructure {
        employee_id: "emp-104".to_string(),
        designation_id: "principal-consultant".to_string(),
        ctc,
        components: balanced,
        effective_from: now,
        created_at: now,
        updated_at: now,
    };

    // The structure's own component list is exactly what the engine
    // consumes.
    let report = validate_structure(structure.ctc, &structure.components);
    assert!(report.valid, "{:?}", report.errors());
    assert_eq!(
        calculate_salary(structure.ctc, &structure.components).gross_salary,
        dec!(1200000)
    );
}

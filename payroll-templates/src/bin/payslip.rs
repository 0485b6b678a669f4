use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use payroll_core::calculations::common::format_inr;
use payroll_core::{auto_balance_components, calculate_salary, validate_structure};
use payroll_templates::{TemplateLoader, standard_components, template_for};
use rust_decimal::Decimal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Build and print a balanced salary structure for a designation and CTC.
///
/// The component values are seeded from the designation's template
/// (built-in, or from a CSV file with columns designation, ctc_min,
/// ctc_max, component, value), the Special Allowance is auto-balanced so
/// the gross meets the CTC, and the structure is validated before the
/// breakdown is printed.
#[derive(Parser, Debug)]
#[command(name = "payslip")]
#[command(version, about, long_about = None)]
struct Args {
    /// Designation whose template seeds the component values
    #[arg(short, long)]
    designation: String,

    /// Annual cost-to-company the structure must sum to
    #[arg(short, long)]
    ctc: Decimal,

    /// CSV file of designation templates used instead of the built-ins
    #[arg(short, long)]
    templates: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let template = match &args.templates {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            let records = TemplateLoader::parse(file)
                .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
            TemplateLoader::build(&records)
                .context("Failed to build templates from CSV records")?
                .into_iter()
                .find(|t| t.designation_name == args.designation)
        }
        None => template_for(&args.designation),
    }
    .with_context(|| format!("No template for designation '{}'", args.designation))?;

    if !template.covers_ctc(args.ctc) {
        warn!(
            designation = %template.designation_name,
            ctc = %args.ctc,
            ctc_min = %template.ctc_min,
            ctc_max = %template.ctc_max,
            "CTC is outside the designation's band"
        );
    }

    let components = template.apply_to(&standard_components());
    let balanced = auto_balance_components(args.ctc, &components);

    let report = validate_structure(args.ctc, &balanced);
    for warning in &report.warnings {
        warn!("{warning}");
    }
    if !report.valid {
        for error in report.errors() {
            eprintln!("error: {error}");
        }
        bail!("salary structure for '{}' is invalid", args.designation);
    }

    let calculation = calculate_salary(args.ctc, &balanced);

    println!(
        "Salary structure: {} at CTC ₹{}",
        template.designation_name,
        format_inr(&calculation.ctc)
    );
    println!();
    println!("Earnings");
    for component in &calculation.earnings {
        println!(
            "  {:<32} ₹{:>12}",
            component.name,
            format_inr(&component.value)
        );
    }
    println!("Deductions");
    for component in &calculation.deductions {
        println!(
            "  {:<32} ₹{:>12}",
            component.name,
            format_inr(&component.value)
        );
    }
    println!();
    println!(
        "  {:<32} ₹{:>12}",
        "Gross salary",
        format_inr(&calculation.gross_salary)
    );
    println!(
        "  {:<32} ₹{:>12}",
        "Total deductions",
        format_inr(&calculation.total_deductions)
    );
    println!(
        "  {:<32} ₹{:>12}",
        "Net salary",
        format_inr(&calculation.net_salary)
    );
    println!(
        "  {:<32} ₹{:>12}",
        "Monthly gross",
        format_inr(&calculation.monthly_gross)
    );
    println!(
        "  {:<32} ₹{:>12}",
        "Monthly net",
        format_inr(&calculation.monthly_net)
    );

    Ok(())
}

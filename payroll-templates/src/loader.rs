use std::io::Read;

use payroll_core::models::{ComponentOverride, DesignationTemplate};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::standard_components;

/// Errors that can occur when loading designation template data.
#[derive(Debug, Error)]
pub enum TemplateLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown component '{0}' (not in the standard catalog)")]
    UnknownComponent(String),

    #[error("Designation '{0}' has an empty CTC band ({1} > {2})")]
    InvalidCtcBand(String, Decimal, Decimal),
}

impl From<csv::Error> for TemplateLoaderError {
    fn from(err: csv::Error) -> Self {
        TemplateLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a designation templates CSV file.
///
/// One row per component override:
/// - `designation`: the designation the override belongs to
/// - `ctc_min` / `ctc_max`: the designation's CTC band (repeated per row)
/// - `component`: a component name from the standard catalog
/// - `value`: percentage points or absolute amount, per the component's
///   calculation type
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TemplateRecord {
    pub designation: String,
    pub ctc_min: Decimal,
    pub ctc_max: Decimal,
    pub component: String,
    pub value: Decimal,
}

/// Loader for designation template data from CSV files.
///
/// Externally supplied templates replace the built-ins for the
/// designations they name; the catalog structure itself is not
/// configurable, so records naming unknown components are rejected.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Parse template records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TemplateRecord>, TemplateLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TemplateRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group parsed records into designation templates.
    ///
    /// Designations keep their first-seen order, and overrides within a
    /// designation keep record order. The CTC band is taken from the
    /// designation's first record.
    pub fn build(
        records: &[TemplateRecord],
    ) -> Result<Vec<DesignationTemplate>, TemplateLoaderError> {
        let catalog = standard_components();
        let mut templates: Vec<DesignationTemplate> = Vec::new();

        for record in records {
            if !catalog.iter().any(|c| c.name == record.component) {
                return Err(TemplateLoaderError::UnknownComponent(
                    record.component.clone(),
                ));
            }
            if record.ctc_min > record.ctc_max {
                return Err(TemplateLoaderError::InvalidCtcBand(
                    record.designation.clone(),
                    record.ctc_min,
                    record.ctc_max,
                ));
            }

            let position = match templates
                .iter()
                .position(|t| t.designation_name == record.designation)
            {
                Some(position) => position,
                None => {
                    templates.push(DesignationTemplate {
                        designation_name: record.designation.clone(),
                        ctc_min: record.ctc_min,
                        ctc_max: record.ctc_max,
                        overrides: Vec::new(),
                    });
                    templates.len() - 1
                }
            };

            templates[position].overrides.push(ComponentOverride {
                name: record.component.clone(),
                value: record.value,
            });
        }

        Ok(templates)
    }
}

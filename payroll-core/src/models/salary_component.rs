use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a component adds to gross salary or subtracts from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Earning,
    Deduction,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earning => "earning",
            Self::Deduction => "deduction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "earning" => Some(Self::Earning),
            "deduction" => Some(Self::Deduction),
            _ => None,
        }
    }
}

/// How a component's absolute amount is derived from its configured value.
///
/// `Formula` is accepted in the data model but no formula language is
/// evaluated yet; such components resolve to their literal configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationType {
    Fixed,
    Percentage,
    Formula,
}

impl CalculationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percentage => "percentage",
            Self::Formula => "formula",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fixed" => Some(Self::Fixed),
            "percentage" => Some(Self::Percentage),
            "formula" => Some(Self::Formula),
            _ => None,
        }
    }
}

/// Structural significance of a component within a salary structure.
///
/// The calculation engine dispatches on this role, never on the display
/// name, so renaming "Basic Salary" to "Base Pay" in the UI cannot
/// silently change computed results. [`ComponentRole::infer`] supplies the
/// default mapping from the conventional display names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentRole {
    /// No structural significance.
    #[default]
    None,
    /// Publishes the `basic` aggregate consumed by later percentage bases.
    Basic,
    /// The designated earning that absorbs the residual so gross equals CTC.
    FlexibleBalancer,
    /// The statutory deduction the validator requires to be present.
    ProvidentFund,
}

impl ComponentRole {
    /// Default role for a conventional display name.
    ///
    /// ```
    /// use payroll_core::ComponentRole;
    ///
    /// assert_eq!(ComponentRole::infer("Basic Salary"), ComponentRole::Basic);
    /// assert_eq!(
    ///     ComponentRole::infer("Special Allowance"),
    ///     ComponentRole::FlexibleBalancer
    /// );
    /// assert_eq!(
    ///     ComponentRole::infer("Provident Fund (PF)"),
    ///     ComponentRole::ProvidentFund
    /// );
    /// assert_eq!(ComponentRole::infer("Medical Allowance"), ComponentRole::None);
    /// ```
    pub fn infer(name: &str) -> Self {
        match name {
            "Basic Salary" => Self::Basic,
            "Special Allowance" => Self::FlexibleBalancer,
            "Provident Fund (PF)" => Self::ProvidentFund,
            _ => Self::None,
        }
    }
}

/// The aggregate a percentage component is computed against.
///
/// The reserved keys `ctc`, `basic`, `gross`, and `taxable` refer to the
/// scalar aggregates maintained during a calculation pass; any other key
/// refers to an already-resolved earning by its lowercase display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BaseReference {
    Ctc,
    Basic,
    Gross,
    Taxable,
    Component(String),
}

impl BaseReference {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ctc" => Self::Ctc,
            "basic" => Self::Basic,
            "gross" => Self::Gross,
            "taxable" => Self::Taxable,
            other => Self::Component(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Ctc => "ctc",
            Self::Basic => "basic",
            Self::Gross => "gross",
            Self::Taxable => "taxable",
            Self::Component(name) => name,
        }
    }
}

impl From<String> for BaseReference {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<BaseReference> for String {
    fn from(base: BaseReference) -> Self {
        base.key().to_string()
    }
}

/// A named line item of a salary structure.
///
/// `value` holds the configured amount (absolute for `Fixed`, percentage
/// points for `Percentage`); after resolution the engine returns copies
/// with `value` overwritten by the resolved absolute amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    pub calculation_type: CalculationType,
    pub value: Decimal,
    pub base: Option<BaseReference>,
    #[serde(default)]
    pub role: ComponentRole,
    pub is_mandatory: bool,
    pub is_taxable: bool,
    pub is_statutory: bool,
    pub display_order: i32,
}

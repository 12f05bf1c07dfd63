//! Transaction model
//!
//! A transaction is one income or expense record. Callers describe it with a
//! loosely typed `TransactionInput`; the ledger turns that into a
//! `Transaction` by assigning an id, coercing the amount and defaulting the
//! month.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::amount::Amount;
use super::ids::TransactionId;
use super::month::Month;

/// Kind of a transaction
///
/// Anything other than `income` or `expense` is kept verbatim and never shows
/// up in kind-filtered views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Income,
    Expense,
    Other(String),
}

impl TransactionKind {
    /// Parse a kind label; unknown labels are preserved
    pub fn parse(label: &str) -> Self {
        match label {
            "income" => Self::Income,
            "expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }

    /// The label as stored on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other(label) => label,
        }
    }

    /// The kind of an entry that named none
    pub fn undefined() -> Self {
        Self::Other("undefined".to_string())
    }

    /// Check if this is one of the two recognized kinds
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TransactionKind {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for TransactionKind {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Caller-supplied description of a new transaction
///
/// Field names follow the presentation layer's camelCase form
/// (`selectedCategory`, `selectedCategories`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Raw amount; `None` means the field was absent (coerces to NaN)
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Single-category form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,

    /// Multi-category form
    #[serde(
        default,
        deserialize_with = "deserialize_null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub selected_categories: Vec<String>,

    /// Explicit month; wins over `date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<Month>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Keep an explicit `null` distinct from an absent field
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Treat an explicit `null` category list like an absent one
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TransactionInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw amount
    pub fn amount(mut self, amount: impl Into<Value>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the single category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = Some(category.into());
        self
    }

    /// Set the category list
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the month
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Set the date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Category labels in first-seen order, without blanks or duplicates
    pub fn normalized_categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        let candidates = self
            .selected_category
            .iter()
            .chain(self.selected_categories.iter());
        for label in candidates {
            if !label.is_empty() && !labels.iter().any(|l| l == label) {
                labels.push(label.clone());
            }
        }
        labels
    }

    /// The raw amount rendered for diagnostics
    pub fn raw_amount(&self) -> String {
        match &self.amount {
            Some(value) => value.to_string(),
            None => "undefined".to_string(),
        }
    }
}

/// One entry of a transaction batch: the kind plus the input fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Missing or non-string labels are kept as an unknown kind
    #[serde(
        rename = "type",
        default = "TransactionKind::undefined",
        deserialize_with = "deserialize_kind_label"
    )]
    pub kind: TransactionKind,

    #[serde(flatten)]
    pub data: TransactionInput,
}

fn deserialize_kind_label<'de, D>(deserializer: D) -> Result<TransactionKind, D::Error>
where
    D: Deserializer<'de>,
{
    let label = match Value::deserialize(deserializer)? {
        Value::String(label) => label,
        other => other.to_string(),
    };
    Ok(TransactionKind::parse(&label))
}

impl LedgerEntry {
    /// Create a new entry
    pub fn new(data: TransactionInput, kind: impl Into<TransactionKind>) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }
}

/// A recorded income or expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// 1-based position in the ledger
    pub sequence: u64,

    /// Unique identifier
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub amount: Amount,

    #[serde(default)]
    pub description: String,

    pub month: Month,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Category labels (empty means uncategorized)
    #[serde(default)]
    pub categories: Vec<String>,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction from caller input
    ///
    /// The month comes from `input.month`, then `input.date`, then
    /// `default_month`.
    pub fn from_input(
        sequence: u64,
        id: TransactionId,
        kind: TransactionKind,
        input: &TransactionInput,
        default_month: Month,
    ) -> Self {
        let month = input
            .month
            .or_else(|| input.date.as_ref().map(Month::of))
            .unwrap_or(default_month);

        Self {
            sequence,
            id,
            kind,
            amount: Amount::coerce(input.amount.as_ref()),
            description: input.description.clone().unwrap_or_default(),
            month,
            date: input.date,
            categories: input.normalized_categories(),
            created_at: Utc::now(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if the transaction carries a category label
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Check if the transaction has no category
    pub fn is_uncategorized(&self) -> bool {
        self.categories.is_empty()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.sequence,
            self.month.short_name(),
            self.kind,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}

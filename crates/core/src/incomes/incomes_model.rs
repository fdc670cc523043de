//! Income ledger models.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, ValidationError};
use crate::transactions::normalize_code;
use crate::utils::titleize;

/// Kind of distribution received.
///
/// Unknown stored codes are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncomeKind {
    Dividend,
    /// Juros sobre capital proprio.
    InterestOnEquity,
    Bonus,
    SubscriptionRights,
    Other(String),
}

impl IncomeKind {
    pub const KNOWN_CODES: [&'static str; 4] = ["dividend", "jcp", "bonus", "subscription_rights"];

    pub fn code(&self) -> &str {
        match self {
            IncomeKind::Dividend => "dividend",
            IncomeKind::InterestOnEquity => "jcp",
            IncomeKind::Bonus => "bonus",
            IncomeKind::SubscriptionRights => "subscription_rights",
            IncomeKind::Other(code) => code,
        }
    }

    /// Report label.
    pub fn label(&self) -> String {
        match self {
            IncomeKind::Dividend => "Dividends".to_string(),
            IncomeKind::InterestOnEquity => "JCP".to_string(),
            IncomeKind::Bonus => "Bonuses".to_string(),
            IncomeKind::SubscriptionRights => "Subscription Rights".to_string(),
            IncomeKind::Other(code) => titleize(code),
        }
    }

    /// Parses one of the four known codes.
    pub fn parse_known(code: &str) -> Option<IncomeKind> {
        match IncomeKind::from(code.trim().to_lowercase()) {
            IncomeKind::Other(_) => None,
            kind => Some(kind),
        }
    }
}

impl From<String> for IncomeKind {
    fn from(code: String) -> Self {
        match code.as_str() {
            "dividend" => IncomeKind::Dividend,
            "jcp" => IncomeKind::InterestOnEquity,
            "bonus" => IncomeKind::Bonus,
            "subscription_rights" => IncomeKind::SubscriptionRights,
            _ => IncomeKind::Other(code),
        }
    }
}

impl From<IncomeKind> for String {
    fn from(kind: IncomeKind) -> Self {
        kind.code().to_string()
    }
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A dividend-style payment received for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub symbol: String,
    pub income_type: IncomeKind,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub quantity: Option<i64>,
    pub tax_withheld: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for recording an income payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub symbol: String,
    pub income_type: String,
    pub amount: Option<Decimal>,
    /// `YYYY-MM-DD`
    pub payment_date: String,
    pub quantity: Option<i64>,
    pub tax_withheld: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidIncome {
    pub symbol: String,
    pub income_type: IncomeKind,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub quantity: Option<i64>,
    pub tax_withheld: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewIncome {
    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<ValidIncome, ValidationError> {
        let mut errors = Vec::new();

        let symbol = normalize_code(&self.symbol);
        if symbol.is_empty() {
            errors.push(FieldError::new("symbol", "can't be blank"));
        }

        let income_type = IncomeKind::parse_known(&self.income_type);
        if income_type.is_none() {
            errors.push(FieldError::new(
                "incomeType",
                &format!("must be one of {}", IncomeKind::KNOWN_CODES.join(", ")),
            ));
        }

        match self.amount {
            None => errors.push(FieldError::new("amount", "can't be blank")),
            Some(a) if a <= Decimal::ZERO => {
                errors.push(FieldError::new("amount", "must be greater than 0"))
            }
            Some(_) => {}
        }

        let payment_date = if self.payment_date.trim().is_empty() {
            errors.push(FieldError::new("paymentDate", "can't be blank"));
            None
        } else {
            match NaiveDate::parse_from_str(self.payment_date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::new("paymentDate", "must be a date (YYYY-MM-DD)"));
                    None
                }
            }
        };

        if matches!(self.quantity, Some(q) if q <= 0) {
            errors.push(FieldError::new("quantity", "must be greater than 0"));
        }

        if matches!(self.tax_withheld, Some(t) if t < Decimal::ZERO) {
            errors.push(FieldError::new(
                "taxWithheld",
                "must be greater than or equal to 0",
            ));
        }

        ValidationError::check(errors)?;

        match (income_type, self.amount, payment_date) {
            (Some(income_type), Some(amount), Some(payment_date)) => Ok(ValidIncome {
                symbol,
                income_type,
                amount,
                payment_date,
                quantity: self.quantity,
                tax_withheld: self.tax_withheld,
                notes: self
                    .notes
                    .as_ref()
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty()),
            }),
            _ => Err(ValidationError::single("income", "is incomplete")),
        }
    }
}

/// Partial edit of an income record; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub id: String,
    pub symbol: Option<String>,
    pub income_type: Option<String>,
    pub amount: Option<Decimal>,
    pub payment_date: Option<String>,
    pub quantity: Option<i64>,
    pub tax_withheld: Option<Decimal>,
    pub notes: Option<String>,
}

impl IncomeUpdate {
    pub fn merge_into(&self, existing: &Income) -> NewIncome {
        NewIncome {
            symbol: self
                .symbol
                .clone()
                .unwrap_or_else(|| existing.symbol.clone()),
            income_type: self
                .income_type
                .clone()
                .unwrap_or_else(|| existing.income_type.code().to_string()),
            amount: Some(self.amount.unwrap_or(existing.amount)),
            payment_date: self
                .payment_date
                .clone()
                .unwrap_or_else(|| existing.payment_date.format("%Y-%m-%d").to_string()),
            quantity: self.quantity.or(existing.quantity),
            tax_withheld: self.tax_withheld.or(existing.tax_withheld),
            notes: self.notes.clone().or_else(|| existing.notes.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_income_kind_codes_and_labels() {
        assert_eq!(IncomeKind::from("jcp".to_string()), IncomeKind::InterestOnEquity);
        assert_eq!(IncomeKind::InterestOnEquity.label(), "JCP");
        assert_eq!(IncomeKind::SubscriptionRights.code(), "subscription_rights");
        assert_eq!(
            IncomeKind::from("return_of_capital".to_string()).label(),
            "Return Of Capital"
        );
        assert_eq!(IncomeKind::parse_known("Dividend"), Some(IncomeKind::Dividend));
        assert_eq!(IncomeKind::parse_known("rent"), None);
    }

    #[test]
    fn test_income_kind_serializes_as_code() {
        let json = serde_json::to_string(&IncomeKind::Bonus).unwrap();
        assert_eq!(json, "\"bonus\"");
        let kind: IncomeKind = serde_json::from_str("\"amortization\"").unwrap();
        assert_eq!(kind, IncomeKind::Other("amortization".to_string()));
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        let input = NewIncome {
            symbol: "itsa4".to_string(),
            income_type: "dividend".to_string(),
            amount: Some(dec!(12.5)),
            payment_date: "2025-03-14".to_string(),
            quantity: Some(100),
            tax_withheld: None,
            notes: Some("  ".to_string()),
        };
        let valid = input.validate().unwrap();
        assert_eq!(valid.symbol, "ITSA4");
        assert_eq!(valid.payment_date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(valid.notes, None);
    }

    #[test]
    fn test_validate_reports_every_failing_field() {
        let input = NewIncome {
            symbol: String::new(),
            income_type: "rent".to_string(),
            amount: Some(dec!(0)),
            payment_date: "14/03/2025".to_string(),
            quantity: Some(-1),
            tax_withheld: Some(dec!(-0.01)),
            notes: None,
        };
        let err = input.validate().unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "symbol",
                "incomeType",
                "amount",
                "paymentDate",
                "quantity",
                "taxWithheld"
            ]
        );
    }
}

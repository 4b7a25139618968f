//! Transaction models and input validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Categories accepted for a transaction
pub const ALLOWED_CATEGORIES: [&str; 5] = ["Food", "Travel", "Medical", "Utilities", "Others"];

/// Transaction row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: f64,
    pub transaction_date: NaiveDate,
}

/// Incoming transaction body. All fields optional so validation can answer
/// with the API's own messages instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub title: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "transactionDate")]
    pub transaction_date: Option<String>,
}

/// A fully validated transaction payload
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    pub tx_type: String,
    pub category: String,
    pub transaction_date: NaiveDate,
}

impl TransactionRequest {
    /// Validate the request into a [`NewTransaction`], or produce the
    /// client-facing error message.
    pub fn validate(self) -> Result<NewTransaction, String> {
        let title = self.title.unwrap_or_default();
        let tx_type = self.tx_type.unwrap_or_default();
        let category = self.category.unwrap_or_default();
        let date = self.transaction_date.unwrap_or_default();

        if title.trim().is_empty()
            || self.amount.is_none()
            || tx_type.trim().is_empty()
            || category.trim().is_empty()
            || date.trim().is_empty()
        {
            return Err("All fields are required".to_string());
        }

        if tx_type != "Income" && tx_type != "Expense" {
            return Err("Invalid transaction type".to_string());
        }

        if !ALLOWED_CATEGORIES.contains(&category.as_str()) {
            return Err(format!(
                "Invalid category. Allowed: {}",
                ALLOWED_CATEGORIES.join(", ")
            ));
        }

        let transaction_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| "Invalid transactionDate format".to_string())?;

        Ok(NewTransaction {
            title,
            amount: self.amount.unwrap_or_default(),
            tx_type,
            category,
            transaction_date,
        })
    }
}

/// Income/expense totals for the caller
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
}

/// Category totals for the dashboard. Every key is always present,
/// defaulting to 0; expense rows land in their category, income rows in
/// `Income`.
#[derive(Debug, Serialize, Default)]
pub struct DashboardResponse {
    #[serde(rename = "Food")]
    pub food: f64,
    #[serde(rename = "Medical")]
    pub medical: f64,
    #[serde(rename = "Utilities")]
    pub utilities: f64,
    #[serde(rename = "Others")]
    pub others: f64,
    #[serde(rename = "Travel")]
    pub travel: f64,
    #[serde(rename = "Income")]
    pub income: f64,
}

/// Dashboard aggregation window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl DashboardPeriod {
    /// Parse the `period` query parameter; anything unrecognized falls back
    /// to monthly.
    pub fn from_param(param: &str) -> Self {
        match param {
            "daily" => DashboardPeriod::Daily,
            "weekly" => DashboardPeriod::Weekly,
            _ => DashboardPeriod::Monthly,
        }
    }

    /// SQL predicate restricting `transaction_date` to this window.
    pub fn date_filter(&self) -> &'static str {
        match self {
            DashboardPeriod::Daily => "transaction_date = CURRENT_DATE",
            DashboardPeriod::Weekly => "transaction_date >= CURRENT_DATE - INTERVAL '7 days'",
            DashboardPeriod::Monthly => "transaction_date >= CURRENT_DATE - INTERVAL '1 month'",
        }
    }
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Dashboard query parameters
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub period: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TransactionRequest {
        TransactionRequest {
            title: Some("Groceries".to_string()),
            amount: Some(42.5),
            tx_type: Some("Expense".to_string()),
            category: Some("Food".to_string()),
            transaction_date: Some("2025-03-14".to_string()),
        }
    }

    #[test]
    fn test_valid_request() {
        let tx = request().validate().unwrap();
        assert_eq!(tx.title, "Groceries");
        assert_eq!(tx.amount, 42.5);
        assert_eq!(
            tx.transaction_date,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request();
        req.title = None;
        assert_eq!(req.validate().unwrap_err(), "All fields are required");

        let mut req = request();
        req.amount = None;
        assert_eq!(req.validate().unwrap_err(), "All fields are required");

        let mut req = request();
        req.category = Some("   ".to_string());
        assert_eq!(req.validate().unwrap_err(), "All fields are required");
    }

    #[test]
    fn test_invalid_type() {
        let mut req = request();
        req.tx_type = Some("Transfer".to_string());
        assert_eq!(req.validate().unwrap_err(), "Invalid transaction type");
    }

    #[test]
    fn test_invalid_category_lists_allowed() {
        let mut req = request();
        req.category = Some("Gambling".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            "Invalid category. Allowed: Food, Travel, Medical, Utilities, Others"
        );
    }

    #[test]
    fn test_invalid_date() {
        let mut req = request();
        req.transaction_date = Some("14/03/2025".to_string());
        assert_eq!(req.validate().unwrap_err(), "Invalid transactionDate format");
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(DashboardPeriod::from_param("daily"), DashboardPeriod::Daily);
        assert_eq!(
            DashboardPeriod::from_param("weekly"),
            DashboardPeriod::Weekly
        );
        assert_eq!(
            DashboardPeriod::from_param("monthly"),
            DashboardPeriod::Monthly
        );
        assert_eq!(
            DashboardPeriod::from_param("anything"),
            DashboardPeriod::Monthly
        );
    }
}

//! Transaction service
//!
//! Queries and aggregations over the caller's transaction rows. Every query
//! is scoped by the authenticated user id; ownership is enforced in SQL.

use sqlx::PgPool;

use crate::models::{
    DashboardPeriod, DashboardResponse, NewTransaction, SummaryResponse, Transaction,
};

/// Transaction service
#[derive(Clone)]
pub struct TransactionService {
    pool: PgPool,
}

impl TransactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every transaction of the user, newest date first.
    pub async fn list_all(&self, user_id: i64) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, user_id, title, category, tx_type, amount, transaction_date
            FROM transactions
            WHERE user_id = $1
            ORDER BY transaction_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// A page of the user's transactions, newest date first.
    pub async fn list_page(
        &self,
        user_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = (page - 1) * limit;

        sqlx::query_as(
            r#"
            SELECT id, user_id, title, category, tx_type, amount, transaction_date
            FROM transactions
            WHERE user_id = $1
            ORDER BY transaction_date DESC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Income/expense totals and their difference.
    pub async fn summary(&self, user_id: i64) -> Result<SummaryResponse, sqlx::Error> {
        let (income, expense): (f64, f64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN tx_type = 'Income'  THEN amount END), 0),
                COALESCE(SUM(CASE WHEN tx_type = 'Expense' THEN amount END), 0)
            FROM transactions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(SummaryResponse {
            income,
            expense,
            savings: income - expense,
        })
    }

    /// Category totals within the period's date window.
    pub async fn dashboard(
        &self,
        user_id: i64,
        period: DashboardPeriod,
    ) -> Result<DashboardResponse, sqlx::Error> {
        // The filter is a fixed string chosen from DashboardPeriod, never
        // client input.
        let query = format!(
            r#"
            SELECT category, tx_type, SUM(amount)
            FROM transactions
            WHERE user_id = $1
            AND {}
            GROUP BY category, tx_type
            "#,
            period.date_filter()
        );

        let rows: Vec<(String, String, f64)> = sqlx::query_as(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let mut response = DashboardResponse::default();
        for (category, tx_type, total) in rows {
            if tx_type == "Income" {
                response.income += total;
                continue;
            }
            match category.as_str() {
                "Food" => response.food += total,
                "Medical" => response.medical += total,
                "Utilities" => response.utilities += total,
                "Others" => response.others += total,
                "Travel" => response.travel += total,
                _ => {}
            }
        }

        Ok(response)
    }

    /// Insert a validated transaction for the user.
    pub async fn create(&self, user_id: i64, tx: NewTransaction) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO transactions (user_id, title, amount, tx_type, category, transaction_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(&tx.title)
        .bind(tx.amount)
        .bind(&tx.tx_type)
        .bind(&tx.category)
        .bind(tx.transaction_date)
        .execute(&self.pool)
        .await?;

        tracing::info!(user_id, "transaction added");
        Ok(())
    }

    /// Update a transaction owned by the user. Returns false when no owned
    /// row matched.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        tx: NewTransaction,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE transactions
            SET title            = $1,
                amount           = $2,
                tx_type          = $3,
                category         = $4,
                transaction_date = $5
            WHERE id = $6 AND user_id = $7
            "#,
        )
        .bind(&tx.title)
        .bind(tx.amount)
        .bind(&tx.tx_type)
        .bind(&tx.category)
        .bind(tx.transaction_date)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }
}

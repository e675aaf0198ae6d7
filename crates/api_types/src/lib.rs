use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminator of an entry: money coming in or going out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RegisterUser {
        pub username: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoginUser {
        pub username: String,
        pub password: String,
    }

    /// Response body for a successful login.
    ///
    /// The token is an opaque bearer credential; send it back as
    /// `Authorization: Bearer <token>`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Session {
        pub token: String,
    }
}

pub mod entry {
    use super::*;

    /// Request body for creating or replacing an entry.
    ///
    /// `amount` is a decimal string (`"4.50"`, max two decimals,
    /// non-negative) and `date` a `YYYY-MM-DD` calendar day; both are
    /// validated server-side.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub title: String,
        pub amount: String,
        pub category: String,
        pub kind: EntryKind,
        pub date: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: Uuid,
        pub title: String,
        pub amount_cents: i64,
        pub category: String,
        pub kind: EntryKind,
        pub date: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryListResponse {
        pub entries: Vec<EntryView>,
    }
}

pub mod dashboard {
    use super::*;

    /// Aggregate view over all of a user's entries.
    ///
    /// `category_labels` and `category_values` are parallel sequences (same
    /// length, same order) covering expense entries only, ready for
    /// charting.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardResponse {
        pub entries: Vec<entry::EntryView>,
        pub total_income_cents: i64,
        pub total_expense_cents: i64,
        pub net_balance_cents: i64,
        pub category_labels: Vec<String>,
        pub category_values: Vec<i64>,
    }
}

/// Flash-style notice returned by mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

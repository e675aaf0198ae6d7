//! Dashboard aggregation.
//!
//! Pure functions over a slice of entries; no I/O. The database rows are the
//! source of truth, totals are recomputed on every read.

use crate::{Entry, EntryKind, MoneyCents};

/// Expense total for one category label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: MoneyCents,
}

/// Aggregate totals over a set of entries.
///
/// `net_balance` is signed and may go negative. The category breakdown covers
/// expense entries only, in first-occurrence order of each label; income
/// entries never contribute to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub net_balance: MoneyCents,
    pub categories: Vec<CategoryTotal>,
}

/// Compute totals and the per-category expense breakdown.
///
/// Zero entries yield zero totals and an empty breakdown.
pub fn summarize(entries: &[Entry]) -> Summary {
    let mut total_income = MoneyCents::ZERO;
    let mut total_expense = MoneyCents::ZERO;
    let mut categories: Vec<CategoryTotal> = Vec::new();

    for entry in entries {
        match entry.kind {
            EntryKind::Income => total_income += entry.amount,
            EntryKind::Expense => {
                total_expense += entry.amount;
                match categories.iter_mut().find(|c| c.label == entry.category) {
                    Some(slot) => slot.total += entry.amount,
                    None => categories.push(CategoryTotal {
                        label: entry.category.clone(),
                        total: entry.amount,
                    }),
                }
            }
        }
    }

    Summary {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
        categories,
    }
}

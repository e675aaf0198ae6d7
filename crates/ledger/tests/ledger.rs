use chrono::NaiveDate;
use sea_orm::Database;
use uuid::Uuid;

use ledger::{EntryDraft, EntryKind, Ledger, LedgerError, MoneyCents, parse_date, summarize};
use migration::MigratorTrait;

async fn ledger_with_db() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Ledger::builder().database(db).build()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(title: &str, amount: &str, category: &str, kind: EntryKind, day: NaiveDate) -> EntryDraft {
    EntryDraft {
        title: title.to_string(),
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        kind,
        date: day,
    }
}

#[tokio::test]
async fn register_then_authenticate() {
    let ledger = ledger_with_db().await;

    let user = ledger.register("alice", "correct horse").await.unwrap();
    assert_eq!(user.username, "alice");

    let user = ledger.authenticate("alice", "correct horse").await.unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn duplicate_username_is_rejected_and_account_unchanged() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "first password").await.unwrap();

    let err = ledger.register("alice", "other password").await.unwrap_err();
    assert_eq!(err, LedgerError::DuplicateUsername("alice".to_string()));

    // The original credentials still authenticate, the new ones never do.
    assert!(ledger.authenticate("alice", "first password").await.is_ok());
    assert_eq!(
        ledger
            .authenticate("alice", "other password")
            .await
            .unwrap_err(),
        LedgerError::InvalidCredentials
    );
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_alike() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    let wrong_password = ledger.authenticate("alice", "battery staple").await;
    let unknown_user = ledger.authenticate("nobody", "battery staple").await;

    assert_eq!(wrong_password.unwrap_err(), LedgerError::InvalidCredentials);
    assert_eq!(unknown_user.unwrap_err(), LedgerError::InvalidCredentials);
}

#[tokio::test]
async fn empty_register_fields_are_rejected() {
    let ledger = ledger_with_db().await;

    assert_eq!(
        ledger.register("", "secret").await.unwrap_err(),
        LedgerError::InvalidCredentials
    );
    assert_eq!(
        ledger.register("alice", "").await.unwrap_err(),
        LedgerError::InvalidCredentials
    );
}

#[tokio::test]
async fn dashboard_scenario_matches_totals() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    ledger
        .add_entry(
            "alice",
            draft(
                "Coffee",
                "4.50",
                "Food",
                EntryKind::Expense,
                date(2024, 1, 1),
            ),
        )
        .await
        .unwrap();
    ledger
        .add_entry(
            "alice",
            draft(
                "Salary",
                "2000",
                "Work",
                EntryKind::Income,
                date(2024, 1, 2),
            ),
        )
        .await
        .unwrap();

    let (entries, summary) = ledger.dashboard("alice").await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(summary.total_income.cents(), 200_000);
    assert_eq!(summary.total_expense.cents(), 450);
    assert_eq!(summary.net_balance.cents(), 199_550);
    assert_eq!(summary.categories.len(), 1);
    assert_eq!(summary.categories[0].label, "Food");
    assert_eq!(summary.categories[0].total.cents(), 450);
}

#[tokio::test]
async fn view_lists_entries_newest_date_first() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    for (title, day) in [
        ("Middle", date(2024, 2, 15)),
        ("Oldest", date(2024, 1, 1)),
        ("Newest", date(2024, 3, 31)),
    ] {
        ledger
            .add_entry(
                "alice",
                draft(title, "1.00", "Misc", EntryKind::Expense, day),
            )
            .await
            .unwrap();
    }

    let titles: Vec<_> = ledger
        .entries_by_date_desc("alice")
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn foreign_entries_are_unreachable() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();
    ledger.register("bob", "battery staple").await.unwrap();

    let entry = ledger
        .add_entry(
            "alice",
            draft(
                "Coffee",
                "4.50",
                "Food",
                EntryKind::Expense,
                date(2024, 1, 1),
            ),
        )
        .await
        .unwrap();

    let unauthorized = LedgerError::Unauthorized(entry.id.to_string());
    assert_eq!(
        ledger.entry(entry.id, "bob").await.unwrap_err(),
        unauthorized
    );
    assert_eq!(
        ledger
            .update_entry(
                entry.id,
                "bob",
                draft("Theft", "0.01", "Food", EntryKind::Expense, date(2024, 1, 1)),
            )
            .await
            .unwrap_err(),
        unauthorized
    );
    assert_eq!(
        ledger.delete_entry(entry.id, "bob").await.unwrap_err(),
        unauthorized
    );

    // Alice's entry survived all of it.
    let kept = ledger.entry(entry.id, "alice").await.unwrap();
    assert_eq!(kept.title, "Coffee");
    assert_eq!(kept.amount.cents(), 450);
}

#[tokio::test]
async fn unknown_ids_resolve_to_not_found() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    let ghost = Uuid::new_v4();
    let not_found = LedgerError::EntryNotFound(ghost.to_string());

    assert_eq!(ledger.entry(ghost, "alice").await.unwrap_err(), not_found);
    assert_eq!(
        ledger
            .update_entry(
                ghost,
                "alice",
                draft("Ghost", "1.00", "Misc", EntryKind::Expense, date(2024, 1, 1)),
            )
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(
        ledger.delete_entry(ghost, "alice").await.unwrap_err(),
        not_found
    );
}

#[tokio::test]
async fn update_replaces_fields_but_not_owner() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    let entry = ledger
        .add_entry(
            "alice",
            draft(
                "Coffee",
                "4.50",
                "Food",
                EntryKind::Expense,
                date(2024, 1, 1),
            ),
        )
        .await
        .unwrap();

    let updated = ledger
        .update_entry(
            entry.id,
            "alice",
            draft(
                "Refund: coffee",
                "4.50",
                "Food",
                EntryKind::Income,
                date(2024, 1, 3),
            ),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.user_id, "alice");
    assert_eq!(updated.kind, EntryKind::Income);
    assert_eq!(updated.date, date(2024, 1, 3));

    let reloaded = ledger.entry(entry.id, "alice").await.unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn delete_removes_the_entry() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    let entry = ledger
        .add_entry(
            "alice",
            draft(
                "Coffee",
                "4.50",
                "Food",
                EntryKind::Expense,
                date(2024, 1, 1),
            ),
        )
        .await
        .unwrap();

    ledger.delete_entry(entry.id, "alice").await.unwrap();
    assert_eq!(
        ledger.entry(entry.id, "alice").await.unwrap_err(),
        LedgerError::EntryNotFound(entry.id.to_string())
    );
    assert!(ledger.entries("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_amount_is_rejected() {
    let ledger = ledger_with_db().await;
    ledger.register("alice", "correct horse").await.unwrap();

    let bad = EntryDraft {
        title: "Refund".to_string(),
        amount: MoneyCents::new(-450),
        category: "Food".to_string(),
        kind: EntryKind::Expense,
        date: date(2024, 1, 1),
    };
    assert!(matches!(
        ledger.add_entry("alice", bad).await.unwrap_err(),
        LedgerError::InvalidAmount(_)
    ));
}

#[test]
fn parse_date_accepts_calendar_days_only() {
    assert_eq!(parse_date("2024-01-02").unwrap(), date(2024, 1, 2));
    assert_eq!(parse_date(" 2024-01-02 ").unwrap(), date(2024, 1, 2));
    assert!(parse_date("01/02/2024").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn summary_is_pure_over_entry_slices() {
    // summarize is reachable without a database at all.
    assert_eq!(summarize(&[]).net_balance.cents(), 0);
}

use migration::{Migrator, MigratorTrait};
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "gruzzolo={level},server={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    let db = parse_database(settings.server.database.as_ref()).await?;
    let ledger = ledger::Ledger::builder().database(db).build();

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(ledger, listener).await?;

    Ok(())
}

async fn parse_database(
    config: Option<&settings::Database>,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    // `GRUZZOLO_DATABASE_URL` wins over the settings file; without either,
    // fall back to a local file-backed store.
    let url = match std::env::var("GRUZZOLO_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => match config {
            Some(Database::Memory) => String::from("sqlite::memory:"),
            Some(Database::Sqlite(path)) => format!("sqlite:{}?mode=rwc", path),
            None => String::from("sqlite:./gruzzolo.db?mode=rwc"),
        },
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

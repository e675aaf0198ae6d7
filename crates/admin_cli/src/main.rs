use std::{error::Error, io::Write};

use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use ledger::{Ledger, entry, users};
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};

#[derive(Parser, Debug)]
#[command(name = "gruzzolo_admin")]
#[command(about = "Admin utilities for Gruzzolo (bootstrap and remove accounts)")]
struct Cli {
    /// Database connection string (also read from `GRUZZOLO_DATABASE_URL`).
    #[arg(
        long,
        env = "GRUZZOLO_DATABASE_URL",
        default_value = "sqlite:./gruzzolo.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    User(User),
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Create an account out-of-band, prompting for the password.
    Create(UserCreateArgs),
    /// Remove an account and every entry it owns. Not exposed over HTTP.
    Delete(UserDeleteArgs),
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    username: String,
}

#[derive(Args, Debug)]
struct UserDeleteArgs {
    #[arg(long)]
    username: String,
    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn prompt_password(prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let _raw = RawModeGuard::enter()?;

    let mut out = std::io::stderr();
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt)
    )?;
    out.flush()?;

    let mut buf = String::new();
    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };

        match code {
            KeyCode::Enter => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                break;
            }
            KeyCode::Backspace => {
                if buf.pop().is_some() {
                    execute!(out, cursor::MoveLeft(1), Print(" "), cursor::MoveLeft(1))?;
                    out.flush()?;
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                return Err("interrupted".into());
            }
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                buf.push(ch);
                execute!(out, Print("*"))?;
                out.flush()?;
            }
            _ => {}
        }
    }

    Ok(buf)
}

fn prompt_password_twice() -> Result<String, Box<dyn Error + Send + Sync>> {
    let mut out = std::io::stderr();
    for _ in 0..3 {
        let p1 = prompt_password("Password: ")?;
        if p1.is_empty() {
            execute!(
                out,
                cursor::MoveToColumn(0),
                terminal::Clear(ClearType::CurrentLine),
                Print("Password must not be empty.\r\n")
            )?;
            continue;
        }

        let p2 = prompt_password("Confirm password: ")?;
        if p1 == p2 {
            return Ok(p1);
        }

        execute!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print("Passwords do not match. Try again.\r\n")
        )?;
    }

    Err("too many attempts".into())
}

fn confirm(question: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
    eprint!("{question} [y/N] ");
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;

    match cli.command {
        Command::User(User {
            command: UserCommand::Create(args),
        }) => {
            let password = prompt_password_twice()?;

            let ledger = Ledger::builder().database(db).build();
            match ledger.register(&args.username, &password).await {
                Ok(user) => println!("created user: {}", user.username),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Command::User(User {
            command: UserCommand::Delete(args),
        }) => {
            if users::Entity::find_by_id(args.username.clone())
                .one(&db)
                .await?
                .is_none()
            {
                eprintln!("user not found: {}", args.username);
                std::process::exit(1);
            }

            if !args.yes
                && !confirm(&format!(
                    "Delete user {} and all their entries?",
                    args.username
                ))?
            {
                eprintln!("aborted");
                std::process::exit(1);
            }

            // Entries first: they hold the foreign key on the user row.
            let removed = entry::Entity::delete_many()
                .filter(entry::Column::UserId.eq(args.username.clone()))
                .exec(&db)
                .await?;
            users::Entity::delete_by_id(args.username.clone())
                .exec(&db)
                .await?;

            println!(
                "deleted user: {} ({} entries removed)",
                args.username, removed.rows_affected
            );
        }
    }

    Ok(())
}

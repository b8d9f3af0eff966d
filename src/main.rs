use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use dealerdesk::cart::{category_set_id, InMemoryCatalog, FULL_SET_ID};
use dealerdesk::config::Config;
use dealerdesk::logging;
use dealerdesk::nav::NavKey;
use dealerdesk::persist::{DurableStorage, FileStorage, MemoryStorage};
use dealerdesk::routes::{Boundary, DeferredScreens, ScreenId};
use dealerdesk::session::Session;
use dealerdesk::ui::navigator::BackOutcome;

#[derive(Debug, Parser)]
#[command(name = "dealerdesk", about = "Dealer app navigation session")]
struct Args {
    /// Config file (default: <config_dir>/dealerdesk/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the state directory.
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Keep all state in memory for this run.
    #[arg(long)]
    ephemeral: bool,

    /// Log to stderr.
    #[arg(long, short)]
    verbose: bool,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Go(String),
    Back,
    Home,
    Where,
    Stack,
    Add { id: String, qty: i64 },
    Remove { id: String, qty: i64 },
    Toggle(String),
    Cart,
    Theme,
    Apps,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };
    let arg = words.next();
    let count = |raw: Option<&str>| -> Result<i64, String> {
        match raw {
            None => Ok(1),
            Some(n) => n
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("invalid quantity '{n}'")),
        }
    };
    let required = |what: &str| arg.map(str::to_string).ok_or(format!("{verb}: missing {what}"));

    match verb {
        "go" => Ok(Command::Go(required("key")?)),
        "back" => Ok(Command::Back),
        "home" => Ok(Command::Home),
        "where" => Ok(Command::Where),
        "stack" => Ok(Command::Stack),
        "add" => Ok(Command::Add {
            id: required("item id")?,
            qty: count(words.next())?,
        }),
        "remove" => Ok(Command::Remove {
            id: required("item id")?,
            qty: count(words.next())?,
        }),
        "toggle" => Ok(Command::Toggle(required("collection id")?)),
        "cart" => Ok(Command::Cart),
        "theme" => Ok(Command::Theme),
        "apps" => Ok(Command::Apps),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'")),
    }
}

/// Small built-in catalog so the cart has something to show.
fn demo_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_category("casegoods", "Casegoods")
        .with_category("seating", "Seating")
        .with_category("tables", "Tables")
        .with_product("1001", "Walnut Veneer Chip", "casegoods")
        .with_product("1002", "Maple Laminate Chip", "casegoods")
        .with_product("2001", "Mesh Back Swatch", "seating")
        .with_product("2002", "Vinyl Upholstery Swatch", "seating")
        .with_product("3001", "Quartz Edge Sample", "tables")
}

fn print_screen<M: Send + Sync + 'static>(session: &Session<M>) {
    let props = session.current();
    let loading = match session.boundary() {
        Some(Boundary::Placeholder) => " (loading...)",
        _ => "",
    };
    println!(
        "[{}] {} -> {} {:?}{}",
        props.direction.as_str(),
        props.key,
        props.screen.screen,
        props.screen.params,
        loading
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.verbose {
        logging::init_stderr_tracing();
    } else {
        logging::init_tracing();
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    let storage: Arc<dyn DurableStorage> = if args.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        let dir = args.storage_dir.clone().unwrap_or_else(|| config.storage_dir());
        let storage = match config.storage.quota_bytes {
            Some(quota) => FileStorage::new(dir).with_quota(quota),
            None => FileStorage::new(dir),
        };
        Arc::new(storage)
    };

    // All screens are bundled with the binary; "loading" one is immediate.
    let deferred = DeferredScreens::new(|id: ScreenId| async move { id.to_string() });
    let mut session = Session::from_config(&config, storage, deferred);
    let catalog = demo_catalog();

    println!(
        "dealerdesk: collections are '{}' and '{}'",
        FULL_SET_ID,
        category_set_id("<category>")
    );
    print_screen(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Go(raw) => match NavKey::parse(&raw) {
                Ok(key) => {
                    session.navigate(key);
                    if let Some(module) = session.load_current().await {
                        tracing::debug!(module = %module, "deferred screen ready");
                    }
                    print_screen(&session);
                }
                Err(e) => eprintln!("{e}"),
            },
            Command::Back => {
                if session.go_back(None) == BackOutcome::AtRoot {
                    println!("already home");
                }
                print_screen(&session);
            }
            Command::Home => {
                session.go_home();
                print_screen(&session);
            }
            Command::Where => print_screen(&session),
            Command::Stack => {
                let keys: Vec<String> = session
                    .navigator()
                    .history()
                    .entries()
                    .iter()
                    .map(NavKey::to_string)
                    .collect();
                println!("{}", keys.join(" > "));
            }
            Command::Add { id, qty } => session.adjust_cart(&id, qty),
            Command::Remove { id, qty } => session.adjust_cart(&id, -qty),
            Command::Toggle(id) => session.toggle_collection(&id),
            Command::Cart => {
                let items = session.line_items(&catalog);
                if items.is_empty() {
                    println!("cart is empty");
                }
                for item in items {
                    println!("{:>4} x {} ({})", item.quantity, item.name, item.id);
                }
            }
            Command::Theme => {
                let dark = session.toggle_theme();
                println!("theme: {}", if dark { "dark" } else { "light" });
            }
            Command::Apps => {
                for (slot, app) in session.home_apps().iter().enumerate() {
                    println!("{slot}: {app}");
                }
            }
            Command::Quit => break,
        }
    }

    Ok(())
}

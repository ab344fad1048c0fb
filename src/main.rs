use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use climenu::core::config::{self, ResolvedConfig};
use climenu::{Label, Menu, MenuOption, Table};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "climenu", about = "Terminal menu and table demo")]
struct Args {
    /// Display language ("en" or "fr")
    #[arg(short, long)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Interactive menu with a live clock header
    Menu,
    /// Print a sample table and exit
    Table,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to climenu.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("climenu.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.locale.as_deref());
    log::info!("climenu starting with locale {}", resolved.locale);

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&resolved)?,
        Command::Table => println!("{}", sample_table(&resolved)),
    }
    Ok(())
}

fn sample_table(config: &ResolvedConfig) -> Table {
    let mut table =
        Table::with_title("Crates").empty_message(config.strings.table_empty.clone());
    table
        .add_columns(["Name", "Version", "Downloads"])
        .append(["crossterm", "0.29.0", "81M"])
        .append(["log", "0.4", "400M"])
        .append_optional([Some("simplelog"), None, Some("18M")]);
    table
}

fn run_menu(config: &ResolvedConfig) -> Result<(), climenu::MenuError> {
    let visits = Rc::new(RefCell::new(0u32));
    let label_visits = visits.clone();
    let action_visits = visits.clone();

    let table = sample_table(config);
    let empty = Table::new().empty_message(config.strings.table_empty.clone());
    let wait = config.wait_for_user;

    let mut menu = Menu::new("climenu")
        .with_header(Label::dynamic(|| {
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
        }))
        .with_strings(config.strings.clone())
        .with_style(config.style.clone())
        .with_refresh(Duration::from_millis(500));

    menu.add_option(
        MenuOption::new(
            Label::dynamic(move || format!("Counter ({})", label_visits.borrow())),
            move || {
                *action_visits.borrow_mut() += 1;
                println!("Counter is now {}", action_visits.borrow());
            },
        )
        .wait_for_user(wait),
    )
    .add_option(MenuOption::new("Show table", move || println!("{table}")).wait_for_user(wait))
    .add_option(MenuOption::new("Show empty table", move || println!("{empty}")).wait_for_user(wait))
    .add_option_with("Instant action", || log::info!("Instant action selected"), false);

    menu.run()
}

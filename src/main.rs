use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_budget_command, handle_category_command, handle_config_command,
    handle_dashboard_command, handle_goal_command, handle_months_command,
    handle_transaction_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::{initialize_storage, needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track income, expenses, monthly budgets and savings goals",
    long_about = "fintrack records income and expense transactions, monthly \
                  per-category budgets and savings goals, and summarizes them \
                  in a monthly dashboard from the command line."
)]
struct Cli {
    /// Use in-memory sample data instead of the data directory
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default categories
    Init,

    /// Show current configuration and paths
    Config,

    /// List the months available for reports
    Months,

    /// Show the monthly dashboard
    Dashboard {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Savings goal management commands
    #[command(subcommand)]
    Goal(fintrack::cli::GoalCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Demo runs use seeded memory stores; otherwise the data directory is
/// opened, creating the default categories on first use
fn open_storage(
    demo: bool,
    paths: &FintrackPaths,
    settings: &Settings,
    today: NaiveDate,
) -> Result<Storage> {
    if demo {
        return Ok(Storage::demo(today, settings.simulated_latency()));
    }

    if needs_initialization(paths) {
        info!(path = %paths.base_dir().display(), "First run, creating default categories");
        initialize_storage(paths)?;
    }
    Ok(Storage::open(paths)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            if created {
                println!("Default categories have been created:");
                println!("  - Income: Salary, Freelance, Investments, Other Income");
                println!(
                    "  - Expense: Food, Housing, Transportation, Utilities, Healthcare, \
                     Entertainment, Shopping, Other Expense"
                );
            } else {
                println!("Existing data found; nothing was changed.");
            }
            println!();
            println!("Run 'fintrack category list' to see all categories.");
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings, cli.demo);
        }
        Some(Commands::Months) => {
            handle_months_command(&settings, today);
        }
        Some(Commands::Dashboard { month }) => {
            let storage = open_storage(cli.demo, &paths, &settings, today)?;
            handle_dashboard_command(&storage, &settings, today, month.as_deref())?;
        }
        Some(Commands::Transaction(cmd)) => {
            let storage = open_storage(cli.demo, &paths, &settings, today)?;
            handle_transaction_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let storage = open_storage(cli.demo, &paths, &settings, today)?;
            handle_budget_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            let storage = open_storage(cli.demo, &paths, &settings, today)?;
            handle_goal_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let storage = open_storage(cli.demo, &paths, &settings, today)?;
            handle_category_command(&storage, cmd)?;
        }
        None => {
            println!("fintrack - Personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack init' to set up a data directory.");
        }
    }

    Ok(())
}

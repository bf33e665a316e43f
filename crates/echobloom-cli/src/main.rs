use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use echobloom_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "echobloom", version, about = "Echobloom guided wellness activities")]
struct Cli {
    /// User id sent with saved sessions (overrides `user.id`)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Box breathing (4-4-4-4)
    Breathe(commands::breathe::BreatheArgs),
    /// 5-4-3-2-1 sensory grounding, one answer per line on stdin
    Ground,
    /// Guided journal, one answer per line on stdin
    Journal(commands::journal::JournalArgs),
    /// Three gratitudes and a proud moment, read from stdin
    Gratitude,
    /// List journal categories and their prompts
    Prompts {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("ECHOBLOOM_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(&config.log.level);
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

    let result = match cli.command {
        Commands::Breathe(args) => commands::breathe::run(args, &config, cli.user).await,
        Commands::Ground => commands::ground::run(&config, cli.user).await,
        Commands::Journal(args) => commands::journal::run(args, &config, cli.user).await,
        Commands::Gratitude => commands::gratitude::run(&config, cli.user).await,
        Commands::Prompts { json } => commands::prompts::run(json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "echobloom", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

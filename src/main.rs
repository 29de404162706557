use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotificity::{
    cli::{Console, StdinPrompter},
    config::{self, GatewayConfig},
    error,
    remote::GatewayInvoker,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Base URL of the gateway exposing the remote operations
    #[clap(long, global = true)]
    gateway_url: Option<String>,

    /// Without a subcommand the interactive main menu is started
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the monitored artists and exit
    List(ListOptions),

    /// Show the latest album and single of every monitored artist
    Latest,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Fetch a fresh snapshot from the backend
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let gateway = match GatewayConfig::resolve(cli.gateway_url.as_deref()) {
        Ok(gateway) => gateway,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };
    log::debug!("Using gateway {}", gateway.base_url);

    let invoker = match GatewayInvoker::new(gateway) {
        Ok(invoker) => invoker,
        Err(e) => error!("Cannot build HTTP client. Err: {}", e),
    };

    let mut console = Console::new(invoker, StdinPrompter::new());

    match cli.command {
        None => console.run_menu().await,
        Some(Command::List(opt)) => {
            if let Err(e) = console.list_artists(opt.refresh, false).await {
                log::debug!("List ended early: {}", e);
            }
        }
        Some(Command::Latest) => console.latest_releases().await,
        Some(Command::Completions(_)) => {}
    }
}

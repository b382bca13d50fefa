//! Top level command line arguments.
use std::path::PathBuf;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::{auth, config::Config, contacts, diagnostics, events, orders, queries, seatingplans};

#[derive(clap::Parser, Debug)]
#[command(name = "tm", version, about = "Command line client for the Ticketmatic API")]
pub struct Arguments {
    #[command(subcommand)]
    command: Commands,
    /// Use another configuration file than the default one.
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,
    /// Log every request that is sent to the API.
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Stores the API credentials for later use.
    Auth(auth::Params),
    /// Shows the server time, to check connectivity and clock drift.
    Time,
    /// Contacts.
    #[command(subcommand, alias = "c")]
    Contacts(contacts::Commands),
    /// Events.
    #[command(subcommand, alias = "e")]
    Events(events::Commands),
    /// Orders.
    #[command(subcommand, alias = "o")]
    Orders(orders::Commands),
    /// Runs a query on the public data model.
    #[clap(alias = "q")]
    Query(queries::query::Params),
    /// Streams all rows of a query as JSON lines.
    Export(queries::export::Params),
    /// Draws a zone of a seating plan as SVG.
    Svg(seatingplans::svg::Params),
}

impl Arguments {
    /// Sets up logging to stderr.
    ///
    /// `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_logging(&self) {
        let default = if self.verbose { "ticketmatic=debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub async fn exec(self) -> Result<()> {
        let cfg = Config::load(self.config.as_deref())?;
        match self.command {
            Commands::Auth(params) => auth::auth(params, cfg),
            Commands::Time => diagnostics::time(&cfg.client()?).await,
            Commands::Contacts(cmd) => cmd.exec(&cfg.client()?).await,
            Commands::Events(cmd) => cmd.exec(&cfg.client()?).await,
            Commands::Orders(cmd) => cmd.exec(&cfg.client()?).await,
            Commands::Query(params) => queries::query::query(params, &cfg.client()?).await,
            Commands::Export(params) => queries::export::export(params, &cfg.client()?).await,
            Commands::Svg(params) => seatingplans::svg::svg(params, &cfg.client()?).await,
        }
    }
}

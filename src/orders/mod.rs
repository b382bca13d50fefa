//! Order commands.
use color_eyre::Result;

use crate::api::rest::Client;

pub mod get;
pub mod logs;

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Shows an order with its tickets.
    #[clap(alias = "g")]
    Get(get::Params),
    /// Shows the history of an order.
    Logs(logs::Params),
}

impl Commands {
    pub async fn exec(self, client: &Client) -> Result<()> {
        match self {
            Commands::Get(params) => get::get(params, client).await,
            Commands::Logs(params) => logs::logs(params, client).await,
        }
    }
}

//! Contact commands.
use color_eyre::Result;

use crate::api::rest::Client;

pub mod get;
pub mod list;

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Lists contacts, optionally filtered by a search term.
    #[clap(alias = "l")]
    List(list::Params),
    /// Shows all details of a single contact.
    #[clap(alias = "g")]
    Get(get::Params),
}

impl Commands {
    pub async fn exec(self, client: &Client) -> Result<()> {
        match self {
            Commands::List(params) => list::list(params, client).await,
            Commands::Get(params) => get::get(params, client).await,
        }
    }
}

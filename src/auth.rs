//! Stores API credentials.
use color_eyre::Result;

use crate::config::Config;

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// Short code of the account.
    accountcode: String,
    /// Public part of the API key.
    accesskey: String,
    /// Private part of the API key.
    secretkey: String,
    /// Use another server than the default one.
    #[arg(long = "server")]
    server: Option<url::Url>,
}

pub fn auth(params: Params, mut cfg: Config) -> Result<()> {
    cfg.accountcode = Some(params.accountcode);
    cfg.accesskey = Some(params.accesskey);
    cfg.secretkey = Some(params.secretkey);
    if params.server.is_some() {
        cfg.server = params.server;
    }
    cfg.save()?;
    println!("credentials saved to {}", cfg.path.display());
    Ok(())
}

//! Checks the connection to the API.
use chrono::Utc;
use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::Client;

/// Prints the server time along with the local clock drift.
pub async fn time(client: &Client) -> Result<()> {
    let ts = client
        .time()
        .await
        .wrap_err("unable to reach the API")?;
    let drift = Utc::now() - ts.systemtime.datetime();
    println!("server time: {}", ts.systemtime);
    println!("local clock drift: {}s", drift.num_seconds());
    Ok(())
}

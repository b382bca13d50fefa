use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, QueryRequest};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// SQL query to export.
    query: String,
}

/// Prints every row as soon as it arrives, one JSON object per line.
pub async fn export(params: Params, client: &Client) -> Result<()> {
    let mut rows = client
        .export(&QueryRequest {
            query: params.query,
            ..Default::default()
        })
        .await
        .wrap_err("unable to start export")?;
    while let Some(row) = rows.next().await.wrap_err("unable to read export")? {
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}

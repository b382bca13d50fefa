use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, QueryRequest};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// SQL query to run, e.g. "select id, name from tm.event".
    query: String,
    /// Maximum number of rows.
    #[arg(short = 'n', long = "limit")]
    limit: Option<i64>,
    /// Number of rows to skip.
    #[arg(long = "offset")]
    offset: Option<i64>,
}

pub async fn query(params: Params, client: &Client) -> Result<()> {
    let result = client
        .queries(&QueryRequest {
            query: params.query,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .wrap_err("unable to run query")?;
    for row in &result.results {
        println!("{}", serde_json::to_string(row)?);
    }
    eprintln!("{} rows", result.nbrofresults);
    Ok(())
}

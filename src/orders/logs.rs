use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, ID, TableLogItem};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the order.
    id: ID,
}

pub async fn logs(params: Params, client: &Client) -> Result<()> {
    let items = client
        .orders()
        .logs(params.id)
        .await
        .wrap_err("unable to load order history")?;
    for item in &items {
        println!("{}", TableLogItem(item));
    }
    Ok(())
}

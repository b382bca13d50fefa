use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, FullOrder, ID};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the order.
    id: ID,
}

pub async fn get(params: Params, client: &Client) -> Result<()> {
    let order = client
        .orders()
        .get(params.id)
        .await
        .wrap_err("unable to load order")?;
    println!("{}", FullOrder(&order));
    Ok(())
}

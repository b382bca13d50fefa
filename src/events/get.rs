use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, FullEvent, ID};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the event.
    id: ID,
}

pub async fn get(params: Params, client: &Client) -> Result<()> {
    let event = client
        .events()
        .get(params.id)
        .await
        .wrap_err("unable to load event")?;
    println!("{}", FullEvent(&event));
    Ok(())
}

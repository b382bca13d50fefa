use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, FullContact, ID};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the contact.
    id: ID,
}

pub async fn get(params: Params, client: &Client) -> Result<()> {
    let contact = client
        .contacts()
        .get(params.id)
        .await
        .wrap_err("unable to load contact")?;
    println!("{}", FullContact(&contact));
    Ok(())
}

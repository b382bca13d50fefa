use color_eyre::{Result, eyre::WrapErr};
use owo_colors::{OwoColorize, Stream};

use crate::api::rest::{Client, ContactQuery, TableContact};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// Full text search on name, email and address.
    search: Option<String>,
    /// Query on the public data model that returns the contact ids to show.
    #[arg(short = 'f', long = "filter")]
    filter: Option<String>,
    /// Maximum number of contacts to show.
    #[arg(short = 'n', long = "limit", default_value_t = 25)]
    limit: i64,
    /// Number of contacts to skip.
    #[arg(long = "offset")]
    offset: Option<i64>,
}

pub async fn list(params: Params, client: &Client) -> Result<()> {
    let query = ContactQuery {
        searchterm: params.search,
        filter: params.filter,
        limit: Some(params.limit),
        offset: params.offset,
        ..Default::default()
    };
    let contacts = client
        .contacts()
        .list(Some(&query))
        .await
        .wrap_err("unable to list contacts")?;
    for contact in &contacts.data {
        println!(
            "{} {}",
            contact
                .id
                .unwrap_or_default()
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
            TableContact(contact)
        );
    }
    if let Some(total) = contacts.nbrofresults {
        println!("{} of {total} contacts", contacts.data.len());
    }
    Ok(())
}

use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, EventFilter, EventQuery, ID, TableEvent};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// Full text search on the event name.
    search: Option<String>,
    /// Only show events of this production.
    #[arg(short = 'p', long = "production")]
    production: Option<ID>,
    /// Also show archived events.
    #[arg(short = 'a', long = "archived")]
    archived: bool,
    /// Maximum number of events to show.
    #[arg(short = 'n', long = "limit", default_value_t = 25)]
    limit: i64,
}

pub async fn list(params: Params, client: &Client) -> Result<()> {
    let query = EventQuery {
        searchterm: params.search,
        includearchived: Some(params.archived),
        limit: Some(params.limit),
        simplefilter: params.production.map(|id| EventFilter {
            productionid: Some(id),
        }),
        orderby: Some("startts".to_string()),
        ..Default::default()
    };
    let events = client
        .events()
        .list(Some(&query))
        .await
        .wrap_err("unable to list events")?;
    for event in &events.data {
        println!("{}", TableEvent(event));
    }
    Ok(())
}

use std::path::PathBuf;

use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Client, ID};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the seating plan.
    plan: ID,
    /// Zone to draw.
    zone: String,
    /// Write the drawing to a file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

pub async fn svg(params: Params, client: &Client) -> Result<()> {
    let drawing = client
        .seating_plans()
        .svg(params.plan, &params.zone)
        .await
        .wrap_err("unable to load seating plan drawing")?;
    match params.output {
        Some(path) => std::fs::write(&path, drawing)
            .wrap_err_with(|| format!("unable to write {}", path.display()))?,
        None => println!("{drawing}"),
    }
    Ok(())
}

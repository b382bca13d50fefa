use clap::Parser;
use color_eyre::Result;
use ticketmatic::command::Arguments;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Arguments::parse();
    args.init_logging();
    args.exec().await
}

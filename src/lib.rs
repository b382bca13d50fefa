//! Client library for the [Ticketmatic](https://www.ticketmatic.com) REST API, along
//! with the `tm` command line app built on top of it.
//!
//! ```no_run
//! # async fn run() -> ticketmatic::api::rest::Result<()> {
//! use ticketmatic::api::rest::{Client, EventQuery};
//!
//! let client = Client::new("myaccount", "accesskey", "secretkey");
//! let events = client.events().list(Some(&EventQuery::default())).await?;
//! for event in events.data {
//!     println!("{:?}", event.name);
//! }
//! # Ok(())
//! # }
//! ```
pub mod api;
pub mod auth;
pub mod command;
pub mod config;
pub mod contacts;
pub mod diagnostics;
pub mod events;
pub mod orders;
pub mod queries;
pub mod seatingplans;

pub use api::rest::{Client, Credentials, Error, Result};

//! Contains low-level structs as used by the Ticketmatic REST API and provides some tools to
//! work with them.
//!
//! This maps parts of the [API Documentation](https://www.ticketmatic.com/docs/api/) to code
//! that can be consumed by clients, including the actual network calls and
//! serialization/deserialization.
//!
//! To get started, take a look at [`Client`].
mod auth;
mod client;
mod contact;
mod diagnostics;
mod display;
mod error;
mod event;
mod order;
mod pricing;
mod resource;
mod seating;
mod stream;
mod system;
mod ticketsales;
mod tools;

pub use auth::*;
pub use client::*;
pub use contact::*;
pub use diagnostics::*;
pub use display::*;
pub use error::*;
pub use event::*;
pub use order::*;
pub use pricing::*;
pub use resource::{Editable, Endpoint, ID, List, Resource, Translatable, Translations};
pub use seating::*;
pub use stream::*;
pub use system::*;
pub use ticketsales::*;
pub use tools::*;

pub(crate) use resource::{item_path, resource};

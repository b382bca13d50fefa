//! Contains all the types and calls needed to talk to the Ticketmatic API.
pub mod custom_fields;
pub mod rest;
pub mod serialize;

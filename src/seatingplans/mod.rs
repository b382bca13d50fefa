//! Seating plan commands.
pub mod svg;

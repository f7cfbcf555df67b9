//! Feed generation core: holiday interval merging, almanac label selection,
//! and event planning.
//!
//! Everything here is synchronous and free of shared mutable state; the only
//! async surface is the holiday HTTP client.

pub mod almanac;
pub mod error;
pub mod holiday;
pub mod plan;
pub mod select;

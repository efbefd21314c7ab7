//! Core domain entities representing the subsystem's data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping (read-only input to the monitor)
//! - [`Click`] - A persisted click record on a shortened link
//! - [`NewClick`] - The un-persisted form handed to the click store

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::Link;

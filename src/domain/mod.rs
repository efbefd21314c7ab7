//! Domain layer containing the subsystem's entities and trait seams.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::Link`],
//!   [`entities::Click`], [`entities::NewClick`])
//! - [`repositories`] - Data access trait definitions implemented by the
//!   host application
//! - [`click_event`] - The ephemeral click message crossing the queue
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on any concrete store or HTTP
//!   stack; everything external arrives through repository traits
//! - The subsystem owns no persistent data of its own

pub mod click_event;
pub mod entities;
pub mod repositories;

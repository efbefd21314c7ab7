//! Repository trait definitions for the domain layer.
//!
//! These traits are the subsystem's entire view of persistence: a source
//! of links to probe and a sink for click records. Concrete
//! implementations live in the host application; the subsystem is handed
//! trait objects at startup.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Lists links for the availability monitor
//! - [`ClickRepository`] - Persists click records from the worker pool
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` under
//! `cfg(test)`; integration tests use in-memory fakes (see
//! `tests/common`).

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;

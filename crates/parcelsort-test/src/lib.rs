//! Shared test fixtures for parcelsort crates.
//!
//! Plain data only. This crate does NOT depend on `parcelsort-core`, so any
//! crate can take it as a dev-dependency without a dependency cycle; expected
//! categories are stored as their external labels.
//!
//! - [`scenarios`] - the reference scenarios and the built-in sample catalog
//! - [`boundary`] - inputs sitting exactly on or just below a threshold
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! parcelsort-test = { workspace = true }
//! ```

pub mod boundary;
pub mod scenarios;

pub use scenarios::{Expected, Scenario};

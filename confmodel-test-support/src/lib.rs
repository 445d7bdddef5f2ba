//! Shared test utilities used across confmodel crates.
//!
//! [`recording`] captures `tracing` spans and events so tests can assert the
//! diagnostics emitted by the generators, and [`profile`] reads the
//! environment overrides that tune property-test runs.

pub mod profile;
pub mod recording;

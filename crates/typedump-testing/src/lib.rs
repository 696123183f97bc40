//! Testing infrastructure for typedump integration tests.
//!
//! This crate provides utilities shared by the engine, SDK and CLI tests:
//! - `fixtures`: Sample values (class hierarchies, mixed-key mappings)
//! - `assertions`: Checks on rendered dump text
//! - `world`: Temporary directories and CLI invocation

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;

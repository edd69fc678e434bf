//! Common utilities shared across the library
//!
//! - `env_loader`: prefixed environment variable loading with typed defaults
//! - `ulid_generator`: process-wide monotonic ULID generation for thought IDs

pub mod env_loader;
pub mod ulid_generator;

pub use env_loader::EnvLoader;
pub use ulid_generator::{generate_monotonic_ulid, generate_monotonic_ulid_string};

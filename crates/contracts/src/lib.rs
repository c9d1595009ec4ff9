//! Shared types and client-side rules of the Delivro dashboard
//!
//! Everything here is plain Rust with no browser dependencies, so it runs and
//! is tested on the host as well as in the WASM frontend.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;

//! Stackform Core
//!
//! Typed model of the request body used to create or update a stack through
//! the platform's GraphQL API.
//!
//! This crate contains:
//! - Domain types: identifiers and the stack reference returned by the API
//! - DTOs: the `StackInput` payload and its vendor configuration

pub mod domain;
pub mod dto;
pub mod error;

pub use error::{ModelError, Result};

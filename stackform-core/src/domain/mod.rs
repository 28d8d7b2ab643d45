//! Core domain types
//!
//! Identifiers and records the remote platform hands back. These are shared
//! between the client (which decodes them) and the CLI (which displays them).

pub mod stack;

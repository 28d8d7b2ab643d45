//! Data Transfer Objects for the GraphQL API
//!
//! DTOs mirror the remote schema's input types field for field. Wire names
//! are lowerCamelCase and absent optional fields are omitted, not sent as
//! `null`.

pub mod stack;
pub mod vendor;

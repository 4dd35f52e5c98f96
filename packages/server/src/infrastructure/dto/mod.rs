//! Data Transfer Objects (DTOs) for the matchmaking HTTP API.
//!
//! - `http`: request/response DTOs (camelCase wire format)
//! - `conversion`: Domain Model → DTO conversions

pub mod conversion;
pub mod http;

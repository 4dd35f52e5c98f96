//! Infrastructure layer: repository implementations and HTTP DTOs.

pub mod dto;
pub mod repository;

//! Persistence-facing service operations.

pub mod auth;
pub mod product;

//! Diesel row models bridging the database schema and the domain layer.

pub mod advocate;
pub mod config;

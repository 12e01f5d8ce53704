//! DTO modules that bridge services with the wire format.

pub mod advocate;

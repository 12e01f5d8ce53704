//! Actix-Web handlers. Handlers stay thin: decode parameters, call the
//! service layer, encode the result.

pub mod api;

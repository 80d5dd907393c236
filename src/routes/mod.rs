//! Defines the REST API's route handlers.

pub mod transaction;

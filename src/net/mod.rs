//! Network layer: REST API functions and the request/response types they
//! exchange with the backend.

pub mod api;
pub mod types;

//! Response payloads returned by the API.

pub mod errors;
pub mod health;
pub mod wells;

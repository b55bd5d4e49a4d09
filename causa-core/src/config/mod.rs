//! Configuration: constants and credential loading.

pub mod api_keys;
pub mod constants;

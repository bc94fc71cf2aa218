pub mod fetch_outcome;
pub mod api_client;
pub mod session_service;

pub use fetch_outcome::*;
pub use api_client::*;
pub use session_service::*;

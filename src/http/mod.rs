pub mod auth;
pub mod extract;
pub mod logging;
pub mod routing;
pub mod types;

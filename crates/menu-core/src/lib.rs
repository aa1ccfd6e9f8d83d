pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod state;
pub mod toggle;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use host::*;
pub use state::*;
pub use toggle::*;

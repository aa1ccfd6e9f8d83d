// Front-end wiring constants.

// DOM event that counts as one activation of the toggle
pub const ACTIVATION_EVENT: &str = "click";

// Console log level installed at startup
pub const LOG_LEVEL: log::Level = log::Level::Info;

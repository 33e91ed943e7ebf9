pub mod config;
pub mod constants;
pub mod data_source;
pub mod message;
pub mod onboarding;
pub mod responder;
pub mod session;

pub mod data;
pub mod io;

pub use data::{Config, ResponderOverrides};
pub use io::ConfigError;

#[cfg(test)]
pub mod tests;

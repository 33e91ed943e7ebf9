//! Setting handlers for different configuration patterns.

pub mod numeric;
pub mod simple;

pub use numeric::*;
pub use simple::*;

//! Safe SQL builder: identifiers come from entity definitions only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;

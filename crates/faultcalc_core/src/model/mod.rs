mod params;
mod results;

pub use params::*;
pub use results::*;

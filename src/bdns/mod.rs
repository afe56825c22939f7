mod errors;
mod problem;


pub use errors::*;
pub use problem::*;

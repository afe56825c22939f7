mod resp_code;
mod types;


pub use resp_code::*;
pub use types::*;

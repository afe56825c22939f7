pub mod dns;
pub mod log;

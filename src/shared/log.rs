pub use log::Level;
use simple_logger::SimpleLogger;

/// Initialize the logging facility with Debug level. Calling it
/// more than once leaves the first logger installed.
pub fn init_log() {
    if let Err(err) = SimpleLogger::new().with_level(Level::Debug.to_level_filter()).init() {
        log::warn!("Logger already initialized: {}", err);
    }
}

#[inline]
pub fn set_max_level(lvl: Level) {
    log::set_max_level(lvl.to_level_filter())
}

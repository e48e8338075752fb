// ============================================================================
// Interfaces Module
// Console I/O and session observation contracts
// ============================================================================

mod console;
mod event_handler;

pub use console::{parse_int, parse_real, Console};
pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, SessionEvent};

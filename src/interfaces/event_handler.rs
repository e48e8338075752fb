// ============================================================================
// Event Handler Interface
// Defines the contract for observing session activity
// ============================================================================

use crate::domain::Mode;
use crate::numeric::CalcError;

/// Events emitted by the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Precision settled, menu loop about to start
    SessionStarted { decimals: u8 },

    /// Requested precision rejected, default kept
    PrecisionRejected { requested: i64 },

    /// A calculator mode was picked from the menu
    ModeSelected { mode: Mode },

    /// Menu selection named no mode
    SelectionRejected { selector: i64 },

    /// Domain input rejected by a calculator
    InputRejected { mode: Mode, error: CalcError },

    /// A calculator produced `values` printed results
    ResultPrinted { mode: Mode, values: usize },

    /// Session over; `farewell` is false when input ran out mid-calculation
    SessionEnded { farewell: bool },
}

/// Event handler trait for observing the session.
/// Implementations can handle logging, recording for tests, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a session event
    fn on_event(&self, event: SessionEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SessionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::SessionStarted { decimals } => {
                tracing::info!(decimals, "session started");
            },
            SessionEvent::SessionEnded { farewell } => {
                tracing::info!(farewell, "session ended");
            },
            SessionEvent::InputRejected { mode, error } => {
                tracing::debug!(?mode, %error, "calculator input rejected");
            },
            other => tracing::debug!("Session event: {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<SessionEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: SessionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(SessionEvent::SessionStarted { decimals: 3 });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(SessionEvent::InputRejected {
            mode: Mode::ValveByRate,
            error: CalcError::NegativeRate,
        });
        handler.on_event(SessionEvent::SessionEnded { farewell: true });
    }

    #[test]
    fn test_handler_as_trait_object() {
        let recorder = Recorder(Mutex::new(Vec::new()));
        let handler: &dyn EventHandler = &recorder;
        handler.on_event(SessionEvent::ModeSelected {
            mode: Mode::PipelineEqualRates,
        });
        assert_eq!(
            recorder.0.lock().unwrap().as_slice(),
            &[SessionEvent::ModeSelected {
                mode: Mode::PipelineEqualRates
            }]
        );
    }
}

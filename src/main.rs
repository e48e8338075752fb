// ============================================================================
// Valve Bypass Calculator
// Interactive console front end
// ============================================================================

use bypass_calculator::prelude::*;
use std::io;
use std::sync::Arc;

fn main() {
    // Logs go to stderr so stdout carries only the calculator transcript
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), Arc::new(LoggingEventHandler));

    if let Err(err) = session.run() {
        tracing::error!("console I/O failed: {}", err);
    }
}

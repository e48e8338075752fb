// ============================================================================
// Interactive Session
// Banner, precision prompt and the menu loop dispatching to calculators
// ============================================================================

use crate::domain::report::{heading, stage_line};
use crate::domain::{Mode, SessionConfig, StageValue, INLINE_STAGES};
use crate::engine::{pipeline, single_valve};
use crate::interfaces::{Console, EventHandler, SessionEvent};
use crate::numeric::{CalcError, CalcResult, Percentage};
use smallvec::SmallVec;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const PRECISION_PROMPT: &str = "Decimal places to round to (default 3): ";
const EQUAL_SPLIT_NOTE: &str = "Note: 50 and 100 splits can often be done with junction/turn.";

/// What the menu loop does after a mode finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Back to the menu
    Continue,
    /// Leave the loop and say goodbye
    Exit,
    /// Stop at once, without the farewell
    Abort,
}

/// Reads a value from the console or leaves the mode with `$on_eof` when
/// input is exhausted.
macro_rules! read_or {
    ($read:expr, $on_eof:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok($on_eof),
        }
    };
}

/// Interactive calculator session over any line-oriented input and output
///
/// # Example
/// ```
/// use bypass_calculator::prelude::*;
/// use std::io::Cursor;
/// use std::sync::Arc;
///
/// let input = Cursor::new("3\n1\n1\n3\n0\n");
/// let mut session = Session::new(input, Vec::new(), Arc::new(NoOpEventHandler));
/// session.run().unwrap();
///
/// let transcript = String::from_utf8(session.into_output()).unwrap();
/// assert!(transcript.contains("Bypass percentage: 25.000"));
/// ```
pub struct Session<R, W> {
    console: Console<R, W>,
    config: SessionConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            console: Console::new(input, output),
            config: SessionConfig::default(),
            event_handler,
        }
    }

    /// Precision in effect (the default until `run` has read it)
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the session until the user exits or input runs out.
    ///
    /// # Errors
    /// Only I/O failures on the underlying input or output are returned.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_header()?;

        let requested = match self.console.read_int(PRECISION_PROMPT)? {
            Some(requested) => requested,
            None => return self.finish(false),
        };
        match SessionConfig::from_requested(requested) {
            Ok(config) => self.config = config,
            Err(err) => {
                self.event_handler
                    .on_event(SessionEvent::PrecisionRejected { requested });
                self.console.write_line(&err.to_string())?;
            },
        }
        self.event_handler.on_event(SessionEvent::SessionStarted {
            decimals: self.config.decimals(),
        });

        loop {
            self.print_menu()?;

            let selector = match self.console.read_int("Mode: ")? {
                Some(selector) => selector,
                None => break,
            };

            let mode = match Mode::try_from(selector) {
                Ok(Mode::Exit) => break,
                Ok(mode) => mode,
                Err(err) => {
                    self.event_handler
                        .on_event(SessionEvent::SelectionRejected { selector });
                    self.console.write_line(&err.to_string())?;
                    continue;
                },
            };

            self.event_handler.on_event(SessionEvent::ModeSelected { mode });
            match self.run_mode(mode)? {
                Flow::Continue => {},
                Flow::Exit => break,
                Flow::Abort => return self.finish(false),
            }
        }

        self.console.write_line("\nGoodbye.")?;
        self.finish(true)
    }

    fn finish(&mut self, farewell: bool) -> io::Result<()> {
        self.event_handler
            .on_event(SessionEvent::SessionEnded { farewell });
        self.console.flush()
    }

    fn print_header(&mut self) -> io::Result<()> {
        self.console.write_line("Valve Bypass Calculator")?;
        self.console
            .write_line("Outputs are NUMBERS ONLY (no % sign).\n")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.console.write_line("\nChoose a mode:")?;
        for mode in Mode::MENU {
            self.console
                .write_line(&format!("  {}) {}", mode.selector(), mode.label()))?;
        }
        Ok(())
    }

    fn run_mode(&mut self, mode: Mode) -> io::Result<Flow> {
        match mode {
            Mode::ValveByCount => self.valve_by_count(),
            Mode::ValveByRate => self.valve_by_rate(),
            Mode::PipelineEqualRates => self.pipeline_equal_rates(),
            Mode::PipelineUnequalRates => self.pipeline_unequal_rates(),
            Mode::Exit => Ok(Flow::Exit),
        }
    }

    // ========================================================================
    // Calculator Modes
    // ========================================================================

    fn valve_by_count(&mut self) -> io::Result<Flow> {
        let bypass = read_or!(
            self.console.read_int("How many machines are in the BYPASS: "),
            Flow::Exit
        );
        let main = read_or!(
            self.console.read_int("How many machines are in the MAIN OUTPUT: "),
            Flow::Exit
        );

        let result = single_valve::by_count(bypass, main, self.config.decimals());
        self.print_single(Mode::ValveByCount, result)
    }

    fn valve_by_rate(&mut self) -> io::Result<Flow> {
        let bypass = read_or!(
            self.console
                .read_real("Total consumption rate of the BYPASS: "),
            Flow::Exit
        );
        let main = read_or!(
            self.console
                .read_real("Total consumption rate of the MAIN OUTPUT: "),
            Flow::Exit
        );

        let result = single_valve::by_rate(bypass, main, self.config.decimals());
        self.print_single(Mode::ValveByRate, result)
    }

    fn pipeline_equal_rates(&mut self) -> io::Result<Flow> {
        let machines = read_or!(
            self.console.read_int("How many MACHINES in the pipeline: "),
            Flow::Exit
        );

        match pipeline::equal_rates(machines, self.config.decimals()) {
            Ok(stages) => {
                self.print_pipeline(Mode::PipelineEqualRates, stages)?;
                self.console.write_line(EQUAL_SPLIT_NOTE)?;
                Ok(Flow::Continue)
            },
            Err(err) => self.reject(Mode::PipelineEqualRates, err),
        }
    }

    fn pipeline_unequal_rates(&mut self) -> io::Result<Flow> {
        let machines = read_or!(
            self.console.read_int("How many MACHINES in the pipeline: "),
            Flow::Exit
        );
        let n = match pipeline::machine_count(machines) {
            Ok(n) => n,
            Err(err) => return self.reject(Mode::PipelineUnequalRates, err),
        };

        // A negative rate re-asks the same machine instead of leaving the mode
        let mut rates: SmallVec<[f64; INLINE_STAGES]> = SmallVec::new();
        while rates.len() < n {
            let prompt = format!("Consumption rate of machine #{}: ", rates.len() + 1);
            let rate = read_or!(self.console.read_real(&prompt), Flow::Abort);
            match pipeline::check_rate(rate) {
                Ok(rate) => rates.push(rate),
                Err(err) => {
                    self.event_handler.on_event(SessionEvent::InputRejected {
                        mode: Mode::PipelineUnequalRates,
                        error: err,
                    });
                    self.console.write_line(&err.to_string())?;
                },
            }
        }

        match pipeline::unequal_rates(&rates, self.config.decimals()) {
            Ok(report) => {
                let stages = report.stages().iter().copied();
                self.print_pipeline(Mode::PipelineUnequalRates, stages)?;
                Ok(Flow::Continue)
            },
            Err(err) => self.reject(Mode::PipelineUnequalRates, err),
        }
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn print_single(&mut self, mode: Mode, result: CalcResult<Percentage>) -> io::Result<Flow> {
        match result {
            Ok(pct) => {
                self.console
                    .write_line(&format!("Bypass percentage: {}", pct))?;
                self.event_handler
                    .on_event(SessionEvent::ResultPrinted { mode, values: 1 });
                Ok(Flow::Continue)
            },
            Err(err) => self.reject(mode, err),
        }
    }

    /// Writes the heading and one line per stage as the stages are produced.
    fn print_pipeline(
        &mut self,
        mode: Mode,
        stages: impl ExactSizeIterator<Item = StageValue>,
    ) -> io::Result<()> {
        let values = stages.len();
        self.console.write_line(&heading(values))?;
        for (position, stage) in stages.enumerate() {
            self.console.write_line(&stage_line(position, &stage))?;
        }
        self.event_handler
            .on_event(SessionEvent::ResultPrinted { mode, values });
        Ok(())
    }

    fn reject(&mut self, mode: Mode, error: CalcError) -> io::Result<Flow> {
        self.event_handler
            .on_event(SessionEvent::InputRejected { mode, error });
        self.console.write_line(&error.to_string())?;
        Ok(Flow::Continue)
    }
}

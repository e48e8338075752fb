// ============================================================================
// Console Reader
// Line-oriented prompting with re-prompt on malformed numbers
// ============================================================================

use std::io::{self, BufRead, Write};

/// Parse a whole line as an integer, ignoring surrounding whitespace.
pub fn parse_int(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Parse a whole line as a finite real number, ignoring surrounding whitespace.
///
/// Spellings such as `inf` or `NaN` are not accepted.
pub fn parse_real(line: &str) -> Option<f64> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Prompting reader over any buffered input and writable output.
///
/// Every `read_*` call returns `Ok(None)` once the input is exhausted; callers
/// treat that as a request to terminate.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Prompt until a valid integer is entered.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.read_parsed(prompt, "Invalid integer. Try again.", parse_int)
    }

    /// Prompt until a valid real number is entered.
    pub fn read_real(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.read_parsed(prompt, "Invalid number. Try again.", parse_real)
    }

    /// Write one line of output.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Consume the console and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }

            // Bytes that are not UTF-8 are just another malformed line
            let parsed = std::str::from_utf8(&self.line).ok().and_then(&parse);
            match parsed {
                Some(value) => return Ok(Some(value)),
                None => {
                    tracing::trace!(
                        input = %String::from_utf8_lossy(&self.line).trim_end(),
                        "rejected malformed number"
                    );
                    self.write_line(invalid)?;
                },
            }
        }
    }
}

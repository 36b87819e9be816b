//! Line-oriented terminal I/O
//!
//! [`Console`] owns the input stream and both output streams. Regular output
//! goes to `out`; user-facing error messages go to `err`. Every prompt reads
//! exactly one line per attempt.

use crate::types::LedgerError;
use rust_decimal::Decimal;
use std::io::{self, BufRead, StdinLock, Stderr, Stdout, Write};
use std::str::FromStr;

/// Sentinel returned by [`Console::prompt_for_menu_selection`] for non-numeric input
pub const INVALID_SELECTION: i64 = -1;

const GENERIC_ERROR: &str = "An error occurred. Check the log for details.";

/// Terminal wrapper generic over its streams so sessions can be scripted in tests
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    /// Console bound to the process's standard streams
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }

    /// Give back the output streams, e.g. to inspect them in tests
    pub fn into_outputs(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Read one line without its terminator
    ///
    /// Returns [`LedgerError::InputClosed`] at end of input.
    fn read_line(&mut self) -> Result<String, LedgerError> {
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LedgerError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<(), LedgerError> {
        write!(self.out, "{}", prompt)?;
        Ok(())
    }

    /// Single-shot numeric selection
    ///
    /// Non-numeric input yields [`INVALID_SELECTION`] instead of re-prompting.
    pub fn prompt_for_menu_selection(&mut self, prompt: &str) -> Result<i64, LedgerError> {
        self.show_prompt(prompt)?;
        let line = self.read_line()?;
        Ok(line.trim().parse().unwrap_or(INVALID_SELECTION))
    }

    pub fn prompt_for_string(&mut self, prompt: &str) -> Result<String, LedgerError> {
        self.show_prompt(prompt)?;
        self.read_line()
    }

    /// Blocking integer prompt: re-prompts until the input parses
    pub fn prompt_for_int(&mut self, prompt: &str) -> Result<i64, LedgerError> {
        self.prompt_until_parsed(prompt, "Please enter a number.")
    }

    /// Blocking decimal prompt: re-prompts until the input parses
    pub fn prompt_for_decimal(&mut self, prompt: &str) -> Result<Decimal, LedgerError> {
        self.prompt_until_parsed(prompt, "Please enter a decimal number.")
    }

    fn prompt_until_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        retry_message: &str,
    ) -> Result<T, LedgerError> {
        self.show_prompt(prompt)?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(error = %LedgerError::invalid_input(&line), "re-prompting");
                    self.print_line(retry_message)?;
                }
            }
        }
    }

    pub fn pause(&mut self) -> Result<(), LedgerError> {
        self.print_line("\nPress Enter to continue...")?;
        self.read_line().map(|_| ())
    }

    pub fn print_line(&mut self, line: &str) -> Result<(), LedgerError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    pub fn print_lines<I>(&mut self, lines: I) -> Result<(), LedgerError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            writeln!(self.out, "{}", line.as_ref())?;
        }
        Ok(())
    }

    /// Write a user-facing message to the error stream
    pub fn print_error(&mut self, message: &str) -> Result<(), LedgerError> {
        self.out.flush()?;
        writeln!(self.err, "{}", message)?;
        Ok(())
    }

    pub fn print_error_message(&mut self) -> Result<(), LedgerError> {
        self.print_error(GENERIC_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    fn outputs(console: TestConsole) -> (String, String) {
        let (out, err) = console.into_outputs();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[rstest]
    #[case::number("2\n", 2)]
    #[case::padded(" 3 \r\n", 3)]
    #[case::text("abc\n", INVALID_SELECTION)]
    #[case::empty("\n", INVALID_SELECTION)]
    fn test_menu_selection(#[case] input: &str, #[case] expected: i64) {
        let mut console = console(input);
        assert_eq!(console.prompt_for_menu_selection("> ").unwrap(), expected);
    }

    #[test]
    fn test_menu_selection_input_closed() {
        let mut console = console("");
        assert_eq!(
            console.prompt_for_menu_selection("> "),
            Err(LedgerError::InputClosed)
        );
    }

    #[test]
    fn test_prompt_for_int_reprompts() {
        let mut console = console("x\n4.5\n42\n");
        assert_eq!(console.prompt_for_int("Id: ").unwrap(), 42);

        let (out, _) = outputs(console);
        assert_eq!(out, "Id: Please enter a number.\nPlease enter a number.\n");
    }

    #[test]
    fn test_prompt_for_int_closed_mid_retry() {
        let mut console = console("nope\n");
        assert_eq!(console.prompt_for_int("Id: "), Err(LedgerError::InputClosed));
    }

    #[test]
    fn test_prompt_for_decimal_reprompts() {
        let mut console = console("ten\n10.25\n");
        assert_eq!(
            console.prompt_for_decimal("Amount: ").unwrap(),
            Decimal::new(1025, 2)
        );

        let (out, _) = outputs(console);
        assert!(out.contains("Please enter a decimal number."));
    }

    #[test]
    fn test_prompt_for_string_keeps_inner_spaces() {
        let mut console = console("  bob smith\n");
        assert_eq!(console.prompt_for_string("Name: ").unwrap(), "  bob smith");
    }

    #[test]
    fn test_errors_go_to_error_stream() {
        let mut console = console("");
        console.print_line("hello").unwrap();
        console.print_error_message().unwrap();

        let (out, err) = outputs(console);
        assert_eq!(out, "hello\n");
        assert_eq!(err, "An error occurred. Check the log for details.\n");
    }

    #[test]
    fn test_pause_consumes_one_line() {
        let mut console = console("\nnext\n");
        console.pause().unwrap();
        assert_eq!(console.prompt_for_string("").unwrap(), "next");
    }
}

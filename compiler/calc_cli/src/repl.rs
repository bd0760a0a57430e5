//! Evaluation loop shared by argument mode and interactive mode.

use std::io::{self, BufRead, Write};

use calc_eval::{format_value, Calculator};

use crate::options::USAGE;

/// Front end state: the engine plus output preferences.
pub struct Frontend<W, E> {
    calculator: Calculator,
    show_log: bool,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Frontend<W, E> {
    pub fn new(calculator: Calculator, show_log: bool, out: W, err: E) -> Self {
        Frontend {
            calculator,
            show_log,
            out,
            err,
        }
    }

    /// Evaluate one expression and print the result (or the error).
    /// Returns whether evaluation succeeded.
    pub fn evaluate(&mut self, expression: &str) -> io::Result<bool> {
        let outcome = self.calculator.evaluate(expression);
        tracing::trace!(expression, ok = outcome.is_ok(), "frontend evaluated");
        if self.show_log {
            self.print_log()?;
        }
        match outcome {
            Ok(value) => {
                writeln!(self.out, "{}", format_value(value))?;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.err, "error: {err}")?;
                Ok(false)
            }
        }
    }

    /// Evaluate every expression in order. Returns `true` if all succeeded.
    pub fn evaluate_all(&mut self, expressions: &[String]) -> io::Result<bool> {
        let mut all_ok = true;
        for expression in expressions {
            all_ok &= self.evaluate(expression)?;
        }
        Ok(all_ok)
    }

    /// Read lines until EOF or `:quit`.
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.starts_with(':') {
                tracing::debug!(command = line, "repl command");
            }
            match line {
                "" => {}
                ":quit" | ":q" => break,
                ":log" => self.print_log()?,
                ":stats" => self.print_stats()?,
                ":reset" => {
                    self.calculator.reset_statistics();
                    writeln!(self.out, "statistics reset")?;
                }
                ":help" => writeln!(self.out, "{USAGE}")?,
                command if command.starts_with(':') => {
                    writeln!(self.err, "error: unknown command {command}")?;
                }
                expression => {
                    self.evaluate(expression)?;
                }
            }
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn print_log(&mut self) -> io::Result<()> {
        for line in self.calculator.log() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    pub fn print_stats(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.calculator.statistics())
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::{Arc, Mutex};

    use super::*;
    use pretty_assertions::assert_eq;

    fn frontend(show_log: bool) -> Frontend<Vec<u8>, Vec<u8>> {
        Frontend::new(Calculator::new(), show_log, Vec::new(), Vec::new())
    }

    fn text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_evaluate_prints_formatted_result() {
        let mut fe = frontend(false);
        assert!(fe.evaluate("10/4").unwrap());
        assert!(!fe.evaluate("1/0").unwrap());
        assert_eq!(text(&fe.out), "2.5\n");
        assert_eq!(text(&fe.err), "error: division by zero\n");
    }

    #[test]
    fn test_evaluate_all_reports_failures() {
        let mut fe = frontend(false);
        let ok = fe
            .evaluate_all(&["1+1".to_owned(), "(".to_owned(), "3".to_owned()])
            .unwrap();
        assert!(!ok);
        assert_eq!(text(&fe.out), "2\n3\n");
    }

    #[test]
    fn test_show_log() {
        let mut fe = frontend(true);
        fe.evaluate("4").unwrap();
        assert_eq!(
            text(&fe.out),
            "[IO] new expression: 4\n[IO] tokens: 4\n[IO] result: 4\n4\n"
        );
    }

    #[test]
    fn test_interactive_commands() {
        let mut fe = frontend(false);
        let input = "2*3\n\n:stats\n:reset\n:bogus\n:quit\n5+5\n";
        fe.run_interactive(input.as_bytes()).unwrap();

        let out = text(&fe.out);
        assert!(out.starts_with("6\n"));
        assert!(out.contains("  multiplication       :   1"));
        assert!(out.ends_with("statistics reset\n"));
        assert!(!out.contains("\n10\n"));
        assert_eq!(text(&fe.err), "error: unknown command :bogus\n");
        assert_eq!(fe.calculator().statistics().total(), 0);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_interactive_commands_are_traced() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut fe = frontend(false);
        tracing::subscriber::with_default(subscriber, || {
            fe.run_interactive(":stats\n1+1\n:quit\n".as_bytes()).unwrap();
        });

        let trace = text(&captured.0.lock().unwrap());
        assert!(trace.contains("repl command command=\":stats\""));
        assert!(trace.contains("repl command command=\":quit\""));
        assert!(!trace.contains("command=\"1+1\""));
    }
}

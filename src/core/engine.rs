use std::io::Write;

use crate::core::ops;
use crate::utils::error::Result;

/// Runs the fixed demonstration sequence and writes the formatted
/// results to the given sink.
pub struct CalcEngine<W: Write> {
    out: W,
}

impl<W: Write> CalcEngine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Computing integer sum");
        let result = ops::add(5, 3);
        writeln!(self.out, "Result: {}", result)?;

        tracing::debug!("Computing floating-point product");
        let product = ops::multiply(2.5, 4.0);
        writeln!(self.out, "Product: {:.2}", product)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string() -> String {
        let mut buf = Vec::new();
        CalcEngine::new(&mut buf).run().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_exact_output() {
        assert_eq!(run_to_string(), "Result: 8\nProduct: 10.00\n");
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        assert_eq!(run_to_string(), run_to_string());
    }

    #[test]
    fn test_write_error_is_propagated() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = CalcEngine::new(FailingSink).run();
        assert!(result.is_err());
    }
}

use crate::config::HelloConfig;
use crate::core::adder::checked_add_numbers;
use crate::core::greeter::greet;
use crate::utils::error::{HelloError, Result};
use std::fmt::Display;
use std::io::Write;

pub fn greeting_line(config: &HelloConfig) -> String {
    greet(&config.name)
}

pub fn sum_line<T: Display>(a: T, b: T, sum: T) -> String {
    format!("{} + {} = {}", a, b, sum)
}

/// Writes the greeting line, then the sum line.
pub fn write_report<W: Write>(out: &mut W, config: &HelloConfig) -> Result<()> {
    let sum = checked_add_numbers(config.a, config.b)?;

    writeln!(out, "{}", greeting_line(config))?;
    writeln!(out, "{}", sum_line(config.a, config.b, sum))?;
    out.flush()?;

    tracing::debug!("Report written for {:?}", config.name);
    Ok(())
}

/// Writes `config` as TOML instead of the report.
pub fn write_config<W: Write>(out: &mut W, config: &HelloConfig) -> Result<()> {
    let rendered = toml::to_string(config).map_err(|e| HelloError::ConfigRenderError {
        message: e.to_string(),
    })?;

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_report() {
        let mut buf = Vec::new();
        write_report(&mut buf, &HelloConfig::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hello, Bazel!\n5 + 3 = 8\n");
    }

    #[test]
    fn test_sum_line_format() {
        assert_eq!(sum_line(5, 3, 8), "5 + 3 = 8");
        assert_eq!(sum_line(-2, 7, 5), "-2 + 7 = 5");
    }

    #[test]
    fn test_custom_config_report() {
        let config = HelloConfig {
            name: String::new(),
            a: -10,
            b: 4,
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &config).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hello, !\n-10 + 4 = -6\n");
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let result = write_report(&mut BrokenPipe, &HelloConfig::default());
        assert!(matches!(result, Err(HelloError::IoError(_))));
    }

    #[test]
    fn test_overflow_writes_nothing() {
        let config = HelloConfig {
            a: i64::MAX,
            b: 1,
            ..HelloConfig::default()
        };
        let mut buf = Vec::new();
        assert!(matches!(
            write_report(&mut buf, &config),
            Err(HelloError::Overflow { .. })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_config_renders_toml() {
        let config = HelloConfig {
            name: "Dry".to_string(),
            a: 1,
            b: 2,
        };
        let mut buf = Vec::new();
        write_config(&mut buf, &config).unwrap();

        let parsed: HelloConfig = toml::from_str(&String::from_utf8(buf).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_write_config_failure_is_io_error() {
        let result = write_config(&mut BrokenPipe, &HelloConfig::default());
        assert!(matches!(result, Err(HelloError::IoError(_))));
    }
}

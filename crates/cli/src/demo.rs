//! The fixed demonstration run.

use crate::config::DemoConfig;
use bytepoly_polynomial::Polynomial;
use tracing::{debug, info, trace, warn};

/// Builds the byte-histogram polynomial of `config.bytes` over `i64` and
/// evaluates it at `config.point`.
///
/// The value wraps like any `i64` arithmetic. Any intermediate overflow is
/// reported as a warning, not an error; the printed value can still be exact
/// when wrapped terms cancel.
pub fn run(config: &DemoConfig) -> i64 {
    let polynomial = Polynomial::<i64>::from_bytes(&config.bytes);
    debug!(
        bytes = config.bytes.len(),
        degree = ?polynomial.degree(),
        "Built byte histogram polynomial"
    );
    trace!(%polynomial);

    let value = polynomial.evaluate(config.point);
    if let Err(err) = polynomial.checked_evaluate(config.point) {
        warn!(
            point = config.point,
            %err,
            "Intermediate overflow during evaluation, the result may have wrapped"
        );
    }

    info!(point = config.point, value, "Evaluated polynomial");
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{fmt, EnvFilter};

    fn config(bytes: &[u8], point: i64) -> DemoConfig {
        DemoConfig {
            bytes: bytes.to_vec(),
            point,
        }
    }

    #[test]
    fn test_default_run() {
        assert_eq!(run(&DemoConfig::default()), 34);
    }

    #[test]
    fn test_empty_bytes() {
        assert_eq!(run(&config(&[], 2)), 0);
        assert_eq!(run(&config(&[], -9)), 0);
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(run(&config(&[5], 1)), 1);
    }

    #[test]
    fn test_intermediate_overflow() {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::new("trace"))
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        // 2^255 is a multiple of 2^64.
        assert_eq!(run(&config(&[255], 2)), 0);

        // The overflowing terms cancel, so the printed value is exact.
        assert_eq!(run(&config(&[62, 62, 63], -2)), 0);
    }
}

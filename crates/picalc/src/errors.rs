//! Error-to-exit-code mapping.

use picalc_core::constants::exit_codes;
use picalc_core::PiError;

/// Map a computation error to the process exit code.
pub fn exit_code(error: &PiError) -> i32 {
    match error {
        PiError::InvalidPrecision(_)
        | PiError::InvalidRangeCount(_)
        | PiError::InvalidRangeBounds { .. } => exit_codes::ERROR_CONFIG,
        PiError::Worker(_) | PiError::DegenerateResult => exit_codes::ERROR_GENERIC,
        PiError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        PiError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_kind() {
        assert_eq!(exit_code(&PiError::InvalidPrecision(0)), 4);
        assert_eq!(exit_code(&PiError::InvalidRangeCount(0)), 4);
        assert_eq!(
            exit_code(&PiError::InvalidRangeBounds { initial: 2, end: 1 }),
            4
        );
        assert_eq!(exit_code(&PiError::Worker("boom".into())), 1);
        assert_eq!(exit_code(&PiError::DegenerateResult), 1);
        assert_eq!(exit_code(&PiError::Timeout("30m".into())), 2);
        assert_eq!(exit_code(&PiError::Cancelled), 130);
    }
}

//! CLI result presenter.

use std::time::Duration;

use console::style;

use picalc_core::{PiError, PiValue};
use picalc_orchestration::interfaces::ResultPresenter;

use crate::output::{format_duration, format_number, format_result};

/// Presents computation outcomes on stdout/stderr.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(&self, digits: u64, value: &PiValue, duration: Duration) {
        if self.quiet {
            println!("{}", value.to_digit_string());
            return;
        }

        println!("{}: {}", style("Precision").bold(), format_number(digits));
        println!("{}: {}", style("Duration").bold(), format_duration(duration));
        println!("π = {}", format_result(value, self.verbose));
    }

    fn present_error(&self, error: &PiError) {
        eprintln!("{}: {error}", style("Error").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_presenter_construction() {
        let presenter = CliResultPresenter::new(false, true);
        assert!(presenter.quiet);
        assert!(!presenter.verbose);
    }

    #[test]
    fn present_result_does_not_panic() {
        let value = picalc_core::pi(10).unwrap();
        for (verbose, quiet) in [(false, false), (true, false), (false, true)] {
            let presenter = CliResultPresenter::new(verbose, quiet);
            presenter.present_result(10, &value, Duration::from_millis(3));
        }
    }

    #[test]
    fn present_error_does_not_panic() {
        let presenter = CliResultPresenter::new(false, false);
        presenter.present_error(&PiError::InvalidPrecision(0));
    }
}

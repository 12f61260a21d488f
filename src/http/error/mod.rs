use error_stack::{Context, Report};
use thiserror::Error as ThisError;
use tracing_error::SpanTrace;

use crate::types;

mod impls;

pub type Result<T> = std::result::Result<T, Error>;

/// Context that erases the concrete failure type once it has been
/// classified into a [`types::Error`]. The original chain stays in
/// the report for logging.
#[derive(Debug, ThisError)]
#[error("request failed")]
struct Erased;

/// One failed request: the wire-facing classification plus the full
/// diagnostic report and the span trace captured where it happened.
pub struct Error {
    error_type: types::Error,
    report: Report<Erased>,
    trace: SpanTrace,
}

impl Error {
    #[must_use]
    pub fn from_context(error_type: types::Error, context: impl Context) -> Self {
        Self {
            error_type,
            report: Report::new(context).change_context(Erased),
            trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn from_report(error_type: types::Error, report: Report<impl Context>) -> Self {
        Self {
            error_type,
            report: report.change_context(Erased),
            trace: SpanTrace::capture(),
        }
    }
}

impl Error {
    #[must_use]
    pub fn as_type(&self) -> &types::Error {
        &self.error_type
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("type", &self.error_type)
            .field("report", &self.report)
            .field("trace", &self.trace)
            .finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", &self.error_type)?;
        writeln!(f, "{:?}", self.report)?;
        std::fmt::Display::fmt(&self.trace, f)
    }
}

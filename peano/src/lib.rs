#[cfg(feature = "trace")]
use std::sync::Arc;

use thiserror::Error;

// note: every operation walks the unary chain, so cost grows linearly (or worse) with magnitude

mod natural;
mod ops;

#[cfg(test)]
mod proptest;

pub use natural::Natural;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Division By Zero: dividend = {dividend:?}")]
    DivisionByZero {
        dividend: Natural,
        #[cfg(feature = "trace")]
        trace: Option<Arc<tracing_error::SpanTrace>>,
    },
}
impl Error {
    pub(crate) fn division_by_zero(dividend: Natural) -> Self {
        Error::DivisionByZero {
            dividend,
            #[cfg(feature = "trace")]
            trace: Some(Arc::new(tracing_error::SpanTrace::capture())),
        }
    }
}
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Error::DivisionByZero { dividend: a, .. },
                Error::DivisionByZero { dividend: b, .. },
            ) => a == b,
        }
    }
}
impl Eq for Error {}

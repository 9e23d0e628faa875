use std::fmt;

use crate::key::CellKey;
use crate::pool::Handle;

/// Recoverable anomalies the pool absorbs. None of them change pool state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolWarning {
    /// Release of a position whose cell holds no live vertex.
    UnknownKey { key: CellKey },
    /// Release of a cell whose count is already zero.
    RefCountUnderflow { key: CellKey, handle: Handle },
    /// Release by a handle past the end of storage.
    HandleOutOfRange { handle: Handle, len: usize },
}

impl fmt::Display for PoolWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolWarning::UnknownKey { key } => write!(f, "key {} not found in pool", key),
            PoolWarning::RefCountUnderflow { key, handle } => write!(
                f,
                "ignoring attempt to decrement ref count below zero (key {}, handle {})",
                key, handle
            ),
            PoolWarning::HandleOutOfRange { handle, len } => {
                write!(f, "handle {} out of range (pool holds {} slots)", handle, len)
            }
        }
    }
}

/// Where the pool reports warnings. Injected at construction.
pub trait DiagnosticSink {
    fn warn(&mut self, warning: PoolWarning);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    #[inline]
    fn warn(&mut self, warning: PoolWarning) {
        (**self).warn(warning);
    }
}

/// Forwards to the `log` facade under the `vertpool` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, warning: PoolWarning) {
        log::warn!(target: "vertpool", "{}", warning);
    }
}

/// Keeps every warning in order of arrival.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub warnings: Vec<PoolWarning>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn take(&mut self) -> Vec<PoolWarning> {
        std::mem::take(&mut self.warnings)
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&mut self, warning: PoolWarning) {
        self.warnings.push(warning);
    }
}

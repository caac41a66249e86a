use std::sync::atomic::{AtomicU64, Ordering};

/// Latest-request-wins tracking for callers that may issue a new request
/// before the previous one completes.
///
/// In-flight requests are never cancelled; their results are dropped on
/// arrival if a newer request has started since.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationToken(u64);

impl RequestGeneration {
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
        }
    }

    /// Starts a new request, superseding every earlier token.
    pub fn begin(&self) -> GenerationToken {
        GenerationToken(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.current.load(Ordering::Acquire) == token.0
    }

    /// Hands `value` back only if `token` is still the latest request.
    pub fn accept<T>(&self, token: GenerationToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            tracing::debug!(generation = token.0, "Dropping stale result");
            None
        }
    }
}

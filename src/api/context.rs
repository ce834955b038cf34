use std::time::Duration;

/// Per-call request context handed to every remote operation.
///
/// A call is cancelled by dropping its future. An optional timeout bounds
/// the call on top of the client's transport timeout.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    timeout: Option<Duration>,
}

impl RequestContext {
    /// Context without any deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Application error taxonomy. Every async boundary catches these;
/// none of them are fatal to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Market data request failed or returned malformed rows.
    FeedUnavailable(String),
    /// Coordinate translation attempted before the chart published its axes.
    AxisUnavailable,
    /// Sync endpoint answered with a non-2xx status.
    SyncRejected(u16),
    /// Sync endpoint unreachable (transport failure).
    SyncUnavailable(String),
    /// Update/delete referenced an unknown trendline id. Treated as a no-op.
    NotFound(u64),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::FeedUnavailable(msg) => write!(f, "Feed unavailable: {}", msg),
            ChartError::AxisUnavailable => write!(f, "Chart axes not initialized yet"),
            ChartError::SyncRejected(status) => write!(f, "Sync rejected with HTTP {}", status),
            ChartError::SyncUnavailable(msg) => write!(f, "Sync endpoint unreachable: {}", msg),
            ChartError::NotFound(id) => write!(f, "No trendline with id {}", id),
        }
    }
}

impl std::error::Error for ChartError {}

pub type ChartResult<T> = Result<T, ChartError>;

/// Coarse classification of a failed fetch.
///
/// The dashboard never retries, so the classification only decides how a
/// failure is logged and which message the empty state shows.
///
/// | Kind | Raised when |
/// |------|-------------|
/// | `Network` | The request never produced a response (DNS, refused, timeout) |
/// | `Http` | The backend answered with a non-2xx status |
/// | `Parse` | The body was not the JSON shape the endpoint promises |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// Transport-level failure, including the bounded request timeout.
    Network,

    /// Non-success HTTP status.
    Http,

    /// Malformed or unexpected JSON.
    Parse,
}

impl FailureKind {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Http => "http",
            FailureKind::Parse => "parse",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use log::info;

/// Version this console was built against. The running backend must report
/// exactly this string or the shell blocks behind the version gate.
pub const EXPECTED_BACKEND_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of asking the host for the backend's version.
#[derive(Clone, PartialEq)]
pub enum BackendProbe {
    /// No answer yet.
    Pending,
    /// The host answered but could not name a version.
    Unreachable,
    /// Version string exactly as reported.
    Reported(String),
}

impl BackendProbe {
    pub fn from_invoke(reported: Option<String>) -> Self {
        match reported {
            Some(v) => {
                info!("backend reported version {}", v);
                BackendProbe::Reported(v)
            }
            None => {
                info!("backend version unavailable");
                BackendProbe::Unreachable
            }
        }
    }

    /// True once the probe has an answer and that answer is not `expected`.
    /// The comparison is exact string equality; an unreachable backend counts
    /// as a mismatch. A pending probe never blocks.
    pub fn mismatched(&self, expected: &str) -> bool {
        match self {
            BackendProbe::Pending => false,
            BackendProbe::Unreachable => true,
            BackendProbe::Reported(v) => v != expected,
        }
    }

    /// Reported version for display, absent while pending or unreachable.
    pub fn reported(&self) -> Option<String> {
        match self {
            BackendProbe::Reported(v) => Some(v.clone()),
            _ => None,
        }
    }
}

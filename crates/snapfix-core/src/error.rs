use thiserror::Error;

/// Errors from platform probes.
///
/// All of these are soft failures: an adjustment or reveal attempt that hits
/// one simply gives up until the next triggering event. They must never
/// propagate into the host's move/resize handling.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The system taskbar window could not be located. The caller treats
    /// this as "no reveal possible", not as a fault.
    #[error("taskbar window not found")]
    TaskbarNotFound,

    /// Monitor bounds or work area could not be queried.
    #[error("monitor query failed: {0}")]
    Monitor(String),

    /// Window geometry could not be read.
    #[error("window query failed: {0}")]
    Window(String),
}

pub type ProbeResult<T> = Result<T, ProbeError>;

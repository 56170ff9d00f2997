use thiserror::Error;

/// Errors from configuration and the session driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An environment variable was set but could not be used.
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    /// The driver task is gone.
    #[error("session driver has shut down")]
    DriverClosed,
}

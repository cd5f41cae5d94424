use thiserror::Error;

/// Common error type for risk matrix configuration and lookup operations.
///
/// All errors are raised synchronously at the point of the invalid call;
/// nothing is retried or recovered internally. Callers are expected to
/// validate configuration once at startup and treat lookup failures as
/// user-input errors.
///
/// # Examples
/// ```
/// use riskmatrix_structures::RiskMatrixError;
///
/// fn validate_size(size: u32) -> Result<(), RiskMatrixError> {
///     if size == 0 {
///         return Err(RiskMatrixError::Configuration("size must be > 0".into()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_size(0).is_err());
/// assert!(validate_size(5).is_ok());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskMatrixError {
    /// Invalid axis or category setup (duplicate names or codes, invalid
    /// sizes, mismatched point-to-axis tuples, conflicting re-mapping)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A label could not be resolved against the axis configuration
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Coordinates built against different axis configurations
    #[error("Incompatible coordinates: {0}")]
    IncompatibleCoordinates(String),
}

/// Result type for risk matrix operations
pub type MatrixResult<T> = Result<T, RiskMatrixError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub(crate) fn finite(name: &str, v: f64) -> Result<f64, BuildError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BuildError::InvalidParameter(format!("{name} must be finite")))
    }
}

pub(crate) fn count(name: &str, v: u64) -> Result<usize, BuildError> {
    usize::try_from(v)
        .map_err(|_| BuildError::InvalidParameter(format!("{name} too large for usize")))
}

//! Sensor construction and parsing errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("sensor threshold must be positive")]
    ZeroThreshold,

    #[error("sensor has no recorded data values")]
    EmptyData,

    #[error("unknown sensor kind {0:?}")]
    UnknownKind(String),
}

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid radius: radius={radius}, inner_radius={inner_radius}")]
    InvalidRadius { radius: f64, inner_radius: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid relative ring sizes: {0}")]
    InvalidRingSizes(String),
}

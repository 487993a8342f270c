use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid latitude: {0} (expected finite value in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (expected finite value in [-180, 180])")]
    InvalidLongitude(f64),

    #[error("Invalid speed: {0} (expected finite value >= 0)")]
    InvalidSpeed(f64),
}

pub type DomainResult<T> = Result<T, DomainError>;

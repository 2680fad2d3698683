use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid distance: {0}")]
    InvalidDistance(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidArgument("Invalid --km value: abc".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Invalid --km value: abc");

        let err = AppError::InvalidDistance("Distance cannot be negative".to_string());
        assert_eq!(err.to_string(), "Invalid distance: Distance cannot be negative");
    }
}

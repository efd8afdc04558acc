//! Error types for the grid path studio client.

/// Inputs rejected locally before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Map dimensions outside the accepted range
    #[error("Invalid map size {width}x{height}: width and height must be between 1 and 200")]
    InvalidDimensions { width: i64, height: i64 },

    /// Start pick landed on an obstacle
    #[error("The start cannot be placed on an obstacle ({x}, {y})")]
    StartOnObstacle { x: u32, y: u32 },

    /// Goal pick landed on an obstacle
    #[error("The goal cannot be placed on an obstacle ({x}, {y})")]
    GoalOnObstacle { x: u32, y: u32 },

    /// Path requested before both endpoints were set
    #[error("Set both a start and a goal before searching for a path")]
    MissingEndpoints,
}

/// Failures talking to the map or path service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a response (network, CORS, abort, timeout)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No browser window to issue requests from
    #[error("Browser fetch API unavailable")]
    Unavailable,
}

/// Grid lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::InvalidDimensions { width: 0, height: 300 };
        assert_eq!(
            err.to_string(),
            "Invalid map size 0x300: width and height must be between 1 and 200"
        );
        assert_eq!(
            ValidationError::StartOnObstacle { x: 2, y: 3 }.to_string(),
            "The start cannot be placed on an obstacle (2, 3)"
        );
    }

    #[test]
    fn test_status_error_display() {
        let err = ServiceError::Status {
            status: 400,
            body: "bad".into(),
        };
        assert_eq!(err.to_string(), "Service returned HTTP 400: bad");
    }
}

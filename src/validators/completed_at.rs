use chrono::{DateTime, Utc};

use super::ValidationError;

/// Rejects a completion time that lies in the future.
pub fn validate_completed_at_not_future(
    completed_at: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    validate_completed_at_not_future_at(completed_at, Utc::now())
}

/// Same as [`validate_completed_at_not_future`], against an explicit clock.
pub fn validate_completed_at_not_future_at(
    completed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    match completed_at {
        Some(at) if at > now => Err(ValidationError::CompletedInFuture),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_absent_completion() {
        assert!(validate_completed_at_not_future(None).is_ok());
    }

    #[test]
    fn test_past_and_present_completion() {
        let now = Utc::now();
        assert!(validate_completed_at_not_future_at(Some(now), now).is_ok());
        assert!(validate_completed_at_not_future_at(Some(now - Duration::days(3)), now).is_ok());
    }

    #[test]
    fn test_future_completion() {
        let now = Utc::now();
        assert_eq!(
            validate_completed_at_not_future_at(Some(now + Duration::seconds(1)), now).unwrap_err(),
            ValidationError::CompletedInFuture
        );
        assert_eq!(
            validate_completed_at_not_future(Some(Utc::now() + Duration::hours(1))).unwrap_err(),
            ValidationError::CompletedInFuture
        );
    }
}

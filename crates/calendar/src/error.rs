//! Error types for the seisaudio-calendar crate.

/// Error type for all fallible operations in the seisaudio-calendar crate.
///
/// Covers malformed timestamp text and the preconditions of span
/// segmentation (ordered intervals and a usable chunk ceiling).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a timestamp does not match `YYYY-MM-DDTHH:MM:SS[.fraction]`.
    #[error("malformed timestamp: {text:?}")]
    MalformedTimestamp {
        /// The text that failed to parse.
        text: String,
    },

    /// Returned when an interval's start lies after its end.
    #[error("interval start {start} is after end {end}")]
    ReversedInterval {
        /// Formatted start of the rejected interval.
        start: String,
        /// Formatted end of the rejected interval.
        end: String,
    },

    /// Returned when the segmentation ceiling is not finite or shorter than
    /// the longest calendar month.
    #[error("invalid chunk ceiling: {seconds} s (must be finite and at least 31 days)")]
    InvalidCeiling {
        /// The rejected ceiling in seconds.
        seconds: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_malformed_timestamp() {
        let err = CalendarError::MalformedTimestamp {
            text: "bad-input".into(),
        };
        assert_eq!(err.to_string(), "malformed timestamp: \"bad-input\"");
    }

    #[test]
    fn error_reversed_interval() {
        let err = CalendarError::ReversedInterval {
            start: "2014-02-01T00:00:00".into(),
            end: "2014-01-01T00:00:00".into(),
        };
        assert_eq!(
            err.to_string(),
            "interval start 2014-02-01T00:00:00 is after end 2014-01-01T00:00:00"
        );
    }

    #[test]
    fn error_invalid_ceiling() {
        let err = CalendarError::InvalidCeiling { seconds: -1.0 };
        assert_eq!(
            err.to_string(),
            "invalid chunk ceiling: -1 s (must be finite and at least 31 days)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

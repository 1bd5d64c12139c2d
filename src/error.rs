use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RaceError {
    #[error("'{value}' is not a number")]
    InvalidNumber { value: String },

    #[error("{value} must be a finite number greater than 0")]
    NotPositive { value: f64 },

    #[error("Invalid config value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
}

/// Parses a command-line quantity that must be finite and greater than zero.
pub fn parse_positive(input: &str) -> Result<f64, RaceError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| RaceError::InvalidNumber {
            value: input.to_string(),
        })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(RaceError::NotPositive { value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_accepts_decimals() {
        assert_eq!(parse_positive("120"), Ok(120.0));
        assert_eq!(parse_positive(" 0.5 "), Ok(0.5));
    }

    #[test]
    fn test_parse_positive_rejects_zero_and_negative() {
        assert_eq!(parse_positive("0"), Err(RaceError::NotPositive { value: 0.0 }));
        assert!(parse_positive("-3").is_err());
        assert!(parse_positive("inf").is_err());
        assert!(parse_positive("NaN").is_err());
    }

    #[test]
    fn test_parse_positive_rejects_garbage() {
        let err = parse_positive("fast").unwrap_err();
        assert_eq!(err.to_string(), "'fast' is not a number");
    }
}

//! Event format constants and validation helpers.
//!
//! Defines the fixed set of event format categories accepted by the
//! submission form, used by both the DB and API layers.

/// Conference-style talk or panel.
pub const FORMAT_CONFERENCE: &str = "conference";

/// Informal community meetup.
pub const FORMAT_MEETUP: &str = "meetup";

/// Hands-on workshop.
pub const FORMAT_WORKSHOP: &str = "workshop";

/// Competitive hackathon.
pub const FORMAT_HACKATHON: &str = "hackathon";

/// Networking / social gathering.
pub const FORMAT_NETWORKING: &str = "networking";

/// Anything that does not fit the categories above.
pub const FORMAT_OTHER: &str = "other";

/// All valid format values.
pub const VALID_FORMATS: &[&str] = &[
    FORMAT_CONFERENCE,
    FORMAT_MEETUP,
    FORMAT_WORKSHOP,
    FORMAT_HACKATHON,
    FORMAT_NETWORKING,
    FORMAT_OTHER,
];

/// Validate that a format string is one of the accepted values.
pub fn validate_format(format: &str) -> Result<(), String> {
    if VALID_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(format!(
            "Invalid format '{format}'. Must be one of: {}",
            VALID_FORMATS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_listed_formats_accepted() {
        for format in VALID_FORMATS {
            assert!(validate_format(format).is_ok());
        }
    }

    #[test]
    fn unknown_format_rejected() {
        let result = validate_format("webinar");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid format"));
    }

    #[test]
    fn empty_format_rejected() {
        assert!(validate_format("").is_err());
    }
}

//! Validation errors raised by the calculator.
//!
//! Every rejected input (room geometry, counts, coats, colors, room types)
//! is reported through [`ValidationError`]. Physically odd but well-formed
//! inputs, such as more door area than wall area, are not errors.

use thiserror::Error;

/// Input rejected by the calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required room dimension was not supplied.
    #[error("Missing room dimension: {field}")]
    MissingDimension {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A room dimension was zero, negative, or not finite.
    #[error("Room dimension '{field}' must be a positive number of feet, got {value}")]
    NonPositiveDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The value that was rejected.
        value: f64,
    },

    /// A numeric field could not be parsed.
    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw input.
        value: String,
    },

    /// A door or window count was not a non-negative whole number.
    #[error("Field '{field}' must be a non-negative whole number, got '{value}'")]
    InvalidCount {
        /// Name of the offending field.
        field: &'static str,
        /// The raw input.
        value: String,
    },

    /// The number of coats was outside the supported range.
    #[error("Coats must be between 1 and {max}, got {value}")]
    InvalidCoats {
        /// The rejected coat count.
        value: u32,
        /// Largest accepted coat count.
        max: u32,
    },

    /// A color string was not six hexadecimal digits.
    #[error("Invalid hex color '{0}'. Expected 6 hex digits (#RRGGBB)")]
    InvalidColor(String),

    /// A computed figure fell outside the range the estimator can represent.
    #[error("Room is too large to estimate: {field} exceeds the supported range")]
    EstimateOutOfRange {
        /// Name of the figure that overflowed (e.g., "wall_area").
        field: &'static str,
    },

    /// The room type discriminator was not recognised.
    #[error("Unknown room type '{0}'. Expected one of: livingRoom, kitchen, bedroom, bathroom")]
    UnknownRoomType(String),
}

impl ValidationError {
    /// Name of the input field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingDimension { field }
            | Self::NonPositiveDimension { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidCount { field, .. }
            | Self::EstimateOutOfRange { field } => field,
            Self::InvalidCoats { .. } => "coats",
            Self::InvalidColor(_) => "color",
            Self::UnknownRoomType(_) => "room_type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::MissingDimension { field: "height" };
        assert_eq!(err.to_string(), "Missing room dimension: height");
        assert_eq!(err.field(), "height");

        let err = ValidationError::NonPositiveDimension {
            field: "length",
            value: -2.0,
        };
        assert!(err.to_string().contains("length"));
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_field_for_non_geometry_errors() {
        assert_eq!(ValidationError::InvalidColor("zz".into()).field(), "color");
        assert_eq!(
            ValidationError::InvalidCoats { value: 5, max: 3 }.field(),
            "coats"
        );
        assert_eq!(
            ValidationError::UnknownRoomType("garage".into()).field(),
            "room_type"
        );

        let err = ValidationError::EstimateOutOfRange {
            field: "estimated_cost",
        };
        assert_eq!(err.field(), "estimated_cost");
        assert!(err.to_string().contains("too large"));
    }
}

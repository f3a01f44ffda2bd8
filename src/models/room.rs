//! Room geometry and room type catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_COATS;
use crate::error::ValidationError;

/// Kind of room being painted.
///
/// Each room type has its own coverage and price in the pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomType {
    /// Living room
    #[default]
    LivingRoom,
    /// Kitchen
    Kitchen,
    /// Bedroom
    Bedroom,
    /// Bathroom (premium, moisture-resistant paint)
    Bathroom,
}

impl RoomType {
    /// All room types in catalog order.
    pub const ALL: [Self; 4] = [Self::LivingRoom, Self::Kitchen, Self::Bedroom, Self::Bathroom];

    /// Wire identifier (e.g., "livingRoom").
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::LivingRoom => "livingRoom",
            Self::Kitchen => "kitchen",
            Self::Bedroom => "bedroom",
            Self::Bathroom => "bathroom",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Kitchen => "Kitchen",
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
        }
    }

    /// Short description shown next to the room preview.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::LivingRoom => "Perfect for relaxation and entertainment",
            Self::Kitchen => "Bright and clean cooking environment",
            Self::Bedroom => "Peaceful and restful sleeping space",
            Self::Bathroom => "Fresh and clean personal space",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    /// Accepts the wire id as well as kebab, snake and spaced spellings,
    /// case-insensitively ("livingRoom", "living-room", "Living Room").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "livingroom" => Ok(Self::LivingRoom),
            "kitchen" => Ok(Self::Kitchen),
            "bedroom" => Ok(Self::Bedroom),
            "bathroom" => Ok(Self::Bathroom),
            _ => Err(ValidationError::UnknownRoomType(s.trim().to_string())),
        }
    }
}

/// Dimensions and openings of a room to paint.
///
/// Dimensions are in feet. Only the four walls are painted; ceiling and
/// floor are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Room length in feet
    pub length_ft: f64,
    /// Room width in feet
    pub width_ft: f64,
    /// Wall height in feet
    pub height_ft: f64,
    /// Number of standard doors
    pub door_count: u32,
    /// Number of standard windows
    pub window_count: u32,
    /// Number of coats (1-3)
    pub coats: u32,
}

impl RoomSpec {
    /// Default number of doors in a new room form.
    pub const DEFAULT_DOORS: u32 = 1;
    /// Default number of windows in a new room form.
    pub const DEFAULT_WINDOWS: u32 = 2;
    /// Recommended number of coats.
    pub const DEFAULT_COATS: u32 = 2;

    /// Creates a validated room specification.
    ///
    /// # Examples
    ///
    /// ```
    /// use paintcalc::models::RoomSpec;
    ///
    /// let room = RoomSpec::new(10.0, 10.0, 10.0, 1, 2, 2).unwrap();
    /// assert_eq!(room.coats, 2);
    ///
    /// assert!(RoomSpec::new(0.0, 10.0, 10.0, 1, 2, 2).is_err());
    /// ```
    pub fn new(
        length_ft: f64,
        width_ft: f64,
        height_ft: f64,
        door_count: u32,
        window_count: u32,
        coats: u32,
    ) -> Result<Self, ValidationError> {
        let spec = Self {
            length_ft,
            width_ft,
            height_ft,
            door_count,
            window_count,
            coats,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Checks that every dimension is a positive finite number and the
    /// coat count is in range.
    ///
    /// Door and window counts are not compared against wall area.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_dimension("length", self.length_ft)?;
        check_dimension("width", self.width_ft)?;
        check_dimension("height", self.height_ft)?;

        if self.coats == 0 || self.coats > MAX_COATS {
            return Err(ValidationError::InvalidCoats {
                value: self.coats,
                max: MAX_COATS,
            });
        }

        Ok(())
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveDimension { field, value })
    }
}

/// A number that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Already numeric
    Number(f64),
    /// Text to be coerced ("12", " 12.5 ")
    Text(String),
}

impl NumericInput {
    fn to_f64(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        match self {
            Self::Number(n) => Ok(Some(*n)),
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ValidationError::InvalidNumber {
                    field,
                    value: s.clone(),
                }),
        }
    }

    #[allow(clippy::cast_sign_loss, clippy::float_cmp)]
    fn to_count(&self, field: &'static str) -> Result<Option<u32>, ValidationError> {
        let invalid = || ValidationError::InvalidCount {
            field,
            value: self.to_string(),
        };

        let value = match self {
            Self::Text(s) if s.trim().is_empty() => return Ok(None),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
            Self::Number(n) => *n,
        };

        // Text counts get the same whole-number check as JSON numbers
        if value.is_finite()
            && value >= 0.0
            && value.fract() == 0.0
            && value <= f64::from(u32::MAX)
        {
            Ok(Some(value as u32))
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Unvalidated room form as submitted by a user.
///
/// Every field is optional and may be numeric text. Counts fall back to
/// the form defaults (1 door, 2 windows, 2 coats); dimensions have no
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSpecInput {
    /// Room length in feet
    #[serde(default)]
    pub length: Option<NumericInput>,
    /// Room width in feet
    #[serde(default)]
    pub width: Option<NumericInput>,
    /// Wall height in feet
    #[serde(default)]
    pub height: Option<NumericInput>,
    /// Number of doors
    #[serde(default)]
    pub doors: Option<NumericInput>,
    /// Number of windows
    #[serde(default)]
    pub windows: Option<NumericInput>,
    /// Number of coats
    #[serde(default)]
    pub coats: Option<NumericInput>,
}

impl RoomSpecInput {
    /// Coerces the form into a validated [`RoomSpec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use paintcalc::models::RoomSpecInput;
    ///
    /// let input = RoomSpecInput {
    ///     length: Some("12".into()),
    ///     width: Some(10.0.into()),
    ///     height: Some(" 9.5 ".into()),
    ///     ..RoomSpecInput::default()
    /// };
    /// let room = input.parse().unwrap();
    /// assert_eq!(room.height_ft, 9.5);
    /// assert_eq!(room.door_count, 1);
    /// ```
    pub fn parse(&self) -> Result<RoomSpec, ValidationError> {
        let length = dimension("length", self.length.as_ref())?;
        let width = dimension("width", self.width.as_ref())?;
        let height = dimension("height", self.height.as_ref())?;

        let doors = count("doors", self.doors.as_ref())?.unwrap_or(RoomSpec::DEFAULT_DOORS);
        let windows =
            count("windows", self.windows.as_ref())?.unwrap_or(RoomSpec::DEFAULT_WINDOWS);
        let coats = count("coats", self.coats.as_ref())?.unwrap_or(RoomSpec::DEFAULT_COATS);

        RoomSpec::new(length, width, height, doors, windows, coats)
    }
}

fn dimension(field: &'static str, input: Option<&NumericInput>) -> Result<f64, ValidationError> {
    input
        .map(|value| value.to_f64(field))
        .transpose()?
        .flatten()
        .ok_or(ValidationError::MissingDimension { field })
}

fn count(field: &'static str, input: Option<&NumericInput>) -> Result<Option<u32>, ValidationError> {
    Ok(input.map(|value| value.to_count(field)).transpose()?.flatten())
}

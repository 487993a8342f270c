use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A single position report from a client.
///
/// The only ways to obtain one are [`LocationEvent::new`] and
/// deserialization, both of which enforce the coordinate and speed bounds.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Geolocation sample relayed between clients. Latitude and longitude in degrees, speed in meters per second.",
    example = json!({"latitude": 12.97, "longitude": 77.59, "speed": 1.4})
))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocationEvent")]
pub struct LocationEvent {
    #[cfg_attr(feature = "docs", schema(example = 12.97))]
    latitude: f64,
    #[cfg_attr(feature = "docs", schema(example = 77.59))]
    longitude: f64,
    #[cfg_attr(feature = "docs", schema(example = 1.4, minimum = 0))]
    speed: f64,
}

#[derive(Deserialize)]
struct RawLocationEvent {
    latitude: f64,
    longitude: f64,
    speed: f64,
}

impl TryFrom<RawLocationEvent> for LocationEvent {
    type Error = DomainError;

    fn try_from(raw: RawLocationEvent) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude, raw.speed)
    }
}

impl LocationEvent {
    pub fn new(latitude: f64, longitude: f64, speed: f64) -> DomainResult<Self> {
        if !latitude.is_finite() || latitude.abs() > MAX_LATITUDE {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || longitude.abs() > MAX_LONGITUDE {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(DomainError::InvalidSpeed(speed));
        }

        Ok(Self {
            latitude,
            longitude,
            speed,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl fmt::Display for LocationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.5}, {:.5}) @ {:.2} m/s",
            self.latitude, self.longitude, self.speed
        )
    }
}

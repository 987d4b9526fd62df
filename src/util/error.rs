/// Error type for geohash-rs operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeohashError {
    /// The geohash contains a character outside the 32-symbol alphabet.
    InvalidSymbol(char),
    /// The latitude is outside [-90, 90].
    LatitudeOutOfRange(f64),
    /// The longitude is outside [-180, 180].
    LongitudeOutOfRange(f64),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidSymbol(c) => write!(f, "Invalid geohash symbol: {:?}", c),
            GeohashError::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude out of range [-90, 90]: {}", lat)
            }
            GeohashError::LongitudeOutOfRange(lng) => {
                write!(f, "Longitude out of range [-180, 180]: {}", lng)
            }
        }
    }
}

impl std::error::Error for GeohashError {}

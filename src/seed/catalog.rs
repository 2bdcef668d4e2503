use crate::models::SlotSize;

use super::SeedError;

/// Dimensions and typical contents offered for one slot size.
#[derive(Debug, Clone)]
pub struct SizeSpec {
    pub size: SlotSize,
    pub dimensions: Vec<String>,
    pub what_can_fit: Vec<String>,
}

/// The set of slot sizes the generator draws from.
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    pub sizes: Vec<SizeSpec>,
}

impl SlotCatalog {
    pub fn standard() -> Self {
        Self {
            sizes: vec![
                SizeSpec::new(
                    SlotSize::Small,
                    &["5'x5'", "5'x10'", "5'x15'"],
                    &[
                        "Small items like bags, suitcases, and boxes",
                        "Contents of a small one-bedroom apartment",
                        "Seasonal decorations",
                        "Sports equipment",
                    ],
                ),
                SizeSpec::new(
                    SlotSize::Medium,
                    &["10'x10'", "10'x15'", "10'x20'"],
                    &[
                        "Furniture from a one or two-bedroom apartment",
                        "Appliances",
                        "Large boxes",
                        "Seasonal items and sports equipment",
                    ],
                ),
                SizeSpec::new(
                    SlotSize::Large,
                    &["15'x15'", "20'x20'", "20'x25'"],
                    &[
                        "Contents of a three to four-bedroom house",
                        "Major appliances",
                        "Large furniture items",
                        "Large boxes",
                        "Commercial inventory",
                    ],
                ),
            ],
        }
    }
}

impl SizeSpec {
    pub fn new(size: SlotSize, dimensions: &[&str], what_can_fit: &[&str]) -> Self {
        Self {
            size,
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            what_can_fit: what_can_fit.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Parse a `W'xL'` dimension into `(width, length)` in feet.
///
/// Quote characters are ignored; exactly one `x` separator and two integer
/// sides are required.
pub fn parse_dimension(dimension: &str) -> Result<(i32, i32), SeedError> {
    let invalid = || SeedError::InvalidDimension(dimension.to_string());
    let cleaned = dimension.replace('\'', "");
    let mut parts = cleaned.split('x');
    let (Some(width), Some(length), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let width = width.trim().parse::<i32>().map_err(|_| invalid())?;
    let length = length.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok((width, length))
}

/// Square footage of a dimension string.
pub fn square_feet(dimension: &str) -> Result<i32, SeedError> {
    let (width, length) = parse_dimension(dimension)?;
    width.checked_mul(length).ok_or_else(|| SeedError::InvalidDimension(dimension.to_string()))
}

//! Geometry string parsing
//!
//! Areas are configured with X11-style geometry strings:
//! `WIDTHxHEIGHT`, optionally followed by `{+|-}X{+|-}Y`. A `-` sign is
//! read as a negative coordinate, which is how monitors placed left of or
//! above the primary one are addressed.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::core::Area;
use crate::domain::union::UnionAxis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid geometry '{input}': {reason}")]
    InvalidGeometry { input: String, reason: &'static str },
    #[error("Unknown union axis '{0}' (expected 'horizontal' or 'vertical')")]
    UnknownAxis(String),
    #[error("Monitor layout has no monitors")]
    EmptyLayout,
    #[error("Monitor {index} has an empty area {area}")]
    EmptyMonitor { index: usize, area: Area },
    #[error("Monitors {first} and {second} overlap")]
    OverlappingMonitors { first: usize, second: usize },
}

/// Parses a geometry string such as `1920x1080+0+0` into an area
pub fn parse_geometry(input: &str) -> Result<Area, ConfigError> {
    let invalid = |reason| ConfigError::InvalidGeometry {
        input: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    let offsets_start = trimmed.find(['+', '-']).unwrap_or(trimmed.len());
    let (size, offsets) = trimmed.split_at(offsets_start);

    let (width, height) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid("expected WIDTHxHEIGHT"))?;
    let width = parse_extent(width).ok_or_else(|| invalid("width must be a positive integer"))?;
    let height =
        parse_extent(height).ok_or_else(|| invalid("height must be a positive integer"))?;

    if offsets.is_empty() {
        return Ok(Area::new(0, 0, width, height));
    }

    let split = offsets[1..]
        .find(['+', '-'])
        .map(|idx| idx + 1)
        .ok_or_else(|| invalid("expected both X and Y offsets"))?;
    let (x, y) = offsets.split_at(split);
    let x: i32 = x.parse().map_err(|_| invalid("X offset is not an integer"))?;
    let y: i32 = y.parse().map_err(|_| invalid("Y offset is not an integer"))?;
    if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
        return Err(invalid("area exceeds the coordinate range"));
    }

    Ok(Area::new(x, y, width, height))
}

fn parse_extent(value: &str) -> Option<i32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|&extent| extent > 0)
}

impl FromStr for Area {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_geometry(s)
    }
}

impl FromStr for UnionAxis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(UnionAxis::Horizontal),
            "vertical" | "v" => Ok(UnionAxis::Vertical),
            _ => Err(ConfigError::UnknownAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_geometry() {
        assert_eq!(parse_geometry("1920x1080+0+0"), Ok(Area::new(0, 0, 1920, 1080)));
        assert_eq!(
            "1280x1024+1920+56".parse::<Area>(),
            Ok(Area::new(1920, 56, 1280, 1024))
        );
    }

    #[test]
    fn parses_negative_offsets() {
        assert_eq!(parse_geometry("800x600-800+0"), Ok(Area::new(-800, 0, 800, 600)));
        assert_eq!(parse_geometry("800x600+10-600"), Ok(Area::new(10, -600, 800, 600)));
    }

    #[test]
    fn missing_offsets_default_to_origin() {
        assert_eq!(parse_geometry(" 640X480 "), Ok(Area::new(0, 0, 640, 480)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in [
            "",
            "1920",
            "x1080",
            "0x1080+0+0",
            "1920x1080+5",
            "1920x1080+a+0",
            "1920x1080+1+2+3",
            "1920x1080++1+2",
        ] {
            assert!(
                matches!(parse_geometry(input), Err(ConfigError::InvalidGeometry { .. })),
                "accepted '{input}'"
            );
        }
    }

    #[test]
    fn rejects_areas_past_the_coordinate_range() {
        for input in ["10x10+2147483647+0", "10x10+0+2147483638", "2147483647x1+1+0"] {
            assert_eq!(
                parse_geometry(input),
                Err(ConfigError::InvalidGeometry {
                    input: input.to_string(),
                    reason: "area exceeds the coordinate range",
                })
            );
        }
    }

    #[test]
    fn accepts_areas_touching_the_coordinate_limits() {
        let area = parse_geometry("10x10+2147483637-2147483648").unwrap();
        assert_eq!(area, Area::new(i32::MAX - 10, i32::MIN, 10, 10));
        assert_eq!(area.right(), i32::MAX - 1);
    }

    #[test]
    fn parses_axis_names() {
        assert_eq!("Horizontal".parse(), Ok(UnionAxis::Horizontal));
        assert_eq!("v".parse(), Ok(UnionAxis::Vertical));
        assert_eq!(
            "diagonal".parse::<UnionAxis>(),
            Err(ConfigError::UnknownAxis("diagonal".to_string()))
        );
    }
}

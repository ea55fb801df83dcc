use std::str::FromStr;

use super::SwipeBands;
use crate::AdaptiveError;

/// Which side of the fold the side panel is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Position {
    #[default]
    Leading,
    Trailing,
}

impl FromStr for Position {
    type Err = AdaptiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leading" | "left" | "start" => Ok(Position::Leading),
            "trailing" | "right" | "end" => Ok(Position::Trailing),
            _ => Err(AdaptiveError::InvalidPosition(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = AdaptiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        match value {
            Position::Leading => "leading".to_owned(),
            Position::Trailing => "trailing".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FoldSettings {
    pub position: Position,
    pub fold_threshold: i32,
    pub side_width: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub swipe: SwipeBands,
}

impl FoldSettings {
    pub const DEFAULT_SIDE_WIDTH: i32 = 200;
    pub const DEFAULT_FOLD_THRESHOLD: i32 = 400;

    pub fn validate(&self) -> Result<(), AdaptiveError> {
        validate_widths(self.fold_threshold, self.side_width)
    }
}

impl Default for FoldSettings {
    fn default() -> Self {
        Self {
            position: Position::default(),
            fold_threshold: Self::DEFAULT_FOLD_THRESHOLD,
            side_width: Self::DEFAULT_SIDE_WIDTH,
            swipe: SwipeBands::default(),
        }
    }
}

pub(crate) fn validate_widths(threshold: i32, side_width: i32) -> Result<(), AdaptiveError> {
    if threshold <= 0 {
        return Err(AdaptiveError::InvalidThreshold(threshold));
    }
    if side_width >= threshold {
        return Err(AdaptiveError::SideWidthTooLarge {
            side_width,
            threshold,
        });
    }
    Ok(())
}

//! The fixed accent color palette.

use serde::{Deserialize, Serialize};

use crate::math::Rgb;

/// The six selectable accent colors, as a tagged enum rather than an index
/// into parallel name/value arrays.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Palette {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Palette {
    pub const ALL: [Palette; 6] = [
        Palette::Red,
        Palette::Yellow,
        Palette::Green,
        Palette::Cyan,
        Palette::Blue,
        Palette::Magenta,
    ];

    pub fn rgb(self) -> Rgb {
        match self {
            Palette::Red => Rgb::new(1.0, 0.0, 0.0),
            Palette::Yellow => Rgb::new(1.0, 1.0, 0.0),
            Palette::Green => Rgb::new(0.0, 1.0, 0.0),
            Palette::Cyan => Rgb::new(0.0, 1.0, 1.0),
            Palette::Blue => Rgb::new(0.0, 0.0, 1.0),
            Palette::Magenta => Rgb::new(1.0, 0.0, 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Red => "Red",
            Palette::Yellow => "Yellow",
            Palette::Green => "Green",
            Palette::Cyan => "Cyan",
            Palette::Blue => "Blue",
            Palette::Magenta => "Magenta",
        }
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::PathSegment;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Ten-color categorical palette used when no palette is configured.
pub const CATEGORY10: [Color; 10] = [
    Color::rgb8(0x1f, 0x77, 0xb4),
    Color::rgb8(0xff, 0x7f, 0x0e),
    Color::rgb8(0x2c, 0xa0, 0x2c),
    Color::rgb8(0xd6, 0x27, 0x28),
    Color::rgb8(0x94, 0x67, 0xbd),
    Color::rgb8(0x8c, 0x56, 0x4b),
    Color::rgb8(0xe3, 0x77, 0xc2),
    Color::rgb8(0x7f, 0x7f, 0x7f),
    Color::rgb8(0xbc, 0xbd, 0x22),
    Color::rgb8(0x17, 0xbe, 0xcf),
];

/// Ordinal key → color mapping; unseen keys take the next palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    palette: Vec<Color>,
    domain: IndexMap<PathSegment, usize>,
}

impl OrdinalColorScale {
    pub fn new(palette: Vec<Color>) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::InvalidConfiguration(
                "color palette must not be empty".to_owned(),
            ));
        }
        for color in &palette {
            color.validate()?;
        }
        Ok(Self {
            palette,
            domain: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn color_for(&mut self, key: &PathSegment) -> Color {
        let next = self.domain.len();
        let index = *self.domain.entry(key.clone()).or_insert(next);
        self.palette[index % self.palette.len()]
    }
}

impl Default for OrdinalColorScale {
    fn default() -> Self {
        Self {
            palette: CATEGORY10.to_vec(),
            domain: IndexMap::new(),
        }
    }
}

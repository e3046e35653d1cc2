//! Card attributes.
//!
//! A card varies along four independent dimensions, each with three values:
//!
//! | attribute      | range  |
//! |----------------|--------|
//! | `SymbolCount`  | 1..=3  |
//! | `Shape`        | 0..=2  |
//! | `Shading`      | 0..=2  |
//! | `Color`        | 0..=2  |
//!
//! Values are small integers. What shape 1 or color 2 looks like is up to
//! whoever draws the card; the engine only compares values.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// One of the four card dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Number of symbols printed on the card.
    SymbolCount,
    /// Symbol shape.
    Shape,
    /// Symbol fill.
    Shading,
    /// Symbol color.
    Color,
}

impl Attribute {
    /// All attributes, in deck-generation order.
    pub const ALL: [Attribute; 4] = [
        Attribute::SymbolCount,
        Attribute::Shape,
        Attribute::Shading,
        Attribute::Color,
    ];

    /// Valid values for this attribute.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u8> {
        match self {
            Attribute::SymbolCount => 1..=3,
            Attribute::Shape | Attribute::Shading | Attribute::Color => 0..=2,
        }
    }

    /// Clamp an out-of-range value to the first value of the range.
    #[must_use]
    pub fn normalize(self, value: u8) -> u8 {
        let range = self.range();
        if range.contains(&value) {
            value
        } else {
            *range.start()
        }
    }
}

/// The immutable attribute tuple of a card.
///
/// Construction never fails: out-of-range values are replaced by the
/// attribute's first valid value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Features {
    symbol_count: u8,
    shape: u8,
    shading: u8,
    color: u8,
}

impl Features {
    /// Create a normalized attribute tuple.
    ///
    /// ```
    /// use set_game::cards::Features;
    ///
    /// let f = Features::new(7, 1, 9, 2);
    /// assert_eq!(f.symbol_count(), 1);
    /// assert_eq!(f.shape(), 1);
    /// assert_eq!(f.shading(), 0);
    /// assert_eq!(f.color(), 2);
    /// ```
    #[must_use]
    pub fn new(symbol_count: u8, shape: u8, shading: u8, color: u8) -> Self {
        Self {
            symbol_count: Attribute::SymbolCount.normalize(symbol_count),
            shape: Attribute::Shape.normalize(shape),
            shading: Attribute::Shading.normalize(shading),
            color: Attribute::Color.normalize(color),
        }
    }

    #[must_use]
    pub fn symbol_count(&self) -> u8 {
        self.symbol_count
    }

    #[must_use]
    pub fn shape(&self) -> u8 {
        self.shape
    }

    #[must_use]
    pub fn shading(&self) -> u8 {
        self.shading
    }

    #[must_use]
    pub fn color(&self) -> u8 {
        self.color
    }

    /// Value of a single attribute.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::SymbolCount => self.symbol_count,
            Attribute::Shape => self.shape,
            Attribute::Shading => self.shading,
            Attribute::Color => self.color,
        }
    }
}

impl From<(u8, u8, u8, u8)> for Features {
    fn from((symbol_count, shape, shading, color): (u8, u8, u8, u8)) -> Self {
        Self::new(symbol_count, shape, shading, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(Attribute::SymbolCount.range(), 1..=3);
        assert_eq!(Attribute::Color.range(), 0..=2);
    }

    #[test]
    fn test_valid_values_kept() {
        let f = Features::new(3, 2, 1, 0);
        assert_eq!(f.value(Attribute::SymbolCount), 3);
        assert_eq!(f.value(Attribute::Shape), 2);
        assert_eq!(f.value(Attribute::Shading), 1);
        assert_eq!(f.value(Attribute::Color), 0);
    }

    #[test]
    fn test_out_of_range_normalized() {
        let f = Features::new(0, 3, 200, 5);
        assert_eq!(f, Features::new(1, 0, 0, 0));

        let f = Features::new(4, 0, 0, 0);
        assert_eq!(f.symbol_count(), 1);
    }

    #[test]
    fn test_from_tuple() {
        let f: Features = (2, 1, 0, 2).into();
        assert_eq!(f, Features::new(2, 1, 0, 2));
    }
}

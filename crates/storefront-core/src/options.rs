//! The fixed size and color catalog attached to every product.
//!
//! Every product carries the same [`VariantOptions`]; the lists are ordered
//! the way the storefront renders its dropdowns, so "the middle size" and
//! "the first color" are meaningful defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    ExtraLarge,
}

impl Size {
    pub const ALL: [Size; 5] = [
        Size::ExtraSmall,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::ExtraLarge,
    ];

    /// Short code as shown in the size dropdown (e.g. `"XL"`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Size::ExtraSmall => "XS",
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
            Size::ExtraLarge => "XL",
        }
    }

    /// Price adjustment hint rendered next to the code.
    #[must_use]
    pub fn adjustment_label(self) -> &'static str {
        match self {
            Size::ExtraSmall => "(-10%)",
            Size::Small => "(-5%)",
            Size::Medium => "(Base)",
            Size::Large => "(+10%)",
            Size::ExtraLarge => "(+20%)",
        }
    }

    /// Dropdown caption, e.g. `"XS (-10%)"`.
    #[must_use]
    pub fn option_label(self) -> String {
        format!("{} {}", self.code(), self.adjustment_label())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Size {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OptionParseError::UnknownSize(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Navy,
    Gray,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Black, Color::White, Color::Navy, Color::Gray];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Navy => "Navy",
            Color::Gray => "Gray",
        }
    }

    #[must_use]
    pub fn adjustment_label(self) -> &'static str {
        match self {
            Color::Black => "(Base)",
            Color::White => "(+5%)",
            Color::Navy => "(+10%)",
            Color::Gray => "(+8%)",
        }
    }

    #[must_use]
    pub fn option_label(self) -> String {
        format!("{} {}", self.name(), self.adjustment_label())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OptionParseError::UnknownColor(s.to_owned()))
    }
}

/// Ordered size and color lists offered for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantOptions {
    pub sizes: &'static [Size],
    pub colors: &'static [Color],
}

/// The one option catalog shared by every product in the store.
pub const STANDARD_OPTIONS: VariantOptions = VariantOptions {
    sizes: &Size::ALL,
    colors: &Color::ALL,
};

impl VariantOptions {
    /// The middle size and the first color.
    #[must_use]
    pub fn default_selection(&self) -> VariantSelection {
        VariantSelection {
            size: self
                .sizes
                .get(self.sizes.len() / 2)
                .copied()
                .unwrap_or(Size::Medium),
            color: self.colors.first().copied().unwrap_or(Color::Black),
        }
    }

    #[must_use]
    pub fn contains(&self, selection: VariantSelection) -> bool {
        self.sizes.contains(&selection.size) && self.colors.contains(&selection.color)
    }
}

impl Default for VariantOptions {
    fn default() -> Self {
        STANDARD_OPTIONS
    }
}

/// A concrete (size, color) choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantSelection {
    pub size: Size,
    pub color: Color,
}

impl VariantSelection {
    #[must_use]
    pub fn new(size: Size, color: Color) -> Self {
        Self { size, color }
    }
}

impl Default for VariantSelection {
    fn default() -> Self {
        STANDARD_OPTIONS.default_selection()
    }
}

impl fmt::Display for VariantSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.size, self.color)
    }
}

//! Configuration types.
//!
//! - `TableConfig`: what the presentation layer needs (card back asset,
//!   background colors). Opaque to the rules.
//! - `SessionConfig`: how a `Session` starts (seed, assist mode).
//!
//! Both derive serde; `TableConfig` uses the camelCase field names of the
//! JSON config file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use crate::cards::Card;

/// A `#rrggbb` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Card back palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackColor {
    Blue,
    Green,
    Red,
}

impl BackColor {
    const fn name(self) -> &'static str {
        match self {
            BackColor::Blue => "blue",
            BackColor::Green => "green",
            BackColor::Red => "red",
        }
    }
}

/// One of the shipped card back images, `cardBack_{color}{1..5}.png`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardBack {
    color: BackColor,
    variant: u8,
}

impl CardBack {
    /// Number of variants per color.
    pub const VARIANTS: u8 = 5;

    /// `None` unless `variant` is in `1..=5`.
    #[must_use]
    pub fn new(color: BackColor, variant: u8) -> Option<Self> {
        (1..=Self::VARIANTS)
            .contains(&variant)
            .then_some(Self { color, variant })
    }

    #[must_use]
    pub fn color(&self) -> BackColor {
        self.color
    }

    #[must_use]
    pub fn variant(&self) -> u8 {
        self.variant
    }

    /// Asset file name, e.g. `cardBack_blue5.png`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("cardBack_{}{}.png", self.color.name(), self.variant)
    }
}

impl Default for CardBack {
    fn default() -> Self {
        Self {
            color: BackColor::Blue,
            variant: 5,
        }
    }
}

impl FromStr for CardBack {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownCardBack(s.to_string());
        let stem = s
            .strip_prefix("cardBack_")
            .and_then(|rest| rest.strip_suffix(".png"))
            .ok_or_else(unknown)?;

        let split = stem.find(|c: char| c.is_ascii_digit()).ok_or_else(unknown)?;
        let (name, digits) = stem.split_at(split);
        let color = match name {
            "blue" => BackColor::Blue,
            "green" => BackColor::Green,
            "red" => BackColor::Red,
            _ => return Err(unknown()),
        };
        let variant: u8 = digits.parse().map_err(|_| unknown())?;
        Self::new(color, variant).ok_or_else(unknown)
    }
}

impl TryFrom<String> for CardBack {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardBack> for String {
    fn from(back: CardBack) -> Self {
        back.file_name()
    }
}

/// Two-stop radial background gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

/// Presentation configuration: card back and background colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Image used for face-down cards.
    pub card_back: CardBack,

    /// Page background behind the table.
    pub background_color: Color,

    /// Table surface gradient.
    pub canvas_gradient: Gradient,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            card_back: CardBack::default(),
            background_color: Color::rgb(0x02, 0x06, 0x17),
            canvas_gradient: Gradient {
                start: Color::rgb(0x17, 0x17, 0x17),
                end: Color::rgb(0x17, 0x17, 0x17),
            },
        }
    }
}

impl TableConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json)?;
        log::debug!("loaded table config: {config:?}");
        Ok(config)
    }

    /// Set the card back.
    pub fn with_card_back(mut self, back: CardBack) -> Self {
        self.card_back = back;
        self
    }

    /// Set the page background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the table gradient.
    pub fn with_gradient(mut self, start: Color, end: Color) -> Self {
        self.canvas_gradient = Gradient { start, end };
        self
    }

    /// Asset name for a card: its face when face-up, the configured back
    /// otherwise.
    #[must_use]
    pub fn image_name(&self, card: &Card) -> String {
        if card.face_up {
            format!("card{}{}.png", card.suit().asset_name(), card.rank())
        } else {
            self.card_back.file_name()
        }
    }
}

/// How a session starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Deal seed. `None` draws one from system entropy.
    pub seed: Option<u64>,

    /// Whether legal drop columns are computed when a drag starts.
    pub assist_mode: bool,
}

impl SessionConfig {
    /// Fix the deal seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start with assist mode on or off.
    pub fn with_assist(mut self, on: bool) -> Self {
        self.assist_mode = on;
        self
    }
}

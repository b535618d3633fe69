use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// An sRGB colour, serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`, as PDF colour operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl FromStr for Rgb {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ExportError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ExportError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// What a colour is used for on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Title,
    HeaderBg,
    HeaderText,
    TableBorder,
    PriceText,
    NormalText,
    NotesText,
    FooterText,
}

impl ColorRole {
    pub const ALL: [ColorRole; 8] = [
        ColorRole::Title,
        ColorRole::HeaderBg,
        ColorRole::HeaderText,
        ColorRole::TableBorder,
        ColorRole::PriceText,
        ColorRole::NormalText,
        ColorRole::NotesText,
        ColorRole::FooterText,
    ];
}

/// Colour theme for the quotation, one entry per [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub title: Rgb,
    /// Reserved for a header-row fill; the current layout leaves the header unfilled.
    pub header_bg: Rgb,
    pub header_text: Rgb,
    pub table_border: Rgb,
    pub price_text: Rgb,
    pub normal_text: Rgb,
    pub notes_text: Rgb,
    pub footer_text: Rgb,
}

impl Theme {
    pub fn color(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Title => self.title,
            ColorRole::HeaderBg => self.header_bg,
            ColorRole::HeaderText => self.header_text,
            ColorRole::TableBorder => self.table_border,
            ColorRole::PriceText => self.price_text,
            ColorRole::NormalText => self.normal_text,
            ColorRole::NotesText => self.notes_text,
            ColorRole::FooterText => self.footer_text,
        }
    }

    /// `(role, colour)` pairs in a stable order.
    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, Rgb)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.color(role)))
    }
}

impl Default for Theme {
    fn default() -> Self {
        let maroon = Rgb::new(0x8B, 0x00, 0x00);
        let navy = Rgb::new(0x00, 0x16, 0x67);
        Self {
            title: maroon,
            header_bg: Rgb::new(0xE6, 0xE6, 0xE6),
            header_text: navy,
            table_border: Rgb::BLACK,
            price_text: maroon,
            normal_text: navy,
            notes_text: navy,
            footer_text: navy,
        }
    }
}

/// Font sizes in points. Every string is set in Helvetica-Bold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub date: f32,
    pub title: f32,
    pub table_header: f32,
    pub body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            date: 11.0,
            title: 14.0,
            table_header: 11.0,
            body: 12.0,
        }
    }
}

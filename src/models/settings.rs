//! Presentation settings: the in-memory shape (`AppSettings`), the storage
//! shape (`SettingsRecord`) and the field enumerations used to address them.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static hex color regex")
});

/// Font choices offered by the admin screen.
pub const FONT_OPTIONS: &[(&str, &str)] = &[
    ("font-serif", "Elegant Serif"),
    ("font-sans", "Modern Sans"),
    ("font-mono", "Refined Mono"),
    ("font-['Playfair_Display']", "Playfair Display"),
    ("font-['Cormorant_Garamond']", "Cormorant Garamond"),
    ("font-['Crimson_Text']", "Crimson Text"),
    ("font-['Lora']", "Lora"),
    ("font-['Montserrat']", "Montserrat"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSize {
    #[default]
    Cover,
    Contain,
    Auto,
}

impl BackgroundSize {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BackgroundSize::Cover => "cover",
            BackgroundSize::Contain => "contain",
            BackgroundSize::Auto => "auto",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cover" => Some(BackgroundSize::Cover),
            "contain" => Some(BackgroundSize::Contain),
            "auto" => Some(BackgroundSize::Auto),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundPosition {
    #[default]
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom right")]
    BottomRight,
}

impl BackgroundPosition {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BackgroundPosition::Center => "center",
            BackgroundPosition::Top => "top",
            BackgroundPosition::Bottom => "bottom",
            BackgroundPosition::Left => "left",
            BackgroundPosition::Right => "right",
            BackgroundPosition::TopLeft => "top left",
            BackgroundPosition::TopRight => "top right",
            BackgroundPosition::BottomLeft => "bottom left",
            BackgroundPosition::BottomRight => "bottom right",
        }
    }

    /// Accepts "top left", "top-left" and "top_left".
    pub fn from_db_str(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "center" => Some(BackgroundPosition::Center),
            "top" => Some(BackgroundPosition::Top),
            "bottom" => Some(BackgroundPosition::Bottom),
            "left" => Some(BackgroundPosition::Left),
            "right" => Some(BackgroundPosition::Right),
            "top left" => Some(BackgroundPosition::TopLeft),
            "top right" => Some(BackgroundPosition::TopRight),
            "bottom left" => Some(BackgroundPosition::BottomLeft),
            "bottom right" => Some(BackgroundPosition::BottomRight),
            _ => None,
        }
    }
}

/// In-memory presentation settings. Fractional opacities are in [0, 1],
/// except `table_card_table_number_box_opacity`, which is a 0..100 percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub title: String,
    pub subtitle: String,
    pub background_image: Option<String>,
    pub background_size: BackgroundSize,
    pub background_position: BackgroundPosition,
    pub background_opacity: f64,
    pub table_card_background_image: Option<String>,
    pub table_card_background_size: BackgroundSize,
    pub table_card_background_position: BackgroundPosition,
    pub table_card_background_opacity: f64,
    pub title_font: String,
    pub subtitle_font: String,
    pub title_background_opacity: f64,
    pub subtitle_background_opacity: f64,
    pub table_card_icon_color: String,
    pub table_card_header_text: String,
    pub table_card_subtext: String,
    pub table_card_table_number_text: String,
    pub table_card_celebration_text: String,
    pub table_card_text_color: String,
    pub table_card_accent_color: String,
    pub table_card_header_text_color: String,
    pub table_card_table_number_color: String,
    pub table_card_subtext_color: String,
    pub table_card_celebration_text_color: String,
    pub table_card_celebration_box_opacity: f64,
    pub table_card_table_number_box_opacity: i64,
}

pub mod defaults {
    pub const TITLE: &str = "Find Your Seat Assignment";
    pub const SUBTITLE: &str = "Begin typing your full name in the search field above";
    pub const BACKGROUND_OPACITY: f64 = 0.3;
    pub const TABLE_CARD_BACKGROUND_OPACITY: f64 = 0.2;
    pub const TITLE_FONT: &str = "font-serif";
    pub const SUBTITLE_FONT: &str = "font-sans";
    pub const TITLE_BACKGROUND_OPACITY: f64 = 0.1;
    pub const SUBTITLE_BACKGROUND_OPACITY: f64 = 0.1;
    pub const ICON_COLOR: &str = "#64748b";
    pub const HEADER_TEXT: &str = "Your Table Assignment";
    pub const SUBTEXT: &str = "Here are your fellow guests at this table:";
    pub const TABLE_NUMBER_TEXT: &str = "Table";
    pub const CELEBRATION_TEXT: &str = "We look forward to celebrating with you";
    pub const TEXT_COLOR: &str = "#0f172a";
    pub const ACCENT_COLOR: &str = "#3b82f6";
    pub const HEADER_TEXT_COLOR: &str = "#0f172a";
    pub const TABLE_NUMBER_COLOR: &str = "#3b82f6";
    pub const SUBTEXT_COLOR: &str = "#64748b";
    pub const CELEBRATION_TEXT_COLOR: &str = "#374151";
    pub const CELEBRATION_BOX_OPACITY: f64 = 0.1;
    pub const TABLE_NUMBER_BOX_OPACITY: i64 = 100;
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_string(),
            subtitle: defaults::SUBTITLE.to_string(),
            background_image: None,
            background_size: BackgroundSize::Cover,
            background_position: BackgroundPosition::Center,
            background_opacity: defaults::BACKGROUND_OPACITY,
            table_card_background_image: None,
            table_card_background_size: BackgroundSize::Cover,
            table_card_background_position: BackgroundPosition::Center,
            table_card_background_opacity: defaults::TABLE_CARD_BACKGROUND_OPACITY,
            title_font: defaults::TITLE_FONT.to_string(),
            subtitle_font: defaults::SUBTITLE_FONT.to_string(),
            title_background_opacity: defaults::TITLE_BACKGROUND_OPACITY,
            subtitle_background_opacity: defaults::SUBTITLE_BACKGROUND_OPACITY,
            table_card_icon_color: defaults::ICON_COLOR.to_string(),
            table_card_header_text: defaults::HEADER_TEXT.to_string(),
            table_card_subtext: defaults::SUBTEXT.to_string(),
            table_card_table_number_text: defaults::TABLE_NUMBER_TEXT.to_string(),
            table_card_celebration_text: defaults::CELEBRATION_TEXT.to_string(),
            table_card_text_color: defaults::TEXT_COLOR.to_string(),
            table_card_accent_color: defaults::ACCENT_COLOR.to_string(),
            table_card_header_text_color: defaults::HEADER_TEXT_COLOR.to_string(),
            table_card_table_number_color: defaults::TABLE_NUMBER_COLOR.to_string(),
            table_card_subtext_color: defaults::SUBTEXT_COLOR.to_string(),
            table_card_celebration_text_color: defaults::CELEBRATION_TEXT_COLOR.to_string(),
            table_card_celebration_box_opacity: defaults::CELEBRATION_BOX_OPACITY,
            table_card_table_number_box_opacity: defaults::TABLE_NUMBER_BOX_OPACITY,
        }
    }
}

/// Storage row of the `app_settings` table. Every column is nullable;
/// opacities are integer percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background_image: Option<String>,
    pub background_size: Option<String>,
    pub background_position: Option<String>,
    pub background_opacity: Option<i64>,
    pub table_card_background_image: Option<String>,
    pub table_card_background_size: Option<String>,
    pub table_card_background_position: Option<String>,
    pub table_card_background_opacity: Option<i64>,
    pub title_font: Option<String>,
    pub subtitle_font: Option<String>,
    pub title_background_opacity: Option<i64>,
    pub subtitle_background_opacity: Option<i64>,
    pub table_card_icon_color: Option<String>,
    pub table_card_header_text: Option<String>,
    pub table_card_subtext: Option<String>,
    pub table_card_table_prefix: Option<String>,
    pub table_card_celebration_message: Option<String>,
    pub table_card_text_color: Option<String>,
    pub table_card_accent_color: Option<String>,
    pub table_card_header_color: Option<String>,
    pub table_card_table_number_color: Option<String>,
    pub table_card_subtext_color: Option<String>,
    pub table_card_celebration_text_color: Option<String>,
    pub table_card_celebration_box_opacity: Option<i64>,
    pub table_card_table_number_box_opacity: Option<i64>,
}

/// The seven color slots of the table card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    Icon,
    Text,
    Accent,
    HeaderText,
    TableNumber,
    Subtext,
    CelebrationText,
}

impl ColorField {
    pub const ALL: [ColorField; 7] = [
        ColorField::Icon,
        ColorField::Text,
        ColorField::Accent,
        ColorField::HeaderText,
        ColorField::TableNumber,
        ColorField::Subtext,
        ColorField::CelebrationText,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorField::Icon => "Icon",
            ColorField::Text => "Text",
            ColorField::Accent => "Accent",
            ColorField::HeaderText => "Header text",
            ColorField::TableNumber => "Table number",
            ColorField::Subtext => "Subtext",
            ColorField::CelebrationText => "Celebration text",
        }
    }

    pub fn get<'a>(&self, s: &'a AppSettings) -> &'a str {
        match self {
            ColorField::Icon => &s.table_card_icon_color,
            ColorField::Text => &s.table_card_text_color,
            ColorField::Accent => &s.table_card_accent_color,
            ColorField::HeaderText => &s.table_card_header_text_color,
            ColorField::TableNumber => &s.table_card_table_number_color,
            ColorField::Subtext => &s.table_card_subtext_color,
            ColorField::CelebrationText => &s.table_card_celebration_text_color,
        }
    }

    fn slot<'a>(&self, s: &'a mut AppSettings) -> &'a mut String {
        match self {
            ColorField::Icon => &mut s.table_card_icon_color,
            ColorField::Text => &mut s.table_card_text_color,
            ColorField::Accent => &mut s.table_card_accent_color,
            ColorField::HeaderText => &mut s.table_card_header_text_color,
            ColorField::TableNumber => &mut s.table_card_table_number_color,
            ColorField::Subtext => &mut s.table_card_subtext_color,
            ColorField::CelebrationText => &mut s.table_card_celebration_text_color,
        }
    }

    pub fn set(&self, s: &mut AppSettings, value: &str) -> AppResult<()> {
        let value = value.trim();
        check_hex(SettingsField::from(*self), value)?;
        *self.slot(s) = value.to_string();
        Ok(())
    }
}

/// Value category of a settings field; drives parsing and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Image,
    Size,
    Position,
    Font,
    Fraction,
    Percent,
    Color(ColorField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Title,
    Subtitle,
    BackgroundImage,
    BackgroundSize,
    BackgroundPosition,
    BackgroundOpacity,
    TableCardBackgroundImage,
    TableCardBackgroundSize,
    TableCardBackgroundPosition,
    TableCardBackgroundOpacity,
    TitleFont,
    SubtitleFont,
    TitleBackgroundOpacity,
    SubtitleBackgroundOpacity,
    TableCardIconColor,
    TableCardHeaderText,
    TableCardSubtext,
    TableCardTableNumberText,
    TableCardCelebrationText,
    TableCardTextColor,
    TableCardAccentColor,
    TableCardHeaderTextColor,
    TableCardTableNumberColor,
    TableCardSubtextColor,
    TableCardCelebrationTextColor,
    TableCardCelebrationBoxOpacity,
    TableCardTableNumberBoxOpacity,
}

impl SettingsField {
    pub const ALL: [SettingsField; 27] = [
        SettingsField::Title,
        SettingsField::Subtitle,
        SettingsField::BackgroundImage,
        SettingsField::BackgroundSize,
        SettingsField::BackgroundPosition,
        SettingsField::BackgroundOpacity,
        SettingsField::TableCardBackgroundImage,
        SettingsField::TableCardBackgroundSize,
        SettingsField::TableCardBackgroundPosition,
        SettingsField::TableCardBackgroundOpacity,
        SettingsField::TitleFont,
        SettingsField::SubtitleFont,
        SettingsField::TitleBackgroundOpacity,
        SettingsField::SubtitleBackgroundOpacity,
        SettingsField::TableCardIconColor,
        SettingsField::TableCardHeaderText,
        SettingsField::TableCardSubtext,
        SettingsField::TableCardTableNumberText,
        SettingsField::TableCardCelebrationText,
        SettingsField::TableCardTextColor,
        SettingsField::TableCardAccentColor,
        SettingsField::TableCardHeaderTextColor,
        SettingsField::TableCardTableNumberColor,
        SettingsField::TableCardSubtextColor,
        SettingsField::TableCardCelebrationTextColor,
        SettingsField::TableCardCelebrationBoxOpacity,
        SettingsField::TableCardTableNumberBoxOpacity,
    ];

    /// Storage (snake_case) column name.
    pub fn key(&self) -> &'static str {
        match self {
            SettingsField::Title => "title",
            SettingsField::Subtitle => "subtitle",
            SettingsField::BackgroundImage => "background_image",
            SettingsField::BackgroundSize => "background_size",
            SettingsField::BackgroundPosition => "background_position",
            SettingsField::BackgroundOpacity => "background_opacity",
            SettingsField::TableCardBackgroundImage => "table_card_background_image",
            SettingsField::TableCardBackgroundSize => "table_card_background_size",
            SettingsField::TableCardBackgroundPosition => "table_card_background_position",
            SettingsField::TableCardBackgroundOpacity => "table_card_background_opacity",
            SettingsField::TitleFont => "title_font",
            SettingsField::SubtitleFont => "subtitle_font",
            SettingsField::TitleBackgroundOpacity => "title_background_opacity",
            SettingsField::SubtitleBackgroundOpacity => "subtitle_background_opacity",
            SettingsField::TableCardIconColor => "table_card_icon_color",
            SettingsField::TableCardHeaderText => "table_card_header_text",
            SettingsField::TableCardSubtext => "table_card_subtext",
            SettingsField::TableCardTableNumberText => "table_card_table_prefix",
            SettingsField::TableCardCelebrationText => "table_card_celebration_message",
            SettingsField::TableCardTextColor => "table_card_text_color",
            SettingsField::TableCardAccentColor => "table_card_accent_color",
            SettingsField::TableCardHeaderTextColor => "table_card_header_color",
            SettingsField::TableCardTableNumberColor => "table_card_table_number_color",
            SettingsField::TableCardSubtextColor => "table_card_subtext_color",
            SettingsField::TableCardCelebrationTextColor => "table_card_celebration_text_color",
            SettingsField::TableCardCelebrationBoxOpacity => "table_card_celebration_box_opacity",
            SettingsField::TableCardTableNumberBoxOpacity => "table_card_table_number_box_opacity",
        }
    }

    /// In-memory (camelCase) name, as serialized by `AppSettings`.
    pub fn camel_name(&self) -> &'static str {
        match self {
            SettingsField::Title => "title",
            SettingsField::Subtitle => "subtitle",
            SettingsField::BackgroundImage => "backgroundImage",
            SettingsField::BackgroundSize => "backgroundSize",
            SettingsField::BackgroundPosition => "backgroundPosition",
            SettingsField::BackgroundOpacity => "backgroundOpacity",
            SettingsField::TableCardBackgroundImage => "tableCardBackgroundImage",
            SettingsField::TableCardBackgroundSize => "tableCardBackgroundSize",
            SettingsField::TableCardBackgroundPosition => "tableCardBackgroundPosition",
            SettingsField::TableCardBackgroundOpacity => "tableCardBackgroundOpacity",
            SettingsField::TitleFont => "titleFont",
            SettingsField::SubtitleFont => "subtitleFont",
            SettingsField::TitleBackgroundOpacity => "titleBackgroundOpacity",
            SettingsField::SubtitleBackgroundOpacity => "subtitleBackgroundOpacity",
            SettingsField::TableCardIconColor => "tableCardIconColor",
            SettingsField::TableCardHeaderText => "tableCardHeaderText",
            SettingsField::TableCardSubtext => "tableCardSubtext",
            SettingsField::TableCardTableNumberText => "tableCardTableNumberText",
            SettingsField::TableCardCelebrationText => "tableCardCelebrationText",
            SettingsField::TableCardTextColor => "tableCardTextColor",
            SettingsField::TableCardAccentColor => "tableCardAccentColor",
            SettingsField::TableCardHeaderTextColor => "tableCardHeaderTextColor",
            SettingsField::TableCardTableNumberColor => "tableCardTableNumberColor",
            SettingsField::TableCardSubtextColor => "tableCardSubtextColor",
            SettingsField::TableCardCelebrationTextColor => "tableCardCelebrationTextColor",
            SettingsField::TableCardCelebrationBoxOpacity => "tableCardCelebrationBoxOpacity",
            SettingsField::TableCardTableNumberBoxOpacity => "tableCardTableNumberBoxOpacity",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SettingsField::Title
            | SettingsField::Subtitle
            | SettingsField::TableCardHeaderText
            | SettingsField::TableCardSubtext
            | SettingsField::TableCardTableNumberText
            | SettingsField::TableCardCelebrationText => FieldKind::Text,
            SettingsField::BackgroundImage | SettingsField::TableCardBackgroundImage => {
                FieldKind::Image
            }
            SettingsField::BackgroundSize | SettingsField::TableCardBackgroundSize => {
                FieldKind::Size
            }
            SettingsField::BackgroundPosition | SettingsField::TableCardBackgroundPosition => {
                FieldKind::Position
            }
            SettingsField::TitleFont | SettingsField::SubtitleFont => FieldKind::Font,
            SettingsField::BackgroundOpacity
            | SettingsField::TableCardBackgroundOpacity
            | SettingsField::TitleBackgroundOpacity
            | SettingsField::SubtitleBackgroundOpacity
            | SettingsField::TableCardCelebrationBoxOpacity => FieldKind::Fraction,
            SettingsField::TableCardTableNumberBoxOpacity => FieldKind::Percent,
            SettingsField::TableCardIconColor => FieldKind::Color(ColorField::Icon),
            SettingsField::TableCardTextColor => FieldKind::Color(ColorField::Text),
            SettingsField::TableCardAccentColor => FieldKind::Color(ColorField::Accent),
            SettingsField::TableCardHeaderTextColor => FieldKind::Color(ColorField::HeaderText),
            SettingsField::TableCardTableNumberColor => FieldKind::Color(ColorField::TableNumber),
            SettingsField::TableCardSubtextColor => FieldKind::Color(ColorField::Subtext),
            SettingsField::TableCardCelebrationTextColor => {
                FieldKind::Color(ColorField::CelebrationText)
            }
        }
    }
}

impl From<ColorField> for SettingsField {
    fn from(c: ColorField) -> Self {
        match c {
            ColorField::Icon => SettingsField::TableCardIconColor,
            ColorField::Text => SettingsField::TableCardTextColor,
            ColorField::Accent => SettingsField::TableCardAccentColor,
            ColorField::HeaderText => SettingsField::TableCardHeaderTextColor,
            ColorField::TableNumber => SettingsField::TableCardTableNumberColor,
            ColorField::Subtext => SettingsField::TableCardSubtextColor,
            ColorField::CelebrationText => SettingsField::TableCardCelebrationTextColor,
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingsField {
    type Err = AppError;

    /// Accepts the storage key, the camelCase name, or the storage key
    /// written with dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let snake = wanted.replace('-', "_");
        SettingsField::ALL
            .iter()
            .copied()
            .find(|f| f.key() == snake || f.camel_name() == wanted)
            .ok_or_else(|| AppError::UnknownSetting(wanted.to_string()))
    }
}

fn invalid(field: SettingsField, reason: impl Into<String>) -> AppError {
    AppError::InvalidSetting {
        key: field.key().to_string(),
        reason: reason.into(),
    }
}

fn check_hex(field: SettingsField, value: &str) -> AppResult<()> {
    if HEX_COLOR.is_match(value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("'{}' is not a hex color (#rgb or #rrggbb)", value),
        ))
    }
}

impl AppSettings {
    /// Human-readable value of a field.
    pub fn get(&self, field: SettingsField) -> String {
        fn image(v: &Option<String>) -> String {
            match v {
                Some(data) if data.len() > 48 => {
                    let head: String = data.chars().take(48).collect();
                    format!("{}… ({} bytes)", head, data.len())
                }
                Some(data) => data.clone(),
                None => "none".to_string(),
            }
        }

        match field {
            SettingsField::Title => self.title.clone(),
            SettingsField::Subtitle => self.subtitle.clone(),
            SettingsField::BackgroundImage => image(&self.background_image),
            SettingsField::BackgroundSize => self.background_size.to_db_str().to_string(),
            SettingsField::BackgroundPosition => self.background_position.to_db_str().to_string(),
            SettingsField::BackgroundOpacity => format!("{}", self.background_opacity),
            SettingsField::TableCardBackgroundImage => image(&self.table_card_background_image),
            SettingsField::TableCardBackgroundSize => {
                self.table_card_background_size.to_db_str().to_string()
            }
            SettingsField::TableCardBackgroundPosition => {
                self.table_card_background_position.to_db_str().to_string()
            }
            SettingsField::TableCardBackgroundOpacity => {
                format!("{}", self.table_card_background_opacity)
            }
            SettingsField::TitleFont => self.title_font.clone(),
            SettingsField::SubtitleFont => self.subtitle_font.clone(),
            SettingsField::TitleBackgroundOpacity => format!("{}", self.title_background_opacity),
            SettingsField::SubtitleBackgroundOpacity => {
                format!("{}", self.subtitle_background_opacity)
            }
            SettingsField::TableCardHeaderText => self.table_card_header_text.clone(),
            SettingsField::TableCardSubtext => self.table_card_subtext.clone(),
            SettingsField::TableCardTableNumberText => self.table_card_table_number_text.clone(),
            SettingsField::TableCardCelebrationText => self.table_card_celebration_text.clone(),
            SettingsField::TableCardCelebrationBoxOpacity => {
                format!("{}", self.table_card_celebration_box_opacity)
            }
            SettingsField::TableCardTableNumberBoxOpacity => {
                format!("{}", self.table_card_table_number_box_opacity)
            }
            SettingsField::TableCardIconColor => self.table_card_icon_color.clone(),
            SettingsField::TableCardTextColor => self.table_card_text_color.clone(),
            SettingsField::TableCardAccentColor => self.table_card_accent_color.clone(),
            SettingsField::TableCardHeaderTextColor => self.table_card_header_text_color.clone(),
            SettingsField::TableCardTableNumberColor => self.table_card_table_number_color.clone(),
            SettingsField::TableCardSubtextColor => self.table_card_subtext_color.clone(),
            SettingsField::TableCardCelebrationTextColor => {
                self.table_card_celebration_text_color.clone()
            }
        }
    }

    /// Mutable storage of a field, tagged with how its value is parsed.
    fn slot(&mut self, field: SettingsField) -> Slot<'_> {
        match field {
            SettingsField::Title => Slot::Text(&mut self.title),
            SettingsField::Subtitle => Slot::Text(&mut self.subtitle),
            SettingsField::BackgroundImage => Slot::Image(&mut self.background_image),
            SettingsField::BackgroundSize => Slot::Size(&mut self.background_size),
            SettingsField::BackgroundPosition => Slot::Position(&mut self.background_position),
            SettingsField::BackgroundOpacity => Slot::Fraction(&mut self.background_opacity),
            SettingsField::TableCardBackgroundImage => {
                Slot::Image(&mut self.table_card_background_image)
            }
            SettingsField::TableCardBackgroundSize => {
                Slot::Size(&mut self.table_card_background_size)
            }
            SettingsField::TableCardBackgroundPosition => {
                Slot::Position(&mut self.table_card_background_position)
            }
            SettingsField::TableCardBackgroundOpacity => {
                Slot::Fraction(&mut self.table_card_background_opacity)
            }
            SettingsField::TitleFont => Slot::Font(&mut self.title_font),
            SettingsField::SubtitleFont => Slot::Font(&mut self.subtitle_font),
            SettingsField::TitleBackgroundOpacity => {
                Slot::Fraction(&mut self.title_background_opacity)
            }
            SettingsField::SubtitleBackgroundOpacity => {
                Slot::Fraction(&mut self.subtitle_background_opacity)
            }
            SettingsField::TableCardIconColor => Slot::Color(&mut self.table_card_icon_color),
            SettingsField::TableCardHeaderText => Slot::Text(&mut self.table_card_header_text),
            SettingsField::TableCardSubtext => Slot::Text(&mut self.table_card_subtext),
            SettingsField::TableCardTableNumberText => {
                Slot::Text(&mut self.table_card_table_number_text)
            }
            SettingsField::TableCardCelebrationText => {
                Slot::Text(&mut self.table_card_celebration_text)
            }
            SettingsField::TableCardTextColor => Slot::Color(&mut self.table_card_text_color),
            SettingsField::TableCardAccentColor => Slot::Color(&mut self.table_card_accent_color),
            SettingsField::TableCardHeaderTextColor => {
                Slot::Color(&mut self.table_card_header_text_color)
            }
            SettingsField::TableCardTableNumberColor => {
                Slot::Color(&mut self.table_card_table_number_color)
            }
            SettingsField::TableCardSubtextColor => Slot::Color(&mut self.table_card_subtext_color),
            SettingsField::TableCardCelebrationTextColor => {
                Slot::Color(&mut self.table_card_celebration_text_color)
            }
            SettingsField::TableCardCelebrationBoxOpacity => {
                Slot::Fraction(&mut self.table_card_celebration_box_opacity)
            }
            SettingsField::TableCardTableNumberBoxOpacity => {
                Slot::Percent(&mut self.table_card_table_number_box_opacity)
            }
        }
    }

    /// Parse `raw` for the given field and store it. Rejected values leave
    /// the settings untouched.
    pub fn set(&mut self, field: SettingsField, raw: &str) -> AppResult<()> {
        let value = raw.trim();
        match self.slot(field) {
            Slot::Color(slot) => {
                check_hex(field, value)?;
                *slot = value.to_string();
            }
            Slot::Text(slot) => {
                if value.is_empty() {
                    return Err(invalid(field, "value must not be empty"));
                }
                *slot = value.to_string();
            }
            Slot::Font(slot) => {
                if !FONT_OPTIONS.iter().any(|(v, _)| *v == value) {
                    return Err(invalid(field, format!("unknown font '{}'", value)));
                }
                *slot = value.to_string();
            }
            Slot::Image(slot) => {
                *slot = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            Slot::Size(slot) => {
                *slot = BackgroundSize::from_db_str(value)
                    .ok_or_else(|| invalid(field, "expected cover, contain or auto"))?;
            }
            Slot::Position(slot) => {
                *slot = BackgroundPosition::from_db_str(value)
                    .ok_or_else(|| invalid(field, format!("unknown position '{}'", value)))?;
            }
            Slot::Fraction(slot) => {
                let v: f64 = value
                    .parse()
                    .map_err(|_| invalid(field, format!("'{}' is not a number", value)))?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid(field, "opacity must be between 0 and 1"));
                }
                *slot = v;
            }
            Slot::Percent(slot) => {
                let v: i64 = value
                    .parse()
                    .map_err(|_| invalid(field, format!("'{}' is not an integer", value)))?;
                if !(0..=100).contains(&v) {
                    return Err(invalid(field, "percentage must be between 0 and 100"));
                }
                *slot = v;
            }
        }
        Ok(())
    }
}

enum Slot<'a> {
    Text(&'a mut String),
    Font(&'a mut String),
    Color(&'a mut String),
    Image(&'a mut Option<String>),
    Size(&'a mut BackgroundSize),
    Position(&'a mut BackgroundPosition),
    Fraction(&'a mut f64),
    Percent(&'a mut i64),
}

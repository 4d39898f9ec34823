//! Mapping between `AppSettings` (in-memory, fractional opacities) and
//! `SettingsRecord` (storage row, integer percentages).
//!
//! Decoding treats a stored value as absent when it is NULL, an empty string
//! or zero, and substitutes the field default in that case.

use crate::models::settings::{
    AppSettings, BackgroundPosition, BackgroundSize, SettingsRecord, defaults,
};

pub struct SettingsCodec;

/// Fraction in [0, 1] -> rounded integer percentage.
pub fn fraction_to_percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Integer percentage -> fraction.
pub fn percent_to_fraction(value: i64) -> f64 {
    value as f64 / 100.0
}

fn text_or(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

fn image(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn fraction_or(value: Option<i64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0 => percent_to_fraction(v),
        _ => default,
    }
}

fn size_or_default(value: &Option<String>) -> BackgroundSize {
    value
        .as_deref()
        .and_then(BackgroundSize::from_db_str)
        .unwrap_or_default()
}

fn position_or_default(value: &Option<String>) -> BackgroundPosition {
    value
        .as_deref()
        .and_then(BackgroundPosition::from_db_str)
        .unwrap_or_default()
}

impl SettingsCodec {
    pub fn encode(s: &AppSettings) -> SettingsRecord {
        SettingsRecord {
            title: Some(s.title.clone()),
            subtitle: Some(s.subtitle.clone()),
            background_image: s.background_image.clone(),
            background_size: Some(s.background_size.to_db_str().to_string()),
            background_position: Some(s.background_position.to_db_str().to_string()),
            background_opacity: Some(fraction_to_percent(s.background_opacity)),
            table_card_background_image: s.table_card_background_image.clone(),
            table_card_background_size: Some(s.table_card_background_size.to_db_str().to_string()),
            table_card_background_position: Some(
                s.table_card_background_position.to_db_str().to_string(),
            ),
            table_card_background_opacity: Some(fraction_to_percent(
                s.table_card_background_opacity,
            )),
            title_font: Some(s.title_font.clone()),
            subtitle_font: Some(s.subtitle_font.clone()),
            title_background_opacity: Some(fraction_to_percent(s.title_background_opacity)),
            subtitle_background_opacity: Some(fraction_to_percent(s.subtitle_background_opacity)),
            table_card_icon_color: Some(s.table_card_icon_color.clone()),
            table_card_header_text: Some(s.table_card_header_text.clone()),
            table_card_subtext: Some(s.table_card_subtext.clone()),
            table_card_table_prefix: Some(s.table_card_table_number_text.clone()),
            table_card_celebration_message: Some(s.table_card_celebration_text.clone()),
            table_card_text_color: Some(s.table_card_text_color.clone()),
            table_card_accent_color: Some(s.table_card_accent_color.clone()),
            table_card_header_color: Some(s.table_card_header_text_color.clone()),
            table_card_table_number_color: Some(s.table_card_table_number_color.clone()),
            table_card_subtext_color: Some(s.table_card_subtext_color.clone()),
            table_card_celebration_text_color: Some(s.table_card_celebration_text_color.clone()),
            table_card_celebration_box_opacity: Some(fraction_to_percent(
                s.table_card_celebration_box_opacity,
            )),
            // already a percentage in memory: stored unscaled
            table_card_table_number_box_opacity: Some(s.table_card_table_number_box_opacity),
        }
    }

    pub fn decode(r: &SettingsRecord) -> AppSettings {
        AppSettings {
            title: text_or(&r.title, defaults::TITLE),
            subtitle: text_or(&r.subtitle, defaults::SUBTITLE),
            background_image: image(&r.background_image),
            background_size: size_or_default(&r.background_size),
            background_position: position_or_default(&r.background_position),
            background_opacity: fraction_or(r.background_opacity, defaults::BACKGROUND_OPACITY),
            table_card_background_image: image(&r.table_card_background_image),
            table_card_background_size: size_or_default(&r.table_card_background_size),
            table_card_background_position: position_or_default(&r.table_card_background_position),
            table_card_background_opacity: fraction_or(
                r.table_card_background_opacity,
                defaults::TABLE_CARD_BACKGROUND_OPACITY,
            ),
            title_font: text_or(&r.title_font, defaults::TITLE_FONT),
            subtitle_font: text_or(&r.subtitle_font, defaults::SUBTITLE_FONT),
            title_background_opacity: fraction_or(
                r.title_background_opacity,
                defaults::TITLE_BACKGROUND_OPACITY,
            ),
            subtitle_background_opacity: fraction_or(
                r.subtitle_background_opacity,
                defaults::SUBTITLE_BACKGROUND_OPACITY,
            ),
            table_card_icon_color: text_or(&r.table_card_icon_color, defaults::ICON_COLOR),
            table_card_header_text: text_or(&r.table_card_header_text, defaults::HEADER_TEXT),
            table_card_subtext: text_or(&r.table_card_subtext, defaults::SUBTEXT),
            table_card_table_number_text: text_or(
                &r.table_card_table_prefix,
                defaults::TABLE_NUMBER_TEXT,
            ),
            table_card_celebration_text: text_or(
                &r.table_card_celebration_message,
                defaults::CELEBRATION_TEXT,
            ),
            table_card_text_color: text_or(&r.table_card_text_color, defaults::TEXT_COLOR),
            table_card_accent_color: text_or(&r.table_card_accent_color, defaults::ACCENT_COLOR),
            table_card_header_text_color: text_or(
                &r.table_card_header_color,
                defaults::HEADER_TEXT_COLOR,
            ),
            table_card_table_number_color: text_or(
                &r.table_card_table_number_color,
                defaults::TABLE_NUMBER_COLOR,
            ),
            table_card_subtext_color: text_or(&r.table_card_subtext_color, defaults::SUBTEXT_COLOR),
            table_card_celebration_text_color: text_or(
                &r.table_card_celebration_text_color,
                defaults::CELEBRATION_TEXT_COLOR,
            ),
            table_card_celebration_box_opacity: fraction_or(
                r.table_card_celebration_box_opacity,
                defaults::CELEBRATION_BOX_OPACITY,
            ),
            table_card_table_number_box_opacity: match r.table_card_table_number_box_opacity {
                Some(v) if v != 0 => v,
                _ => defaults::TABLE_NUMBER_BOX_OPACITY,
            },
        }
    }

    /// Decode an optional row: no row means all defaults.
    pub fn decode_or_default(r: Option<&SettingsRecord>) -> AppSettings {
        r.map(Self::decode).unwrap_or_default()
    }
}

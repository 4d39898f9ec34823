//! Terminal rendition of the public table card, driven by the settings.

use crate::models::guest::Guest;
use crate::models::settings::{AppSettings, ColorField};
use crate::utils::colors::paint_hex;
use crate::utils::formatting::bold;

/// Page heading: title and subtitle.
pub fn render_heading(s: &AppSettings) -> String {
    format!(
        "{}\n{}\n",
        bold(&paint_hex(&s.title, ColorField::HeaderText.get(s))),
        paint_hex(&s.subtitle, ColorField::Subtext.get(s))
    )
}

/// Card for one guest with the other guests at the same table.
pub fn render_card(s: &AppSettings, guest: &Guest, tablemates: &[Guest]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} {}\n",
        paint_hex("◆", ColorField::Icon.get(s)),
        bold(&paint_hex(&guest.name, ColorField::Text.get(s)))
    ));
    out.push_str(&format!(
        "  {}\n",
        paint_hex(&s.table_card_header_text, ColorField::HeaderText.get(s))
    ));
    out.push_str(&format!(
        "  {}\n",
        bold(&paint_hex(
            &format!("{} {}", s.table_card_table_number_text, guest.table_number),
            ColorField::TableNumber.get(s)
        ))
    ));

    if !tablemates.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            paint_hex(&s.table_card_subtext, ColorField::Subtext.get(s))
        ));
        for mate in tablemates {
            out.push_str(&format!(
                "   {} {}\n",
                paint_hex("•", ColorField::Accent.get(s)),
                mate.name
            ));
        }
    }

    out.push_str(&format!(
        "  {}\n",
        paint_hex(
            &s.table_card_celebration_text,
            ColorField::CelebrationText.get(s)
        )
    ));
    out
}

use seatfinder::core::codec::SettingsCodec;
use seatfinder::core::guests::{EmptyTermPolicy, GuestList, filter_by_name, sorted_by_table};
use seatfinder::core::import::CsvImport;
use seatfinder::core::selection::Selection;
use seatfinder::models::guest::{Guest, GuestEntry};
use seatfinder::models::settings::{
    AppSettings, BackgroundPosition, BackgroundSize, ColorField, FieldKind, SettingsField,
    SettingsRecord,
};

// ---------------------------
// Settings codec
// ---------------------------

#[test]
fn codec_round_trip_for_hundredths() {
    let mut s = AppSettings::default();
    s.title = "Anna & Marco".into();
    s.background_image = Some("data:image/png;base64,AAAA".into());
    s.background_size = BackgroundSize::Contain;
    s.table_card_background_position = BackgroundPosition::BottomRight;
    s.background_opacity = 0.45;
    s.title_background_opacity = 0.07;
    s.table_card_celebration_box_opacity = 1.0;
    s.table_card_table_number_box_opacity = 35;
    s.table_card_text_color = "#abc".into();

    assert_eq!(SettingsCodec::decode(&SettingsCodec::encode(&s)), s);
}

#[test]
fn codec_scales_fractions_and_renames_fields() {
    let mut s = AppSettings::default();
    s.background_opacity = 0.456;
    s.table_card_table_number_text = "Mesa".into();

    let rec = SettingsCodec::encode(&s);
    assert_eq!(rec.background_opacity, Some(46));
    assert_eq!(rec.table_card_table_prefix.as_deref(), Some("Mesa"));
    assert_eq!(rec.table_card_header_color.as_deref(), Some("#0f172a"));
    assert_eq!(rec.table_card_table_number_box_opacity, Some(100));
}

#[test]
fn codec_falsy_values_decode_to_defaults() {
    let rec = SettingsRecord {
        title: Some(String::new()),
        background_opacity: Some(0),
        background_size: Some("stretch".into()),
        table_card_table_number_box_opacity: Some(0),
        ..Default::default()
    };

    let s = SettingsCodec::decode(&rec);
    assert_eq!(s, AppSettings::default());
    assert_eq!(SettingsCodec::decode_or_default(None), AppSettings::default());
}

// ---------------------------
// Settings fields
// ---------------------------

#[test]
fn settings_field_parses_all_spellings() {
    for field in SettingsField::ALL {
        assert_eq!(field.key().parse::<SettingsField>().ok(), Some(field));
        assert_eq!(field.camel_name().parse::<SettingsField>().ok(), Some(field));
        assert_eq!(
            field.key().replace('_', "-").parse::<SettingsField>().ok(),
            Some(field)
        );
    }
    assert!("nope".parse::<SettingsField>().is_err());
}

#[test]
fn every_field_can_be_read() {
    let s = AppSettings::default();
    for field in SettingsField::ALL {
        assert!(!s.get(field).is_empty(), "{} has no display value", field);
    }
}

#[test]
fn color_fields_validate_hex() {
    let mut s = AppSettings::default();
    for color in ColorField::ALL {
        assert!(color.set(&mut s, "#123456").is_ok());
        assert_eq!(color.get(&s), "#123456");
        assert!(color.set(&mut s, "red").is_err());
        assert_eq!(color.get(&s), "#123456");
    }
}

#[test]
fn settings_set_parses_by_kind() {
    let mut s = AppSettings::default();

    s.set(SettingsField::TableCardBackgroundPosition, "top-left")
        .expect("position");
    assert_eq!(s.table_card_background_position, BackgroundPosition::TopLeft);

    s.set(SettingsField::SubtitleFont, "font-['Lora']").expect("font");
    assert_eq!(s.subtitle_font, "font-['Lora']");

    s.set(SettingsField::BackgroundImage, "data:x").expect("image");
    s.set(SettingsField::BackgroundImage, "none").expect("clear");
    assert_eq!(s.background_image, None);

    assert!(s.set(SettingsField::Title, "   ").is_err());
    assert!(s.set(SettingsField::TableCardTableNumberBoxOpacity, "101").is_err());
    assert!(s.set(SettingsField::BackgroundSize, "stretch").is_err());
}

/// Two accepted inputs per kind, so one of them differs from the default.
fn inputs_for(kind: FieldKind) -> [&'static str; 2] {
    match kind {
        FieldKind::Text => ["Custom heading", "Other heading"],
        FieldKind::Image => ["data:image/png;base64,AAAA", "data:image/png;base64,BBBB"],
        FieldKind::Size => ["contain", "auto"],
        FieldKind::Position => ["top left", "bottom right"],
        FieldKind::Font => ["font-mono", "font-['Lora']"],
        FieldKind::Fraction => ["0.55", "0.45"],
        FieldKind::Percent => ["55", "45"],
        FieldKind::Color(_) => ["#123456", "#654321"],
    }
}

#[test]
fn set_touches_exactly_the_named_field() {
    let defaults = AppSettings::default();

    for field in SettingsField::ALL {
        let [first, second] = inputs_for(field.kind());
        let input = if defaults.get(field) == first { second } else { first };

        let mut s = AppSettings::default();
        s.set(field, input)
            .unwrap_or_else(|e| panic!("{} rejected '{}': {}", field.key(), input, e));

        assert_ne!(s.get(field), defaults.get(field), "{} unchanged", field.key());
        for other in SettingsField::ALL.into_iter().filter(|f| *f != field) {
            assert_eq!(
                s.get(other),
                defaults.get(other),
                "setting {} also changed {}",
                field.key(),
                other.key()
            );
        }
    }
}

// ---------------------------
// Guest list
// ---------------------------

fn party() -> Vec<Guest> {
    vec![
        Guest::new(1, "John Smith", 2),
        Guest::new(2, "Jennifer Martinez", 1),
        Guest::new(3, "Emily Davis", 2),
    ]
}

#[test]
fn filter_is_case_insensitive_substring() {
    let guests = vec![
        Guest::new(1, "Jennifer Martinez", 1),
        Guest::new(2, "John Smith", 1),
    ];
    let hits = filter_by_name(&guests, "mar", EmptyTermPolicy::MatchAll);
    assert_eq!(hits, [Guest::new(1, "Jennifer Martinez", 1)]);
}

#[test]
fn empty_term_policies_differ() {
    let guests = party();
    assert_eq!(filter_by_name(&guests, "", EmptyTermPolicy::MatchAll).len(), 3);
    assert!(filter_by_name(&guests, "", EmptyTermPolicy::MatchNone).is_empty());
    assert!(filter_by_name(&guests, "   ", EmptyTermPolicy::MatchNone).is_empty());
}

#[test]
fn search_sorts_by_name_and_caps() {
    let list = GuestList::sample();
    let hits = list.search("r", 3);
    assert_eq!(hits.len(), 3);
    let names: Vec<&str> = hits.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Amanda Rodriguez", "Christopher Lee", "Jennifer Martinez"]);
}

#[test]
fn search_orders_mixed_case_names_before_capping() {
    let list = GuestList::new(vec![
        Guest::new(1, "Zara Ross", 2),
        Guest::new(2, "anna rossi", 1),
        Guest::new(3, "Anna Rossi", 3),
    ]);

    let first = list.search("ross", 1);
    assert_eq!(first, [Guest::new(2, "anna rossi", 1)]);

    let names: Vec<String> = list.search("ROSS", 5).into_iter().map(|g| g.name).collect();
    assert_eq!(names, ["anna rossi", "Anna Rossi", "Zara Ross"]);
}

#[test]
fn grouping_keeps_insertion_order_and_sorts_for_display() {
    let groups = sorted_by_table(&party());
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].table_number, 1);
    let second: Vec<i64> = groups[1].guests.iter().map(|g| g.id).collect();
    assert_eq!(second, [1, 3]);
}

#[test]
fn tablemates_exclude_the_guest() {
    let list = GuestList::new(party());
    let john = list.get(1).cloned().expect("john");
    let mates = list.tablemates(&john);
    assert_eq!(mates, [Guest::new(3, "Emily Davis", 2)]);
}

#[test]
fn guest_entry_validation() {
    assert!(GuestEntry::new("  ", Some(1)).validated().is_none());
    assert!(GuestEntry::new("Emily Davis", None).validated().is_none());
    let ok = GuestEntry::new("  Emily Davis ", Some(2))
        .validated()
        .expect("valid entry");
    assert_eq!(ok.name, "Emily Davis");
}

// ---------------------------
// Selection
// ---------------------------

#[test]
fn select_all_in_table_is_a_union() {
    let list = GuestList::new(vec![
        Guest::new(1, "John Smith", 1),
        Guest::new(4, "Emily Davis", 2),
        Guest::new(5, "David Wilson", 2),
        Guest::new(6, "Lisa Anderson", 2),
    ]);
    let mut sel = Selection::new();
    sel.toggle(1);

    sel.select_all_in_table(&list, 2);
    assert_eq!(sel.ids(), [1, 4, 5, 6]);

    // selecting again never removes anything
    sel.select_all_in_table(&list, 2);
    assert_eq!(sel.len(), 4);

    assert!(!sel.toggle(4));
    assert!(!sel.is_table_fully_selected(&list, 2));
}

// ---------------------------
// CSV import
// ---------------------------

#[test]
fn csv_import_skips_bad_lines() {
    let parsed = CsvImport::parse("John, Smith, 1\nJane, Doe, 2\nBad Line", 0);
    assert_eq!(
        parsed,
        [Guest::new(1, "John Smith", 1), Guest::new(2, "Jane Doe", 2)]
    );
}

#[test]
fn csv_import_ids_follow_existing_max() {
    let parsed = CsvImport::parse("Amanda,Rodriguez,4,extra\n , Lee, 4\nChris,Lee,x", 12);
    assert_eq!(parsed, [Guest::new(13, "Amanda Rodriguez", 4)]);
}

#[test]
fn csv_import_table_must_be_a_whole_number() {
    let parsed = CsvImport::parse("Anna,Rossi,3.5\nZara,Ross,12a\nMarco,Bianchi, 7 ", 0);
    assert_eq!(parsed, [Guest::new(1, "Marco Bianchi", 7)]);
}

#[test]
fn csv_import_blank_input() {
    assert!(CsvImport::parse("   \n  ", 3).is_empty());
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, setup_test_db, sf, temp_out};

#[test]
fn test_settings_print_defaults() {
    let db_path = setup_test_db("settings_defaults");
    init_db(&db_path);

    sf().args(["--db", &db_path, "settings", "--print"])
        .assert()
        .success()
        .stdout(
            contains("showing defaults")
                .and(contains("Find Your Seat Assignment"))
                .and(contains("#3b82f6")),
        );
}

#[test]
fn test_settings_set_persists() {
    let db_path = setup_test_db("settings_set");
    init_db(&db_path);

    sf().args(["--db", &db_path, "settings", "--set", "title", "Anna & Marco"])
        .assert()
        .success()
        .stdout(contains("Settings saved"));

    sf().args(["--db", &db_path, "settings", "--set", "background-opacity", "0.45"])
        .assert()
        .success();

    sf().args(["--db", &db_path, "settings", "--print", "--json"])
        .assert()
        .success()
        .stdout(
            contains("\"title\": \"Anna & Marco\"")
                .and(contains("\"backgroundOpacity\": 0.45"))
                .and(contains("\"tableCardTableNumberBoxOpacity\": 100")),
        );
}

#[test]
fn test_settings_rejects_bad_color() {
    let db_path = setup_test_db("settings_bad_color");
    init_db(&db_path);

    sf().args([
        "--db",
        &db_path,
        "settings",
        "--set",
        "table_card_accent_color",
        "blue",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid value for table_card_accent_color"));
}

#[test]
fn test_settings_image_and_clear() {
    let db_path = setup_test_db("settings_image");
    init_db(&db_path);

    let img = temp_out("settings_image_src", "png");
    fs::write(&img, [0x89u8, b'P', b'N', b'G']).expect("write image");

    sf().args(["--db", &db_path, "settings", "--image", "background_image", &img])
        .assert()
        .success();

    sf().args(["--db", &db_path, "settings", "--print", "--json"])
        .assert()
        .success()
        .stdout(contains("data:image/png;base64,iVBORw=="));

    sf().args(["--db", &db_path, "settings", "--clear", "backgroundImage"])
        .assert()
        .success();

    sf().args(["--db", &db_path, "settings", "--print", "--json"])
        .assert()
        .success()
        .stdout(contains("\"backgroundImage\": null"));
}

#[test]
fn test_settings_image_rejects_non_image_key() {
    let db_path = setup_test_db("settings_image_key");
    init_db(&db_path);

    let img = temp_out("settings_image_key_src", "png");
    fs::write(&img, [1u8, 2, 3]).expect("write image");

    sf().args(["--db", &db_path, "settings", "--image", "title", &img])
        .assert()
        .failure()
        .stderr(contains("not an image setting"));
}

#[test]
fn test_settings_reset() {
    let db_path = setup_test_db("settings_reset");
    init_db(&db_path);

    sf().args(["--db", &db_path, "settings", "--set", "subtitle_font", "font-mono"])
        .assert()
        .success();

    sf().args(["--db", &db_path, "settings", "--reset", "--print", "--json"])
        .assert()
        .success()
        .stdout(contains("\"subtitleFont\": \"font-sans\""));
}

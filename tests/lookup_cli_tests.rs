use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, sf};

#[test]
fn test_find_shows_table_and_tablemates() {
    let db_path = setup_test_db("find_tablemates");
    init_db_with_data(&db_path);

    sf().args(["--db", &db_path, "find", "martinez"])
        .assert()
        .success()
        .stdout(
            contains("Find Your Seat Assignment")
                .and(contains("Jennifer Martinez"))
                .and(contains("Table 2"))
                .and(contains("David Wilson"))
                .and(contains("John Smith").not()),
        );
}

#[test]
fn test_find_blank_term_matches_nothing() {
    let db_path = setup_test_db("find_blank");
    init_db_with_data(&db_path);

    sf().args(["--db", &db_path, "find", "   "])
        .assert()
        .success()
        .stdout(contains("Type part of your name").and(contains("Your Table Assignment").not()));
}

#[test]
fn test_find_no_match() {
    let db_path = setup_test_db("find_no_match");
    init_db_with_data(&db_path);

    sf().args(["--db", &db_path, "find", "zzz"])
        .assert()
        .success()
        .stdout(contains("No guest found matching 'zzz'"));
}

#[test]
fn test_find_on_empty_store_uses_sample_guests() {
    let db_path = setup_test_db("find_sample");
    init_db(&db_path);

    sf().args(["--db", &db_path, "find", "Michelle"])
        .assert()
        .success()
        .stdout(contains("Michelle White").and(contains("Table 4")));
}

#[test]
fn test_find_respects_custom_labels() {
    let db_path = setup_test_db("find_labels");
    init_db_with_data(&db_path);

    sf().args(["--db", &db_path, "settings", "--set", "table_prefix", "Mesa"])
        .assert()
        .failure()
        .stderr(contains("Unknown settings key"));

    sf().args([
        "--db",
        &db_path,
        "settings",
        "--set",
        "table_card_table_prefix",
        "Mesa",
    ])
    .assert()
    .success();

    sf().args([
        "--db",
        &db_path,
        "settings",
        "--set",
        "tableCardCelebrationText",
        "See you on the dance floor",
    ])
    .assert()
    .success();

    sf().args(["--db", &db_path, "find", "Wilson"])
        .assert()
        .success()
        .stdout(contains("Mesa 2").and(contains("See you on the dance floor")));
}

#[test]
fn test_find_on_fresh_database_prints_no_schema_chatter() {
    let db_path = setup_test_db("find_fresh_quiet");

    sf().args(["--db", &db_path, "find", "Michelle"])
        .assert()
        .success()
        .stdout(
            contains("No guest found")
                .and(contains("Created").not())
                .and(contains("Migration applied").not()),
        );

    sf().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("schema").and(contains("migration_applied")));
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use seatfinder::core::import::CsvImport;
use seatfinder::export::{ExportFormat, ExportLogic};
use seatfinder::models::guest::Guest;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, sf, temp_out};

#[test]
fn test_import_text_persists_valid_lines() {
    let db_path = setup_test_db("import_text");
    init_db(&db_path);

    sf().args([
        "--db",
        &db_path,
        "import",
        "--text",
        "John, Smith, 1\nJane, Doe, 2\nBad Line",
    ])
    .assert()
    .success()
    .stdout(contains("Imported 2 guests").and(contains("Skipped 1 malformed line")));

    sf().args(["--db", &db_path, "list", "--view", "list"])
        .assert()
        .success()
        .stdout(contains("John Smith").and(contains("Jane Doe")));
}

#[test]
fn test_import_file() {
    let db_path = setup_test_db("import_file");
    init_db(&db_path);

    let csv_path = temp_out("import_file_src", "csv");
    fs::write(&csv_path, "Amanda, Rodriguez, 4\nChristopher, Lee, four\n").expect("write csv");

    sf().args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 1 guest"));
}

#[test]
fn test_import_nothing_valid() {
    let db_path = setup_test_db("import_nothing");
    init_db(&db_path);

    sf().args(["--db", &db_path, "import", "--text", "only,two"])
        .assert()
        .success()
        .stdout(contains("No valid lines"));
}

#[test]
fn test_import_requires_input() {
    let db_path = setup_test_db("import_no_input");
    init_db(&db_path);

    sf().args(["--db", &db_path, "import"])
        .assert()
        .failure()
        .stderr(contains("--file"));
}

#[test]
fn test_export_csv_uses_import_convention() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    sf().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "John,Smith,1");
    assert_eq!(lines[2], "Jennifer,Martinez,2");
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    sf().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = parsed.as_array().expect("array");
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0]["name"], "John Smith");
    assert_eq!(arr[0]["table_number"], 1);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    sf().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    sf().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("David,Wilson,2"));
}

#[test]
fn test_csv_export_reimports_line_for_line() {
    let out = temp_out("export_reimport", "csv");
    let guests = vec![
        Guest::new(1, "John Smith", 1),
        Guest::new(2, "Cher", 2),
        Guest::new(3, "Mary Ann, Jr", 3),
        Guest::new(4, "Mary Ann Lee", 3),
    ];

    ExportLogic::export(&guests, ExportFormat::Csv, &out, true).expect("export");

    let content = fs::read_to_string(&out).expect("read export");
    assert!(!content.contains('"'));

    let reimported = CsvImport::parse(&content, 0);
    assert_eq!(reimported.len(), content.lines().count());
    let names: Vec<&str> = reimported.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["John Smith", "Mary Ann Lee"]);
}

#[test]
fn test_csv_export_warns_about_unrepresentable_names() {
    let db_path = setup_test_db("export_warn_names");
    init_db_with_data(&db_path);
    let out = temp_out("export_warn_names", "csv");

    sf().args(["--db", &db_path, "add", "Cher", "2"])
        .assert()
        .success();

    sf().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(
            contains("1 guest not exported")
                .and(contains("Cher"))
                .and(contains("4 guests")),
        );

    let content = fs::read_to_string(&out).expect("read export");
    assert!(!content.contains("Cher"));

    sf().args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("not exported").not());
    assert!(fs::read_to_string(&out).expect("read").contains("\"Cher\""));
}

use assert_cmd::Command;

const CATALOG: &str = r#"{
    "entries": [
        {
            "handle": "dune-1984",
            "title": "Dune (1984)",
            "kind": "film",
            "plot": "A duke's son leads desert warriors against an emperor.",
            "rating": 6.3
        },
        {
            "handle": "dune-2021",
            "title": "Dune (2021)",
            "kind": "film"
        },
        {
            "handle": "expanse",
            "title": "The Expanse",
            "kind": "series",
            "episodes": [
                {
                    "handle": "expanse/1x01",
                    "season": 1,
                    "number": 1,
                    "title": "Dulcinea",
                    "aired": "2015-12-14",
                    "director": "Terry McDonough",
                    "actors": ["Thomas Jane", "Steven Strait"]
                },
                {
                    "handle": "expanse/1x02",
                    "season": 1,
                    "number": 2,
                    "title": "The Big Empty"
                }
            ]
        }
    ]
}"#;

fn medz_with(catalog_dir: &tempfile::TempDir, input: &str) -> Command {
    let catalog_path = catalog_dir.path().join("catalog.json");
    std::fs::write(&catalog_path, CATALOG).unwrap();

    let mut cmd = Command::cargo_bin("medz").unwrap();
    cmd.arg("--catalog")
        .arg(catalog_path.to_str().unwrap())
        .write_stdin(input.to_string());
    cmd
}

#[test]
fn lookup_then_details_drilldown() {
    let dir = tempfile::tempdir().unwrap();
    medz_with(&dir, "lookup dune\ndetails 1\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Found 2 results for 'dune'"))
        .stdout(predicates::str::contains("01: Dune (1984)"))
        .stdout(predicates::str::contains("02: Dune (2021)"))
        .stdout(predicates::str::contains("desert warriors"));
}

#[test]
fn episode_drilldown_on_a_series() {
    let dir = tempfile::tempdir().unwrap();
    medz_with(
        &dir,
        "lookup expanse\ndetails 1\nepisode_list\nepisode_details 1\n",
    )
    .assert()
    .success()
    .stdout(predicates::str::contains("01 Episode: 1x01 Dulcinea"))
    .stdout(predicates::str::contains("02 Episode: 1x02 The Big Empty"))
    .stdout(predicates::str::contains("Director: Terry McDonough"))
    .stdout(predicates::str::contains("Thomas Jane"));
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    medz_with(&dir, "episode_list\nbogus\ndetails 1\nlookup expanse\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("no item selected"))
        .stdout(predicates::str::contains("not a valid command"))
        .stdout(predicates::str::contains("out of range"))
        .stdout(predicates::str::contains("Found 1 results for 'expanse'"));
}

#[test]
fn settings_are_printed_on_startup_and_settable() {
    let dir = tempfile::tempdir().unwrap();
    medz_with(&dir, "set output_language de\nsettings\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Preferred metadata language"))
        .stdout(predicates::str::contains("output_language = de"));
}

#[test]
fn set_on_unknown_key_lists_valid_keys() {
    let dir = tempfile::tempdir().unwrap();
    medz_with(&dir, "set colour blue\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("no such setting 'colour'"))
        .stdout(predicates::str::contains("output_language"));
}

#[test]
fn missing_catalog_is_a_startup_error() {
    let mut cmd = Command::cargo_bin("medz").unwrap();
    cmd.arg("--catalog")
        .arg("/nonexistent/catalog.json")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

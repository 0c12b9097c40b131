use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bikeshare, bikeshare_with_config, data_dir};

#[test]
fn test_full_session_chicago() {
    let dir = data_dir();

    bikeshare(dir.path())
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("-".repeat(40)))
        .stdout(contains("1423854"))
        .stdout(contains("the most common month\n1\n"))
        .stdout(contains("the most common start hour\n8\n"))
        .stdout(contains("most commonly used start station\n\nA St\n"))
        .stdout(contains("total travel time\n\n0 days 03:00:00\n"))
        .stdout(contains("earliest birth year\n1970\n"))
        .stdout(contains("most recent birth year\n2001\n"))
        .stdout(contains("most common year of birth\n1990\n"));
}

#[test]
fn test_invalid_input_is_reprompted() {
    let dir = data_dir();

    bikeshare(dir.path())
        .write_stdin("boston\nwashington\ndecember\njune\nfunday\nwednesday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("City boston not available in data set"))
        .stdout(contains("Month december not available in data set"))
        .stdout(contains("Day funday not available in data set"))
        .stdout(contains("the most common day of week\nWednesday\n"))
        .stdout(contains("The data does not contain gender values"))
        .stdout(contains("The data does not contain birth year values"));
}

#[test]
fn test_thursday_label_has_no_leading_space() {
    let dir = data_dir();

    bikeshare(dir.path())
        .write_stdin("chicago\nmarch\nthursday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("the most common day of week\nThursday\n"))
        .stdout(contains(" Thursday").not());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = data_dir();

    bikeshare(dir.path()).write_stdin("").assert().success();
}

#[test]
fn test_missing_data_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    bikeshare(dir.path())
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("chicago.csv"));
}

#[test]
fn test_page_size_from_config() {
    let dir = data_dir();
    let conf = dir.path().join("custom.conf");
    fs::write(&conf, "page_size: 2\n").unwrap();

    bikeshare_with_config(dir.path(), &conf)
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Would you like to view 2 rows of individual trip data?"))
        .stdout(contains("955915"))
        .stdout(contains("2017-01-03 17:05:00").not())
        .stdout(contains("2017-02-06 08:15:00").not());
}

#[test]
fn test_config_print() {
    let dir = data_dir();

    bikeshare(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("page_size: 5"))
        .stdout(contains("separator_char: '-'").or(contains("separator_char: -")));
}

#[test]
fn test_config_reports_file_in_use() {
    let dir = data_dir();
    let conf = dir.path().join("custom.conf");
    fs::write(&conf, "page_size: 3\n").unwrap();

    bikeshare_with_config(dir.path(), &conf)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(format!("Configuration file: {}", conf.display())))
        .stdout(contains(".bikeshare/bikeshare.conf").not())
        .stdout(contains("page_size: 3"));
}

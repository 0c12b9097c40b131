#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Chicago-style file: unnamed index column, gender and birth year present.
///
/// Expected figures for the whole file (7 trips):
/// - month 1, Monday, hour 8
/// - start "A St", end "B St", trip A St → B St (3 times)
/// - total 3h, mean 10800s / 7
/// - Subscriber 5, Customer 2; Male 4, Female 2
/// - birth years 1970 / 2001 / 1990
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-02 08:00:00,2017-01-02 08:10:00,600,A St,B St,Subscriber,Male,1990.0
955915,2017-01-02 08:30:00,2017-01-02 08:50:00,1200,A St,B St,Subscriber,Female,1985.0
9031,2017-01-03 17:05:00,2017-01-03 17:20:00,900,B St,C St,Customer,,
304487,2017-02-06 08:15:00,2017-02-06 08:45:00,1800,C St,A St,Subscriber,Male,1990.0
45207,2017-03-02 12:00:00,2017-03-02 13:00:00,3600,A St,C St,Subscriber,Male,1970.0
1473887,2017-06-04 23:50:00,2017-06-05 00:20:00,1800,B St,B St,Customer,Female,2001.0
961916,2017-01-09 08:05:00,2017-01-09 08:20:00,900,A St,B St,Subscriber,Male,1990.0
";

pub const NEW_YORK_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
";

/// Washington has neither gender nor birth year.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Customer
";

/// Temporary data directory holding the three city files.
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_file(dir.path(), "chicago.csv", CHICAGO_CSV);
    write_file(dir.path(), "new_york_city.csv", NEW_YORK_CSV);
    write_file(dir.path(), "washington.csv", WASHINGTON_CSV);
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

/// The binary, pointed at `dir` and at a configuration file that does
/// not exist (defaults only).
pub fn bikeshare(dir: &Path) -> Command {
    bikeshare_with_config(dir, &dir.join("missing.conf"))
}

pub fn bikeshare_with_config(dir: &Path, config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bikeshare");
    cmd.arg("--data-dir")
        .arg(dir)
        .arg("--config")
        .arg(config)
        .env_remove("RUST_LOG");
    cmd
}

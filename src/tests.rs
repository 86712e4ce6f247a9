// SPDX-License-Identifier: Unlicense
use std::fs;
use std::path::{Path, PathBuf};

use expect_test::expect_file;

use crate::driver;
use crate::parser::ParseOptions;

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    text: String,
}

impl TestCase {
    fn list() -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "arith" {
                    let expected = path.with_extension("out");
                    let text = fs::read_to_string(&path).ok()?;
                    Some(Self { input: path, expected, text })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }
}

#[test]
fn run_with_graph() {
    let cases = TestCase::list();
    assert!(!cases.is_empty());

    for case in cases {
        let mut out = Vec::new();
        driver::run(&case.text, &ParseOptions::default(), true, &mut out)
            .unwrap_or_else(|err| panic!("{}: {err:#}", case.input.display()));
        let actual = String::from_utf8(out).unwrap();
        expect_file![&case.expected].assert_eq(&actual);
    }
}

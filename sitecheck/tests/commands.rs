// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! End-to-end tests of the sitecheck commands with in-memory fetchers.

use std::collections::HashMap;
use std::io;
use std::io::Write;

use sitecheck::cli::Command;
use sitecheck::config::FetchConfig;
use sitecheck::fetch::{FetchError, Fetched, Fetcher, FileFetcher};
use sitecheck::output::Painter;
use sitecheck::{run, Outcome, SiteCheckError};

/// Serves fixed responses; unknown targets are unreachable.
struct MapFetcher(HashMap<&'static str, Fetched>);

impl MapFetcher {
    fn new() -> Self {
        let mut constant = vec![b'A'; 10000];
        let mut map = HashMap::new();
        map.insert(
            "hello",
            Fetched {
                status: 200,
                body: b"Hello, World!\n".to_vec(),
            },
        );
        map.insert(
            "constant",
            Fetched {
                status: 200,
                body: constant.clone(),
            },
        );
        constant[5000] = b'B';
        map.insert(
            "modified",
            Fetched {
                status: 200,
                body: constant,
            },
        );
        map.insert(
            "empty",
            Fetched {
                status: 200,
                body: Vec::new(),
            },
        );
        map.insert(
            "gone",
            Fetched {
                status: 404,
                body: Vec::new(),
            },
        );
        MapFetcher(map)
    }
}

impl Fetcher for MapFetcher {
    fn fetch(&self, target: &str) -> Result<Fetched, FetchError> {
        self.0.get(target).cloned().ok_or_else(|| FetchError::Unreachable {
            target: target.to_string(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
        })
    }
}

fn run_plain(command: Command) -> (Result<Outcome, SiteCheckError>, String) {
    let mut out = Vec::new();
    let result = run(&command, &MapFetcher::new(), &Painter::plain(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn hash_prints_fingerprints_in_order() {
    let (result, out) = run_plain(Command::Hash {
        targets: vec!["hello".into(), "constant".into(), "empty".into()],
    });
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(
        out,
        "[200] for hello: 3:OOVUd:Ov\n\
         [200] for constant: 192:oFFFFFFFFFFFFF6:oFFFFFF6\n\
         [200] for empty: 3::\n"
    );
}

#[test]
fn hash_skips_failure_status() {
    let (result, out) = run_plain(Command::Hash {
        targets: vec!["gone".into(), "hello".into()],
    });
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out, "[404] for gone: skipped\n[200] for hello: 3:OOVUd:Ov\n");
}

#[test]
fn hash_reports_unreachable() {
    let (result, out) = run_plain(Command::Hash {
        targets: vec!["hello".into(), "nowhere".into()],
    });
    assert_eq!(result.unwrap(), Outcome::FetchFailed);
    assert_eq!(
        out,
        "[200] for hello: 3:OOVUd:Ov\n[✗] Unreachable site: nowhere\n"
    );
}

#[test]
fn check_verdicts() {
    for (target, previous, verdict) in [
        ("constant", "192:oFFFFFFFFFFFFF6:oFFFFFF6", "Unchanged"),
        ("modified", "192:oFFFFFFFFFFFFF6:oFFFFFF6", "Modified Slightly"),
        ("hello", "192:oFFFFFFFFFFFFF6:oFFFFFF6", "Changed Completely"),
        ("empty", "3::", "Unchanged"),
    ] {
        let (result, out) = run_plain(Command::Check {
            target: target.into(),
            previous: previous.into(),
        });
        assert_eq!(result.unwrap(), Outcome::Success);
        assert_eq!(out, format!("[200] for {target}: {verdict}\n"));
    }
}

#[test]
fn check_unreachable_and_skipped() {
    let (result, out) = run_plain(Command::Check {
        target: "nowhere".into(),
        previous: "3::".into(),
    });
    assert_eq!(result.unwrap(), Outcome::FetchFailed);
    assert_eq!(out, "[✗] Unreachable site: nowhere\n");

    let (result, out) = run_plain(Command::Check {
        target: "gone".into(),
        previous: "3::".into(),
    });
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out, "[404] for gone: skipped\n");
}

#[test]
fn check_rejects_malformed_previous() {
    let (result, out) = run_plain(Command::Check {
        target: "hello".into(),
        previous: "not a fingerprint".into(),
    });
    assert!(matches!(
        result,
        Err(SiteCheckError::InvalidFingerprint { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn compare_scores() {
    let (result, out) = run_plain(Command::Compare {
        lhs: "192:oFFFFFFFFFFFFF6:oFFFFFF6".into(),
        rhs: "192:oFFFFFFkFFFFFF6:oFFFkFF6".into(),
    });
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out, "93 Modified Slightly\n");

    let (result, _) = run_plain(Command::Compare {
        lhs: "3::".into(),
        rhs: "3:".into(),
    });
    assert!(matches!(
        result,
        Err(SiteCheckError::InvalidFingerprint { .. })
    ));
}

#[test]
fn file_fetcher_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"Hello, World!\n")
        .unwrap();
    let target = path.to_str().unwrap().to_string();
    let fetcher = FileFetcher::new(FetchConfig::default());

    let mut out = Vec::new();
    let outcome = run(
        &Command::Check {
            target: target.clone(),
            previous: "3:OOVUd:Ov".into(),
        },
        &fetcher,
        &Painter::plain(),
        &mut out,
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(String::from_utf8(out).unwrap(), format!("[200] for {target}: Unchanged\n"));

    let small = FileFetcher::new(FetchConfig { max_bytes: 4 });
    let mut out = Vec::new();
    let outcome = run(
        &Command::Hash {
            targets: vec![target.clone()],
        },
        &small,
        &Painter::plain(),
        &mut out,
    )
    .unwrap();
    assert_eq!(outcome, Outcome::FetchFailed);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("[✗] Too large (over 4 bytes): {target}\n")
    );
}

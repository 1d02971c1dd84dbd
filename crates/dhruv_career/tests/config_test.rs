//! Integration tests for loading configuration files.

use std::io::Write;

use dhruv_career::{CareerConfig, CareerError};
use tempfile::NamedTempFile;

fn file(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f
}

/// Missing sections and keys fall back to defaults.
#[test]
fn partial_file_keeps_defaults() {
    let f = file("[dasha]\ntotal_years = 80.0\n\n[profession]\ntop_n = 3\n");
    let cfg = CareerConfig::load(f.path()).unwrap();
    assert_eq!(cfg.dasha.total_years, 80.0);
    assert_eq!(cfg.profession.top_n, 3);
    assert_eq!(cfg.profession.reasons_per_profession, 3);
    assert_eq!(cfg.cache.chart_ttl_secs, 3600);
    assert_eq!(cfg.log.level, "info");
}

/// No path means defaults; a missing file is an I/O error.
#[test]
fn optional_path() {
    assert_eq!(CareerConfig::load_or_default(None).unwrap(), CareerConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(matches!(
        CareerConfig::load(&missing),
        Err(CareerError::Io(_))
    ));
}

/// Invalid values are rejected with the file named.
#[test]
fn invalid_values_name_the_file() {
    let f = file("[dasha]\ntotal_years = -5.0\n");
    match CareerConfig::load(f.path()) {
        Err(CareerError::Config { path, .. }) => assert_eq!(path, f.path()),
        other => panic!("expected config error, got {other:?}"),
    }

    let f = file("[log]\nlevel = \"loud\"\n");
    assert!(matches!(
        CareerConfig::load(f.path()),
        Err(CareerError::Config { .. })
    ));

    let f = file("[dasha\n");
    assert!(matches!(
        CareerConfig::load(f.path()),
        Err(CareerError::Config { .. })
    ));
}

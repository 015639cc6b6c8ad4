//! Integration tests for configuration loading

use synthfs::config::{ConfigLoader, SynthConfig};
use synthfs::spec::SizeGauge;
use tempfile::TempDir;

#[test]
fn test_config_file_sections_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("synthfs-test.toml");
    std::fs::write(
        &config_file,
        r#"
[build]
seed = 1234
default_gauge = "small"
write_chunk_size = 4096

[scan]
placeholder = "<dataset>"

[logging]
level = "warn"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.build.seed, Some(1234));
    assert_eq!(config.build.default_gauge, Some(SizeGauge::Small));
    assert_eq!(config.build.write_chunk_size, 4096);
    assert_eq!(config.scan.placeholder, "<dataset>");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[build]\nwrite_chunk_size = 0\n").unwrap();

    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_printed_config_loads_back() {
    let mut config = SynthConfig::default();
    config.build.seed = Some(99);
    config.build.default_gauge = Some(SizeGauge::Tiny);
    let text = config.to_toml().unwrap();

    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("printed.toml");
    std::fs::write(&config_file, text).unwrap();

    let loaded = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(loaded.build.seed, Some(99));
    assert_eq!(loaded.build.default_gauge, Some(SizeGauge::Tiny));
    assert_eq!(loaded.scan.placeholder, config.scan.placeholder);
}

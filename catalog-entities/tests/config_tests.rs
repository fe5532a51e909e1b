mod common;

use catalog_entities::{CatalogConfig, CatalogError, capitalize_first_letter_only};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn parses_theme_and_platforms() {
    let config = CatalogConfig::from_toml_str(
        r##"
        [theme]
        highlight_color = "#ff0000"

        [platforms.mssql]
        display_name = "SQL Server"
        logo_url = "/assets/mssql.png"
        "##,
    )
    .unwrap();

    assert_eq!(config.theme.highlight_color, "#ff0000");
    assert_eq!(config.theme.default_color, "#BFBFBF");
    assert_eq!(config.theme.preview_icon_size, 14);
    let mssql = &config.platforms["mssql"];
    assert_eq!(mssql.display_name.as_deref(), Some("SQL Server"));
    assert_eq!(mssql.logo_url.as_deref(), Some("/assets/mssql.png"));
}

#[test]
fn empty_document_is_default() {
    assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
}

#[test]
fn rejects_non_hex_colors() {
    let err = CatalogConfig::from_toml_str("[theme]\ndefault_color = \"gray\"\n").unwrap_err();
    assert!(matches!(err, CatalogError::ConfigInvalid(msg) if msg.contains("default_color")));

    for bad in ["#zz", "#", "#12345", "#bfbfbg"] {
        let toml = format!("[theme]\nhighlight_color = \"{bad}\"\n");
        let err = CatalogConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigInvalid(msg) if msg.contains("highlight_color")));
    }
    for good in ["#fff", "#FFFA", "#d6246c", "#d6246cff"] {
        let toml = format!("[theme]\nhighlight_color = \"{good}\"\n");
        assert!(CatalogConfig::from_toml_str(&toml).is_ok(), "{good} should be accepted");
    }
}

#[test]
fn rejects_zero_icon_size() {
    let err = CatalogConfig::from_toml_str("[theme]\npreview_icon_size = 0\n").unwrap_err();
    assert!(matches!(err, CatalogError::ConfigInvalid(_)));
}

#[test]
fn malformed_toml_is_an_error() {
    let err = CatalogConfig::from_toml_str("[theme\n").unwrap_err();
    assert!(matches!(err, CatalogError::TomlDeserialize(_)));
}

// ── load_from ────────────────────────────────────────────────────

#[test]
fn missing_file_falls_back_to_defaults() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig::load_from(&dir.path().join("catalog.toml"));
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn loads_file_from_disk() {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[platforms.snowflake]\ndisplay_name = \"Snowflake\"").unwrap();

    let config = CatalogConfig::load_from(file.path());
    assert_eq!(
        config.platforms["snowflake"].display_name.as_deref(),
        Some("Snowflake")
    );
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme]\nhighlight_color = \"red\"").unwrap();
    assert_eq!(CatalogConfig::load_from(file.path()), CatalogConfig::default());
}

// ── Helpers ──────────────────────────────────────────────────────

#[test]
fn capitalizes_only_first_letter() {
    assert_eq!(capitalize_first_letter_only("mssql"), "Mssql");
    assert_eq!(capitalize_first_letter_only("sqlServer"), "SqlServer");
    assert_eq!(capitalize_first_letter_only(""), "");
    assert_eq!(capitalize_first_letter_only("émile"), "Émile");
}

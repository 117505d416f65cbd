use image::Rgb;
use kamerai_icons::config::{parse_color, Density, IconConfig, Palette, GRADIENT_START};
use tempfile::TempDir;

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("icons.json");
    std::fs::write(&path, json).expect("Failed to write config");
    path
}

#[test]
fn test_builtin_density_table() {
    let config = IconConfig::builtin().expect("built-in config should load");

    let table: Vec<(&str, u32)> = config
        .densities
        .iter()
        .map(|d| (d.name.as_str(), d.size))
        .collect();
    assert_eq!(
        table,
        vec![
            ("mdpi", 48),
            ("hdpi", 72),
            ("xhdpi", 96),
            ("xxhdpi", 144),
            ("xxxhdpi", 192)
        ]
    );
    assert_eq!(config.palette, Palette::default());
}

#[test]
fn test_parse_css_colors() {
    assert_eq!(parse_color("#6200EE").unwrap(), GRADIENT_START);
    assert_eq!(parse_color("#fff").unwrap(), Rgb([255, 255, 255]));
    assert!(parse_color("not-a-color").is_err());
}

#[test]
fn test_config_file_overrides_palette_only() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&dir, r##"{ "palette": { "gradient_start": "#ff0000" } }"##);

    let config = IconConfig::load(&path).expect("config should load");
    assert_eq!(config.palette.gradient_start, Rgb([255, 0, 0]));
    assert_eq!(config.palette.gradient_end, Palette::default().gradient_end);
    assert_eq!(config.densities.len(), 5);
}

#[test]
fn test_config_file_overrides_densities() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(
        &dir,
        r#"{ "densities": [{ "name": "xhdpi", "size": 96 }, { "name": "tv", "size": 160 }] }"#,
    );

    let config = IconConfig::load(&path).expect("config should load");
    assert_eq!(
        config.densities,
        vec![
            Density {
                name: "xhdpi".to_string(),
                size: 96
            },
            Density {
                name: "tv".to_string(),
                size: 160
            },
        ]
    );
}

#[test]
fn test_config_rejects_unsupported_sizes() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    for json in [
        r#"{ "densities": [{ "name": "huge", "size": 512 }] }"#,
        r#"{ "densities": [{ "name": "tiny", "size": 16 }] }"#,
        r#"{ "densities": [] }"#,
        r#"{ "densities": [{ "name": "mdpi", "size": 48 }, { "name": "mdpi", "size": 72 }] }"#,
        r#"{ "densities": [{ "name": " ", "size": 48 }] }"#,
        r#"{ "palette": { "white": "bogus" } }"#,
        r#"{ "sizes": [] }"#,
        "not json",
    ] {
        let path = write_config(&dir, json);
        assert!(
            IconConfig::load(&path).is_err(),
            "config should be rejected: {json}"
        );
    }
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let err = IconConfig::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg = GeneratorConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, GeneratorConfig::default());
    assert_eq!(cfg.background_limit, 45);
    assert_eq!(cfg.jpeg_quality, 95);
    assert_eq!(cfg.backgrounds_dir, PathBuf::from("img/background_samples"));
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_overrides_nested_fields() {
    let json = r#"{ "seed": 9, "augment": { "max_angle_deg": 10.0 } }"#;
    let cfg = GeneratorConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.augment.max_angle_deg, 10.0);
    assert_eq!(cfg.augment.max_scale_ratio, 0.2);
    assert_eq!(cfg.random_source().seed(), Some(9));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GeneratorConfig::from_reader(r#"{ "sed": 1 }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn validate_rejects_out_of_range_values() {
    let cfg = GeneratorConfig {
        background_limit: 0,
        ..GeneratorConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = GeneratorConfig {
        jpeg_quality: 101,
        ..GeneratorConfig::default()
    };
    assert!(cfg.validate().is_err());

    let mut cfg = GeneratorConfig::default();
    cfg.augment.max_scale_ratio = 1.5;
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = GeneratorConfig::from_path("target/definitely/missing/config.json").unwrap_err();
    assert!(matches!(err, AugmentError::Validation(_)));
}

#[test]
fn directories_parse_from_json() {
    let json = r#"{ "cards_dir": "in/cards", "output_dir": "out" }"#;
    let cfg = GeneratorConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.cards_dir, Some(PathBuf::from("in/cards")));
    assert_eq!(cfg.output_dir, Some(PathBuf::from("out")));
    assert_eq!(GeneratorConfig::default().cards_dir, None);
}

#[test]
fn command_line_directories_take_precedence() {
    let cfg = GeneratorConfig {
        cards_dir: Some(PathBuf::from("cfg/cards")),
        output_dir: Some(PathBuf::from("cfg/out")),
        ..GeneratorConfig::default()
    };

    let (cards, out) = cfg
        .resolve_dirs(Some(PathBuf::from("cli/cards")), None)
        .unwrap();
    assert_eq!(cards, PathBuf::from("cli/cards"));
    assert_eq!(out, PathBuf::from("cfg/out"));

    let (cards, out) = cfg
        .resolve_dirs(None, Some(PathBuf::from("cli/out")))
        .unwrap();
    assert_eq!(cards, PathBuf::from("cfg/cards"));
    assert_eq!(out, PathBuf::from("cli/out"));
}

#[test]
fn unresolved_directories_are_validation_errors() {
    let cfg = GeneratorConfig::default();
    let err = cfg.resolve_dirs(None, Some(PathBuf::from("out"))).unwrap_err();
    assert!(matches!(err, AugmentError::Validation(_)));
    let err = cfg.resolve_dirs(Some(PathBuf::from("cards")), None).unwrap_err();
    assert!(matches!(err, AugmentError::Validation(_)));
}

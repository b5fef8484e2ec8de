use rust_parking::facility::config::{CommandLineArgs, Config, Logging};
use std::fs;
use std::path::PathBuf;

#[test]
fn parse_empty_modules() {
    let config: Config = serde_yaml::from_str("modules: {}").unwrap();
    assert_eq!(None, config.modules.facility);
    assert_eq!(None, config.modules.output);
}

#[test]
fn parse_all_modules() {
    let yaml = fs::read_to_string("tests/resources/config/example.yml").unwrap();
    let config: Config = serde_yaml::from_str(&yaml).unwrap();

    let facility = config.modules.facility.unwrap();
    assert_eq!(Some(6), facility.capacity);

    let output = config.modules.output.unwrap();
    assert_eq!(PathBuf::from("./test_output"), output.output_dir);
    assert_eq!(Logging::Info, output.logging);
}

#[test]
fn missing_output_fields_fall_back_to_defaults() {
    let config: Config = serde_yaml::from_str("modules:\n  output: {}").unwrap();

    let output = config.modules.output.unwrap();
    assert_eq!(PathBuf::from("./output"), output.output_dir);
    assert_eq!(Logging::None, output.logging);
}

#[test]
fn roundtrip_serialize_deserialize() {
    let yaml = fs::read_to_string("tests/resources/config/example.yml").unwrap();
    let config: Config = serde_yaml::from_str(&yaml).unwrap();
    let serialized = serde_yaml::to_string(&config).unwrap();
    let roundtripped: Config = serde_yaml::from_str(&serialized).unwrap();
    assert_eq!(config, roundtripped);
}

#[test]
fn command_line_overrides_win_over_the_config_file() {
    let mut args = CommandLineArgs::new_with_path("tests/resources/config/example.yml");
    args.overrides = vec![
        ("facility.capacity".to_string(), "12".to_string()),
        ("output.logging".to_string(), "None".to_string()),
    ];

    let config = Config::from(args);
    assert_eq!(Some(12), config.facility().unwrap().capacity);
    assert_eq!(Logging::None, config.output().logging);
}

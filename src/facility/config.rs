use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    #[arg(long = "set", value_parser = parse_key_val)]
    pub overrides: Vec<(String, String)>,
}

impl CommandLineArgs {
    pub fn new_with_path(path: impl Into<PathBuf>) -> Self {
        CommandLineArgs {
            config: Some(path.into()),
            overrides: Vec::new(),
        }
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s.find('=');
    match pos {
        Some(pos) => Ok((s[..pos].to_string(), s[pos + 1..].to_string())),
        None => Err(format!("invalid KEY=VALUE: no `=` found in `{}`", s)),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub modules: Modules,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Modules {
    #[serde(default)]
    pub facility: Option<Facility>,
    #[serde(default)]
    pub output: Option<Output>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Facility {
    /// When set, the facility is created with this capacity at startup
    /// instead of waiting for a `create_parking_lot` command.
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Output {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            output_dir: default_output_dir(),
            logging: Logging::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Logging {
    Info,
    #[default]
    None,
}

impl From<CommandLineArgs> for Config {
    fn from(args: CommandLineArgs) -> Self {
        let mut config = match &args.config {
            Some(path) => Config::from_file(path),
            None => Config::default(),
        };
        config.apply_overrides(&args.overrides);
        config
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Self {
        let file = File::open(path).unwrap_or_else(|e| {
            panic!("Failed to open config at {:?}. Original error was: {}", path, e)
        });
        serde_yaml::from_reader(BufReader::new(file)).unwrap_or_else(|e| {
            panic!("Failed to parse config at {:?}. Original error was: {}", path, e)
        })
    }

    /// Apply generic key-value overrides to the config, e.g. facility.capacity=6
    pub fn apply_overrides(&mut self, overrides: &[(String, String)]) {
        if overrides.is_empty() {
            return;
        }
        info!("Applying overrides: {:?}", overrides);

        for (key, value) in overrides {
            match key.as_str() {
                "facility.capacity" => {
                    let capacity = value.parse().unwrap_or_else(|e| {
                        panic!("Invalid value `{}` for facility.capacity: {}", value, e)
                    });
                    self.modules.facility.get_or_insert_with(Default::default).capacity =
                        Some(capacity);
                }
                "output.logging" => {
                    let logging = serde_yaml::from_str(value).unwrap_or_else(|e| {
                        panic!("Invalid value `{}` for output.logging: {}", value, e)
                    });
                    self.modules.output.get_or_insert_with(Default::default).logging = logging;
                }
                "output.output_dir" => {
                    self.modules.output.get_or_insert_with(Default::default).output_dir =
                        PathBuf::from(value);
                }
                _ => warn!("No override handler found for key: {}", key),
            }
        }
    }

    pub fn facility(&self) -> Option<&Facility> {
        self.modules.facility.as_ref()
    }

    pub fn output(&self) -> Output {
        self.modules.output.clone().unwrap_or_default()
    }
}

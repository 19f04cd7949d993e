use std::{borrow::Cow, path::Path, string::FromUtf8Error};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::filesystem::{DEFAULT_USER, DEFAULT_WELCOME, Seed};

const DEFAULT_HOSTNAME: &str = "localhost";

const KNOWN_KEYS: [&str; 4] = ["user", "hostname", "welcome", "files"];

/// Session settings read from an optional YAML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub user: String,
    pub hostname: String,
    pub welcome: Option<String>,
    pub files: Vec<(String, String)>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            user: DEFAULT_USER.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            welcome: None,
            files: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub async fn read(path: &Path) -> Result<Self, ShellConfigError> {
        debug!("Opening config file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    /// The tree a session configured this way starts with.
    pub fn seed(&self) -> Seed {
        Seed {
            user: self.user.clone(),
            welcome: self
                .welcome
                .clone()
                .unwrap_or_else(|| DEFAULT_WELCOME.to_string()),
            files: self.files.clone(),
        }
    }

    fn string_field(
        top_level: &LinkedHashMap<Yaml, Yaml>,
        field: &'static str,
    ) -> Result<Option<String>, ShellConfigError> {
        match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(field)))) {
            None | Some(Yaml::Value(Scalar::Null)) => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .context(FieldNotStringSnafu { field }),
        }
    }

    fn parse_files(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Vec<(String, String)>, ShellConfigError> {
        let files = match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed("files")))) {
            None | Some(Yaml::Value(Scalar::Null)) => return Ok(Vec::new()),
            Some(files) => files.as_mapping().context(FilesNotMapSnafu)?,
        };

        files
            .iter()
            .map(|(key, value)| {
                let path = key.as_str().context(FieldNotStringSnafu { field: "files" })?;
                let content = match value {
                    Yaml::Value(Scalar::Null) => "",
                    other => other.as_str().context(FileContentNotStringSnafu { path })?,
                };
                Ok::<_, ShellConfigError>((path.to_string(), content.to_string()))
            })
            .collect()
    }
}

impl TryFrom<&str> for ShellConfig {
    type Error = ShellConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedConfigSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        for key in top_level.keys() {
            match key.as_str() {
                Some(name) if KNOWN_KEYS.contains(&name) => {}
                _ => warn!("Ignoring unknown config key: {:?}", key),
            }
        }

        let defaults = ShellConfig::default();
        let user = Self::string_field(top_level, "user")?.unwrap_or(defaults.user);
        ensure!(
            !user.is_empty() && !user.contains('/') && user != "." && user != "..",
            InvalidUserSnafu { user }
        );

        Ok(ShellConfig {
            user,
            hostname: Self::string_field(top_level, "hostname")?.unwrap_or(defaults.hostname),
            welcome: Self::string_field(top_level, "welcome")?,
            files: Self::parse_files(top_level)?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ShellConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Config file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Config field '{}' should be a string", field))]
    FieldNotString { field: &'static str },
    #[snafu(display("Files section should be a map"))]
    FilesNotMap,
    #[snafu(display("Content of seed file '{}' should be a string", path))]
    FileContentNotString { path: String },
    #[snafu(display("'{}' is not a usable user name", user))]
    InvalidUser { user: String },
}

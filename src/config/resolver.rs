use super::{Config, EnvOverrides};
use crate::error::{AppError, ConfigError, FileError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File names probed in every search directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["config.yaml", "config.yml"];

/// `<platform config dir>/gscloud`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gscloud"))
}

/// Where `make-config` writes when no `--config` is given
pub fn default_config_path() -> Result<PathBuf, FileError> {
    default_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAMES[0]))
        .ok_or(FileError::ConfigDirNotFound)
}

/// Locates, loads and env-overlays the configuration once per invocation
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    search_dirs: Vec<PathBuf>,
    env: EnvOverrides,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Platform config directory first, then the working directory
    pub fn new() -> Self {
        let search_dirs = default_config_dir()
            .into_iter()
            .chain(std::env::current_dir().ok())
            .collect();

        Self {
            search_dirs,
            env: EnvOverrides::from_env(),
        }
    }

    pub fn with_search_dirs(mut self, search_dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = search_dirs;
        self
    }

    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        self.env = env;
        self
    }

    /// Resolve the configuration.
    ///
    /// `exempt` commands tolerate any path error on the explicit file
    /// (missing, a directory, no permission) and get an empty configuration
    /// instead. A file that was read but does not parse is fatal for every
    /// command.
    pub fn resolve(&self, explicit: Option<&Path>, exempt: bool) -> Result<Config, AppError> {
        let config = match explicit {
            Some(path) => match Self::load_file(path) {
                Ok(config) => config,
                Err(AppError::Config(ConfigError::FileNotFound { .. }))
                | Err(AppError::File(FileError::Io { .. }))
                    if exempt =>
                {
                    tracing::debug!(path = %path.display(), "config file unavailable, continuing without it");
                    Config::default()
                }
                Err(e) => return Err(e),
            },
            None => match self.find_in_search_path() {
                Some(path) => Self::load_file(&path)?,
                None => {
                    tracing::debug!("no config file found in search path");
                    Config::default()
                }
            },
        };

        if let Some(source) = config.source() {
            tracing::debug!(path = %source.display(), accounts = config.accounts.len(), "loaded config");
        }

        Ok(config.with_env(self.env.clone()))
    }

    fn find_in_search_path(&self) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }

    fn load_file(path: &Path) -> Result<Config, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            let display = path.to_string_lossy().to_string();
            if matches!(source.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) {
                AppError::Config(ConfigError::FileNotFound {
                    path: display,
                    hint: "Run 'gscloud make-config' to create a configuration file".to_string(),
                })
            } else {
                AppError::File(FileError::Io {
                    path: display,
                    source,
                })
            }
        })?;

        Ok(Config::from_yaml(&content, path)?)
    }
}

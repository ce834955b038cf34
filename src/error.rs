use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("FileError: {0}")]
    File(#[from] FileError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Authentication failed: {server_message}")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String, hint: String },
    #[error("Configuration file {path} could not be parsed: {message}")]
    Parse { path: String, message: String },
    #[error("Account '{name}' not found in configuration")]
    AccountNotFound { name: String, available: Vec<String> },
    #[error("Configuration field '{field}' is missing for account '{account}'")]
    MissingField { account: String, field: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("File already exists: {path}")]
    AlreadyExists { path: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("JSON serialization failed: {0}")]
    Json(String),
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

impl AppError {
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::FileNotFound { hint, .. }) => Some(hint.clone()),
            AppError::Config(ConfigError::AccountNotFound { available, .. }) => {
                if available.is_empty() {
                    Some("Run 'gscloud make-config' to create a configuration file".to_string())
                } else {
                    Some(format!(
                        "Known accounts: {}. Select one with --account",
                        available.join(", ")
                    ))
                }
            }
            AppError::Config(ConfigError::MissingField { field, .. }) => Some(format!(
                "Set '{}' in the configuration file or via the matching GRIDSCALE_* variable",
                field
            )),
            AppError::Api(ApiError::Unauthorized { .. }) => {
                Some("Check userId and token of the selected account".to_string())
            }
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check your network connection and try again".to_string())
            }
            AppError::File(FileError::AlreadyExists { .. }) => {
                Some("Edit the existing file or pass a different --config path".to_string())
            }
            _ => None,
        }
    }
}

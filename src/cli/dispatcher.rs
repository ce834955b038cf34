use crate::cli::command_handlers::{MetaHandler, StorageHandler};
use crate::cli::main_types::{Cli, Commands};
use crate::config::ConfigResolver;
use crate::core::runtime::Runtime;
use crate::display::RenderOptions;
use crate::error::AppError;
use std::io::Write;
use std::path::PathBuf;

/// Routes a parsed command to its handler.
///
/// Configuration is resolved once per invocation. Only commands that need an
/// account get a [`Runtime`]; the others run even without a config file.
pub struct Dispatcher {
    options: RenderOptions,
    config_path: Option<PathBuf>,
    account: String,
    resolver: ConfigResolver,
}

impl Dispatcher {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            options: cli.render_options(),
            config_path: cli.config.clone(),
            account: cli.account.clone(),
            resolver: ConfigResolver::new(),
        }
    }

    pub fn with_resolver(mut self, resolver: ConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub async fn dispatch(&self, command: Commands, out: &mut dyn Write) -> Result<(), AppError> {
        let exempt = !command.needs_config();
        let config = self
            .resolver
            .resolve(self.config_path.as_deref(), exempt)?;

        match command {
            Commands::Storage { command } => {
                let runtime = Runtime::new(&config, &self.account)?;
                command.pre_run()?;
                StorageHandler::new(self.options)
                    .handle(command, &runtime, out)
                    .await
            }
            Commands::MakeConfig => MetaHandler::make_config(self.config_path.as_deref(), out),
            Commands::Version => MetaHandler::version(out),
            Commands::Manpage { dir } => MetaHandler::manpage(&dir, out),
            Commands::Completion { shell } => MetaHandler::completion(shell, out),
        }
    }
}

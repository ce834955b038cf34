use crate::api::models::Storage;
use crate::api::resource::ObjectApi;
use crate::cli::main_types::{Cli, StorageCommands};
use crate::config::Config;
use crate::config::resolver::default_config_path;
use crate::core::runtime::Runtime;
use crate::core::services::{StorageService, UpdateOutcome};
use crate::display::{RenderOptions, TableData, render_json, render_output};
use crate::error::{AppError, DisplayError, FileError};
use crate::utils::file::{ensure_directory_exists, write_new_file};
use chrono::Local;
use clap::{Command, CommandFactory};
use std::io::Write;
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "gscloud";

/// Write rendered output, mapping I/O failures to a display error
fn emit(out: &mut dyn Write, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| DisplayError::TerminalOutput(e.to_string()).into())
}

/// Table layout of `storage ls`
pub fn storage_table(storages: &[Storage]) -> TableData {
    let mut data = TableData::new(["id", "name", "capacity", "changed", "status"]);
    for storage in storages {
        data.push_row(vec![
            storage.object_uuid.clone(),
            storage.name.clone(),
            storage.capacity.to_string(),
            storage.change_time.with_timezone(&Local).to_rfc3339(),
            storage.status.clone(),
        ]);
    }
    data
}

pub struct StorageHandler {
    options: RenderOptions,
}

impl StorageHandler {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub async fn handle<C: ObjectApi>(
        &self,
        command: StorageCommands,
        runtime: &Runtime<C>,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let service = StorageService::new(runtime);

        match command {
            StorageCommands::Ls => {
                let storages = service.list().await?;
                tracing::debug!(count = storages.len(), account = runtime.account(), "listed storages");
                let rendered =
                    render_output(storages.as_slice(), storage_table, &self.options)?;
                emit(out, &rendered)
            }
            StorageCommands::Set(args) => {
                let changes = args.changes()?;
                match service.update(&args.id, changes).await? {
                    UpdateOutcome::Blocked { warning } => {
                        // Printed regardless of the log filter
                        eprintln!("Warning: {}", warning);
                        tracing::debug!(id = %args.id, "capacity change skipped");
                    }
                    UpdateOutcome::Applied(request) => {
                        tracing::debug!(id = %args.id, ?request, "storage updated");
                    }
                }
                Ok(())
            }
            StorageCommands::Rm { id } => {
                service.remove(&id).await?;
                tracing::debug!(%id, "storage removed");
                Ok(())
            }
            StorageCommands::Create(args) => {
                let request = args.request()?;
                let created = service.create(&request).await?;
                if self.options.json {
                    emit(out, &render_json(&created)?)
                } else {
                    emit(out, &format!("{}\n", created.object_uuid))
                }
            }
        }
    }
}

/// Commands that work without an account
pub struct MetaHandler;

impl MetaHandler {
    /// Write the configuration template; never overwrites an existing file
    pub fn make_config(config_path: Option<&Path>, out: &mut dyn Write) -> Result<(), AppError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        let contents = Config::template().to_yaml()?;
        write_new_file(&path, &contents)?;
        tracing::debug!(path = %path.display(), "wrote config template");
        emit(out, &format!("Written: {}\n", path.display()))
    }

    pub fn version(out: &mut dyn Write) -> Result<(), AppError> {
        emit(out, &format!("{} {}\n", BIN_NAME, env!("CARGO_PKG_VERSION")))
    }

    /// One plain-text page per command, named after its path, e.g.
    /// `gscloud-storage-ls.txt`
    pub fn manpage(dir: &Path, out: &mut dyn Write) -> Result<(), AppError> {
        ensure_directory_exists(dir)?;

        let mut command = Cli::command();
        command.build();

        let mut written = Vec::new();
        write_pages(&mut command, BIN_NAME, dir, &mut written)?;
        for path in &written {
            emit(out, &format!("{}\n", path.display()))?;
        }
        Ok(())
    }

    pub fn completion(shell: clap_complete::Shell, out: &mut dyn Write) -> Result<(), AppError> {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, BIN_NAME, out);
        Ok(())
    }
}

fn write_pages(
    command: &mut Command,
    page_name: &str,
    dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<(), AppError> {
    let path = dir.join(format!("{}.txt", page_name));
    let page = command.render_long_help().to_string();
    std::fs::write(&path, page).map_err(|source| FileError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    written.push(path);

    for sub in command.get_subcommands_mut() {
        if sub.get_name() == "help" {
            continue;
        }
        let sub_name = format!("{}-{}", page_name, sub.get_name());
        write_pages(sub, &sub_name, dir, written)?;
    }
    Ok(())
}

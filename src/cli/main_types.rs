use crate::api::models::StorageCreateRequest;
use crate::config::DEFAULT_ACCOUNT;
use crate::core::guard::STORAGE_CAPACITY_SHRINK;
use crate::core::services::StorageChanges;
use crate::display::RenderOptions;
use crate::error::CliError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gscloud")]
#[command(about = "the CLI for the gridscale cloud")]
#[command(
    long_about = "gscloud lets you manage objects on gridscale.io via command line. It provides a Docker-CLI comparable command line that allows you to create, manipulate, and remove objects on gridscale.io."
)]
#[command(version)]
#[command(after_help = "Examples:
  gscloud storage ls                          # List storages
  gscloud storage ls --quiet                  # List storage IDs only
  gscloud --account prod storage ls --json    # List storages of account 'prod' as JSON
  gscloud storage set --capacity 20 <ID>      # Grow a storage to 20 GB
  gscloud make-config                         # Write a configuration template

Environment Variables:
  GRIDSCALE_ACCOUNT   Account to use (same as --account)
  GRIDSCALE_UUID      Overrides the account's userId
  GRIDSCALE_TOKEN     Overrides the account's token
  GRIDSCALE_URL       Overrides the account's API URL
  GSCLOUD_LOG         Log filter, e.g. 'debug'")]
pub struct Cli {
    /// Specify a configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Specify the account used
    #[arg(long, global = true, default_value = DEFAULT_ACCOUNT, env = "GRIDSCALE_ACCOUNT")]
    pub account: String,

    /// Print JSON to stdout instead of a table
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Do not print column headings
    #[arg(long, global = true)]
    pub noheading: bool,

    /// Print only IDs of objects
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_json(self.json)
            .with_no_header(self.noheading)
            .with_quiet(self.quiet)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Operations on storages
    #[command(long_about = "List, create, or remove storages.")]
    Storage {
        #[command(subcommand)]
        command: StorageCommands,
    },
    /// Create a new configuration file
    MakeConfig,
    /// Print the version
    Version,
    /// Write manual pages for all commands
    Manpage {
        /// Directory the pages are written to
        dir: PathBuf,
    },
    /// Generate a shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Whether the command talks to the API and thus needs an account.
    /// Commands returning false also run without a config file.
    pub fn needs_config(&self) -> bool {
        match self {
            Commands::Storage { .. } => true,
            Commands::MakeConfig
            | Commands::Version
            | Commands::Manpage { .. }
            | Commands::Completion { .. } => false,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// List storages
    #[command(visible_alias = "list", long_about = "List storage objects.")]
    Ls,
    /// Update storage properties
    #[command(
        long_about = "Update properties of a storage object.",
        after_help = "Examples:
  Rename a storage object:
    gscloud storage set --name test-1 b3ec341c-1732-45b3-bc45-9a7fcebb363e

  Shrink a storage:
    gscloud storage set --capacity 9 --force b3ec341c-1732-45b3-bc45-9a7fcebb363e"
    )]
    Set(StorageSetArgs),
    /// Remove storage
    #[command(visible_alias = "remove", long_about = "Remove an existing storage.")]
    Rm {
        /// ID of the storage
        id: String,
    },
    /// Create a new storage
    #[command(after_help = "Examples:
  gscloud storage create --name data --capacity 10
  gscloud storage create --name fast --capacity 50 --type storage_high --label db")]
    Create(StorageCreateArgs),
}

impl StorageCommands {
    /// Structural validation, run before the handler and before any remote call
    pub fn pre_run(&self) -> crate::Result<()> {
        match self {
            StorageCommands::Set(args) => args.changes().map(|_| ()),
            StorageCommands::Create(args) => args.request().map(|_| ()),
            StorageCommands::Ls | StorageCommands::Rm { .. } => Ok(()),
        }
    }
}

#[derive(Args, Debug)]
pub struct StorageSetArgs {
    /// ID of the storage
    pub id: String,

    /// Change name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Change size (GB)
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,

    /// Force a potential destructive operation
    #[arg(long)]
    pub force: bool,
}

impl StorageSetArgs {
    /// Requested changes; only flags that were passed are set
    pub fn changes(&self) -> crate::Result<StorageChanges> {
        if self.name.is_none() && self.capacity.is_none() {
            return Err(CliError::InvalidArguments(
                "Nothing to change. Use --name and/or --capacity".to_string(),
            )
            .into());
        }

        let capacity = self.capacity.map(checked_capacity).transpose()?;

        Ok(StorageChanges {
            name: self.name.clone(),
            capacity,
            force: self.force,
        })
    }
}

#[derive(Args, Debug)]
pub struct StorageCreateArgs {
    /// Name of the new storage
    #[arg(short, long)]
    pub name: String,

    /// Size (GB)
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: i64,

    /// UUID of the location to create the storage in
    #[arg(long)]
    pub location: Option<String>,

    /// Performance class
    #[arg(long = "type", value_parser = ["storage", "storage_high", "storage_insane"])]
    pub storage_type: Option<String>,

    /// Label to attach (can be repeated)
    #[arg(long = "label", action = clap::ArgAction::Append)]
    pub labels: Vec<String>,
}

impl StorageCreateArgs {
    pub fn request(&self) -> crate::Result<StorageCreateRequest> {
        Ok(StorageCreateRequest {
            name: self.name.clone(),
            capacity: checked_capacity(self.capacity)?,
            location_uuid: self.location.clone(),
            storage_type: self.storage_type.clone(),
            labels: self.labels.clone(),
        })
    }
}

fn checked_capacity(capacity: i64) -> crate::Result<u32> {
    STORAGE_CAPACITY_SHRINK.validate(capacity)?;
    u32::try_from(capacity).map_err(|_| {
        CliError::InvalidArguments(format!("Capacity {} GB is out of range", capacity)).into()
    })
}

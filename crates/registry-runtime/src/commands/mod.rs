//! # Commands
//!
//! Maps one CLI invocation onto one registry operation.

use asset_registry::{AssetRegistryApi, Price, RegistryError};
use canonical_encoding::{to_canonical_string, ToCanonical, Value};
use clap::Subcommand;
use std::fmt;

/// Registry operations reachable from the command line.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write the sample catalog to the world state
    Seed,
    /// Register a new asset with no owner and no price
    Register {
        /// Cadastral id (world state key)
        id: String,
        /// Street address
        address: String,
        /// Builder company tax id
        builder: String,
    },
    /// Print the stored record of an asset
    Get { id: String },
    /// Print whether an asset is registered
    Exists { id: String },
    /// Record a sale and print the previous owner
    Transfer {
        id: String,
        /// Tax id of the new owner
        owner: String,
        /// Sale price
        #[arg(allow_negative_numbers = true)]
        price: Price,
    },
    /// Print every entry of the world state
    List,
    /// Print the Keccak-256 content hash of a stored record
    Hash { id: String },
}

/// Result of one command, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Nothing to print beyond the log line.
    Done,
    /// Document text.
    Text(String),
    Flag(bool),
    /// Previous owner after a transfer, as a JSON string or `null`.
    PreviousOwner(Option<String>),
    Hash(String),
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Done => Ok(()),
            CommandOutput::Text(text) | CommandOutput::Hash(text) => write!(f, "{text}"),
            CommandOutput::Flag(flag) => write!(f, "{flag}"),
            CommandOutput::PreviousOwner(Some(owner)) => {
                let quoted = to_canonical_string(&Value::from(owner.as_str())).map_err(|_| fmt::Error)?;
                write!(f, "{quoted}")
            }
            CommandOutput::PreviousOwner(None) => write!(f, "null"),
        }
    }
}

/// Run `command` against `registry`.
pub fn execute<R: AssetRegistryApi>(registry: &mut R, command: Command) -> Result<CommandOutput, RegistryError> {
    let output = match command {
        Command::Seed => {
            registry.seed()?;
            CommandOutput::Done
        }
        Command::Register { id, address, builder } => {
            let asset = registry.register(&id, &address, &builder)?;
            CommandOutput::Text(to_canonical_string(&asset.to_value())?)
        }
        Command::Get { id } => {
            let bytes = registry.get(&id)?;
            CommandOutput::Text(String::from_utf8_lossy(&bytes).into_owned())
        }
        Command::Exists { id } => CommandOutput::Flag(registry.exists(&id)),
        Command::Transfer { id, owner, price } => {
            CommandOutput::PreviousOwner(registry.transfer(&id, &owner, price)?)
        }
        Command::List => CommandOutput::Text(registry.list_all_json()?),
        Command::Hash { id } => CommandOutput::Hash(hex::encode(registry.content_hash(&id)?)),
    };
    Ok(output)
}

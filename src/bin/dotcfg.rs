// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line access to dotcfg config files.
//!
//! ```bash
//! dotcfg dump config/app.cfg
//! dotcfg get config/app.cfg db us host
//! dotcfg --descend db.us get config/app.cfg port
//! dotcfg keys config/app.cfg db
//! RUST_LOG=dotcfg=debug dotcfg dump config/app.cfg
//! ```

use clap::{Parser, Subcommand};
use dotcfg::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Query line-oriented config files with includes, defines and env substitution.
#[derive(Parser)]
#[clap(name = "dotcfg", version, about)]
struct Cli {
    /// Descend into a dotted namespace (e.g. `db.us`) before running the command.
    #[clap(long, global = true)]
    descend: Option<String>,

    /// Log loader activity (files opened, includes followed) to stderr.
    #[clap(long, short = 'v', global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every entry as `key value`, in file order.
    Dump {
        /// The root config file
        file: String,
    },
    /// Print the single value of a key.
    Get {
        /// The root config file
        file: String,
        /// Key segments, joined with `.`
        #[clap(required = true)]
        key: Vec<String>,
    },
    /// Print the INDEX-th value of a multi-valued key.
    GetN {
        /// The root config file
        file: String,
        /// Zero-based occurrence index
        index: usize,
        /// Key segments, joined with `.`
        #[clap(required = true)]
        key: Vec<String>,
    },
    /// List the distinct sub-keys below a prefix, or every distinct key.
    Keys {
        /// The root config file
        file: String,
        /// Prefix segments, joined with `.`
        prefix: Vec<String>,
    },
}

impl Command {
    fn file(&self) -> &str {
        match self {
            Command::Dump { file }
            | Command::Get { file, .. }
            | Command::GetN { file, .. }
            | Command::Keys { file, .. } => file,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "dotcfg=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<Vec<String>> {
    let mut store = ConfigStore::load(cli.command.file())?;
    if let Some(namespace) = &cli.descend {
        let stems: Vec<&str> = namespace.split('.').collect();
        store = store.descend(stems.as_slice());
    }

    let lines = match &cli.command {
        Command::Dump { .. } => store
            .entries()
            .iter()
            .map(|entry| format!("{} {}", entry.key, entry.value))
            .collect(),
        Command::Get { key, .. } => vec![store.get(key.as_slice())?.to_string()],
        Command::GetN { index, key, .. } => vec![store.get_n(*index, key.as_slice())?.to_string()],
        Command::Keys { prefix, .. } if prefix.is_empty() => {
            store.keys().into_iter().map(ConfigKey::to_string).collect()
        }
        Command::Keys { prefix, .. } => store.sub_keys(prefix.as_slice()),
    };

    Ok(lines)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

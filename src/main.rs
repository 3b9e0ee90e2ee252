mod fetch;
mod files;
mod infer;
mod models;
mod pipeline;
mod prompt;
mod resolve;
mod settings;
mod theme;
mod write;

use clap::{arg, Arg, ArgAction, Command};
use eyre::Result;
use log::{error, info};
use std::path::PathBuf;

use crate::fetch::default_fetchers;
use crate::pipeline::Summary;
use crate::prompt::{Prompt, Skip, Terminal};
use crate::resolve::Resolver;
use crate::settings::{get_settings, load, print, Settings, SETTINGS};

pub const CLI_NAME: &str = "retag";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GITHUB: &str = "github.com/retag/retag";

// logging constants
pub const RETAG_LOGLEVEL: &str = "RETAG_LOGLEVEL";
pub const RETAG_STYLE: &str = "RETAG_STYLE";

fn cli() -> Command<'static> {
    Command::new(CLI_NAME)
        .about("Fill in the tags of your MP3 files from MusicBrainz and Wikipedia")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tag")
                .alias("fix")
                .about("Looks up and rewrites the tags of every MP3 file in a folder (recursively)")
                .arg(
                    arg!(PATH: [PATH] "Folder to scan, asked for interactively when missing")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("no-prompt")
                        .long("no-prompt")
                        .action(ArgAction::SetTrue)
                        .help("Never ask for a title or artist, search with whatever was inferred"),
                ),
        )
        .subcommand(Command::new("config").about("Print the current configuration in TOML"))
}

/// Runs a tagging pass. Returns `None` when the run ends before any file is
/// processed; those early exits are logged, never reported as errors.
async fn tag(settings: &Settings, path: Option<PathBuf>, no_prompt: bool) -> Option<Summary> {
    let folder = match path {
        Some(p) => Some(p),
        None => match prompt::pick_folder(settings.library.as_deref()) {
            Ok(folder) => folder,
            Err(e) => {
                error!("Could not ask for a folder: {:?}", e);
                return None;
            }
        },
    };
    let folder = match folder {
        Some(f) => f,
        None => {
            info!("No folder selected. Exiting.");
            return None;
        }
    };

    let files = match files::all_files(&folder) {
        Ok(files) => files,
        Err(e) => {
            error!("Could not read folder {:?}: {:?}", folder, e);
            return None;
        }
    };
    if files.is_empty() {
        info!("No MP3 files found in {:?}", folder);
        return None;
    }
    info!("Found {} MP3 files", files.len());

    let prompt: Box<dyn Prompt> = if no_prompt || !settings.prompt {
        Box::new(Skip)
    } else {
        Box::new(Terminal::default())
    };
    let resolver = Resolver::new(default_fetchers(settings), prompt);
    let summary = pipeline::run(&files, &resolver).await;
    info!("Done, {}", summary);
    Some(summary)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    theme::init_logger();

    SETTINGS.get_or_try_init(async { load() }).await?;

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("config", _)) => print(),
        Some(("tag", sub_matches)) => {
            let path = sub_matches.get_one::<PathBuf>("PATH").cloned();
            let no_prompt = sub_matches
                .get_one::<bool>("no-prompt")
                .copied()
                .unwrap_or(false);
            tag(get_settings()?, path, no_prompt).await;
            Ok(())
        }
        Some((cmd, _)) => {
            error!(
                "Invalid command {}, use `help` to see all available subcommands",
                cmd
            );
            Ok(())
        }
        None => {
            error!(
                "A subcommand is required. Use `help` to get a list of all available subcommands"
            );
            Ok(())
        }
    }
}

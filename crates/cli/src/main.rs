// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use osu_args::{
    CommandIds, DifficultyOptions, FreeTextArgs, GameMode, LinkTable, Resolver, ResolverConfig,
    StructuredArgs, StructuredInput,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// osu-args - resolve one osu! bot command invocation and print its descriptor
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON resolver configuration. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON object mapping platform user ids to player ids.
    #[arg(short, long)]
    links: Option<PathBuf>,

    /// A registered command id as `NAME=ID`, used for clickable link hints.
    #[arg(long = "command", value_name = "NAME=ID", value_parser = parse_key_value)]
    commands: Vec<(String, String)>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Platform user id of the invoker.
    invoker: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Resolve the free-text arguments of a prefix command
    #[command(visible_alias = "p")]
    Prefix {
        /// Mode implied by the command name, e.g. `taiko` for `!rstaiko`.
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// The whitespace-split arguments after the command name.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Resolve the fields of a slash command
    #[command(visible_alias = "s")]
    Slash(SlashArgs),
}

/// Options of a slash command invocation.
#[derive(Clone, Debug, clap::Args)]
struct SlashArgs {
    /// Player username.
    #[arg(long)]
    username: Option<String>,

    /// Mode name. Unknown names fall back to the configured default.
    #[arg(long)]
    mode: Option<String>,

    /// Mentioned platform user id.
    #[arg(long)]
    mention: Option<String>,

    /// Mod expression, e.g. `HDDT` or `+HD!`.
    #[arg(long, allow_hyphen_values = true)]
    mods: Option<String>,

    /// Beatmap or beatmapset link.
    #[arg(long)]
    map: Option<String>,

    /// Include the mods.
    #[arg(long)]
    include: bool,

    /// Exclude the mods.
    #[arg(long)]
    exclude: bool,

    /// Require exactly the mods.
    #[arg(long)]
    force_include: bool,

    /// A performance calculation override as `KEY=VALUE`, e.g. `acc=98.5`.
    #[arg(short, long = "difficulty", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    difficulty: Vec<(String, String)>,
}

impl Args {
    fn run(self) -> Result<()> {
        let config: ResolverConfig = load_config(self.config.as_deref())?;
        let links: LinkTable = load_links(self.links.as_deref())?;
        let commands: CommandIds = self
            .commands
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
            .collect();
        let resolver: Resolver<'_> = Resolver::new(&config, &links, &commands);

        let descriptor: serde_json::Value = self.command.resolve(&resolver, &self.invoker)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&descriptor).wrap_err("Failed to render descriptor")?
        );
        Ok(())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

impl Command {
    fn resolve(self, resolver: &Resolver<'_>, invoker: &str) -> Result<serde_json::Value> {
        match self {
            Self::Prefix { mode, tokens } => {
                info!(%invoker, tokens = tokens.len(), "Resolving prefix command");
                let args: FreeTextArgs = resolver
                    .free_text(invoker, tokens.as_slice(), mode)
                    .wrap_err("Failed to resolve prefix command")?;
                serde_json::to_value(args).wrap_err("Failed to serialize descriptor")
            }
            Self::Slash(slash) => {
                info!(%invoker, "Resolving slash command");
                let input: StructuredInput = slash.into_structured_input();
                let args: StructuredArgs = resolver
                    .structured(invoker, &input)
                    .wrap_err("Failed to resolve slash command")?;
                serde_json::to_value(args).wrap_err("Failed to serialize descriptor")
            }
        }
    }
}

impl SlashArgs {
    /// Converts the options into the structured input shape.
    ///
    /// Boolean switches that were not given stay unset.
    fn into_structured_input(self) -> StructuredInput {
        let overrides: BTreeMap<String, String> = self.difficulty.into_iter().collect();
        StructuredInput {
            username: self.username,
            mode: self.mode,
            mentioned_user_id: self.mention,
            mods: self.mods,
            map: self.map,
            include: self.include.then_some(true),
            exclude: self.exclude.then_some(true),
            force_include: self.force_include.then_some(true),
            difficulty: DifficultyOptions::from_flags(&overrides),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ResolverConfig> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(ResolverConfig::default());
    };

    let json: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read configuration from {}", path.display()))?;
    ResolverConfig::from_json_str(&json)
        .wrap_err_with(|| format!("Invalid configuration in {}", path.display()))
}

fn load_links(path: Option<&Path>) -> Result<LinkTable> {
    let Some(path) = path else {
        debug!("No link table given, every account is unlinked");
        return Ok(LinkTable::new());
    };

    let json: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read link table from {}", path.display()))?;
    let links: LinkTable = LinkTable::from_json_str(&json)
        .wrap_err_with(|| format!("Invalid link table in {}", path.display()))?;
    info!(linked = links.len(), "Loaded link table");
    Ok(links)
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests;

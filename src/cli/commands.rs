//! Command dispatch: maps parsed arguments onto the codec service

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::CodecService;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::TruncatedPolicy;
use crate::render::{code_table, TreeRender};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    if !settings.render.color {
        colored::control::set_override(false);
    }
    let service = CodecService::new(settings.codec_options());

    match &cli.command {
        Some(Commands::Demo { message }) => _demo(&service, &settings, message),
        Some(Commands::Encode { message, alphabet }) => {
            _encode(&service, message, alphabet.as_deref())
        }
        Some(Commands::Decode { bits, alphabet }) => _decode(&service, bits, alphabet),
        Some(Commands::Tree { text }) => _tree(&service, &settings, text),
        Some(Commands::Codes { text }) => _codes(&service, text),
        Some(Commands::Config) => _config(&settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Explicit `--config` file, else layered config with `./.rshuff.toml`.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => {
            let cwd = std::env::current_dir().ok();
            Settings::load(cwd.as_deref())?
        }
    };
    if cli.drop_truncated {
        settings.codec.truncated = TruncatedPolicy::Drop;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn require_text(text: &str, what: &str) -> CliResult<()> {
    if text.is_empty() {
        return Err(CliError::Usage(format!("{} must not be empty", what)));
    }
    Ok(())
}

#[instrument(skip(service, settings))]
fn _demo(service: &CodecService, settings: &Settings, message: &str) -> CliResult<()> {
    require_text(message, "message")?;
    let result = service.round_trip(message)?;

    output::action("Original message", &result.original);
    output::action("Encoded message", &result.encoded_string());
    output::action("Decoded message", &result.decoded);
    output::info(&result.tree.to_tree_string_with(settings.render_options()));

    if !result.is_lossless() {
        return Err(CliError::Internal(format!(
            "decoded message differs from original: {:?}",
            result.decoded
        )));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _encode(service: &CodecService, message: &str, alphabet: Option<&str>) -> CliResult<()> {
    let alphabet = alphabet.unwrap_or(message);
    require_text(alphabet, "alphabet")?;
    output::info(&service.encode(alphabet, message)?);
    Ok(())
}

#[instrument(skip(service))]
fn _decode(service: &CodecService, bits: &str, alphabet: &str) -> CliResult<()> {
    require_text(alphabet, "alphabet")?;
    output::info(&service.decode(alphabet, bits)?);
    Ok(())
}

#[instrument(skip(service, settings))]
fn _tree(service: &CodecService, settings: &Settings, text: &str) -> CliResult<()> {
    let tree = service.build_tree(text);
    output::info(&tree.to_tree_string_with(settings.render_options()));
    Ok(())
}

#[instrument(skip(service))]
fn _codes(service: &CodecService, text: &str) -> CliResult<()> {
    let tree = service.build_tree(text);
    if tree.is_empty() {
        output::warning("empty text, no codes");
        return Ok(());
    }
    output::header(&format!("{} symbol(s), {} total", tree.leaves().count(), text.chars().count()));
    for line in code_table(&tree) {
        output::detail(&line);
    }
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

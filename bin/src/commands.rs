pub mod decode;
pub mod restyle;
pub mod strip;
pub mod style;
pub mod toggle;

use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use unistyle_config::Config;
use unistyle_text_transform::Codec;

/// Loads configuration, runs the command and writes its output to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let discovered = Config::discover();
    let config = Config::load_with_overrides(cli.config.as_deref(), discovered.as_deref())?;
    let codec = Codec::new(config.precedence()?)
        .with_skip_whitespace(config.insertion.skip_whitespace);

    let input = match cli.command.text() {
        Some(text) => text.to_string(),
        None => read_stdin()?,
    };

    let output = execute(&cli.command, &codec, &input);
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Runs `command` over `input` and returns the text to print.
pub fn execute(command: &Command, codec: &Codec, input: &str) -> String {
    tracing::debug!(?command, bytes = input.len(), "executing");
    match command {
        Command::Style { styles, .. } => style::handle(codec, *styles, input),
        Command::Toggle { tag, .. } => toggle::handle(codec, *tag, input),
        Command::Restyle { before, after, .. } => restyle::handle(codec, *before, *after, input),
        Command::Decode { .. } => decode::handle(codec, input),
        Command::Strip { .. } => strip::handle(input),
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;
    Ok(input)
}

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskline::cli::args::{Cli, Commands};
use taskline::cli::completions::{generate_completions, shell_from_str};
use taskline::config::{ColorSetting, Config};
use taskline::error::TasklineError;
use taskline::output::Frame;
use taskline::session::repl;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let shell_type = shell_from_str(&shell).ok_or_else(|| {
                TasklineError::InvalidArgument(format!(
                    "unknown shell: {shell} (supported: bash, zsh, fish, powershell, elvish)"
                ))
            })?;
            print!("{}", generate_completions(shell_type)?);
        }
        None => {
            let config = match &cli.config {
                Some(path) => Config::load_from_path(path)?,
                None => Config::load()?,
            };
            match config.general.color {
                ColorSetting::Always => colored::control::set_override(true),
                ColorSetting::Never => colored::control::set_override(false),
                ColorSetting::Auto => {}
            }

            let frame = Frame::new(config.frame.indent_width, config.frame.banner_width);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();
            repl::run(stdin.lock(), &mut stdout, &frame)?;
        }
    }

    Ok(())
}

use anyhow::Result;
use berlinclock::prelude::*;
use berlinclock::{CLOCK_NAME, VERSION as LIB_VERSION};
use colored::Colorize;
use rustyline::highlight::Highlighter;
use rustyline::Editor;
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SHELL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highlights input that already reads as a valid time.
#[derive(Completer, Helper, Hinter, Validator)]
struct TimeHighlighter;

impl Highlighter for TimeHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().parse::<ClockTime>().is_ok() {
            Cow::Owned(line.green().bold().to_string())
        } else if let Some((command, rest)) = line.split_once(' ') {
            Cow::Owned(format!("{} {}", command.yellow().bold(), rest.yellow()))
        } else {
            Cow::Owned(line.yellow().bold().to_string())
        }
    }
    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn print_banner() {
    if env::var("QUIET_MODE").is_ok() {
        return;
    }
    const LOGO_TEXT: &str = include_str!("../logo.log");
    println!("{}", LOGO_TEXT.cyan());

    let version_string = format!(
        "          Shell   v{:<8} Library   v{:<8}",
        SHELL_VERSION, LIB_VERSION
    );
    println!("{}", "-".repeat(60).dimmed());
    println!("{}", version_string);
    println!(
        "{}",
        "    Distributed under the MIT OR Apache-2.0 license.".dimmed()
    );
    println!("{}", "-".repeat(60).dimmed());
}

fn print_help() {
    println!("Available commands:");
    println!("  <HH:mm:ss>            - Renders the given time, e.g. 13:17:01.");
    println!("  now                   - Renders the current time.");
    println!("  color on|off          - Toggles coloured lamps.");
    println!("  help                  - Shows this list.");
    println!("  exit                  - Quits the shell.");
}

fn show(time: &ClockTime, style: OutputStyle) {
    println!("--> {}\n{}", time, BerlinClock.render(time).render_styled(style));
}

/// One line of shell input, interpreted.
#[derive(Debug, PartialEq)]
enum ShellCommand {
    Empty,
    Exit,
    Help,
    Now,
    Style(OutputStyle),
    ColorUsage,
    Show(ClockTime),
    Rejected(InvalidTimeFormat),
    Unknown(String),
}

/// Any single token that is not a command is read as a time, so mistyped
/// times get the expected-format hint rather than "unknown command".
fn parse_command(line: &str) -> ShellCommand {
    let args = line.split_whitespace().collect::<Vec<_>>();
    match args.as_slice() {
        [] => ShellCommand::Empty,
        ["exit"] => ShellCommand::Exit,
        ["help"] => ShellCommand::Help,
        ["now"] => ShellCommand::Now,
        ["color", "on"] => ShellCommand::Style(OutputStyle::Colored),
        ["color", "off"] => ShellCommand::Style(OutputStyle::Plain),
        ["color", ..] => ShellCommand::ColorUsage,
        [token] => match token.parse::<ClockTime>() {
            Ok(time) => ShellCommand::Show(time),
            Err(e) => ShellCommand::Rejected(e),
        },
        _ => ShellCommand::Unknown(line.trim().to_string()),
    }
}

fn main() -> Result<()> {
    print_banner();

    let mut config = BerlinClockConfig::load(None)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "configuration loaded");

    info!("{} shell started.", CLOCK_NAME);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(TimeHighlighter));

    println!(
        "{} is ready. Type a time, 'help' for commands or 'exit' to quit.",
        CLOCK_NAME.cyan()
    );

    loop {
        let prompt = format!("{}", ">> ".cyan().bold());
        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;

                match parse_command(&line) {
                    ShellCommand::Empty => {}
                    ShellCommand::Exit => break,
                    ShellCommand::Help => print_help(),
                    ShellCommand::Now => show(&config.now(), config.style),
                    ShellCommand::Style(style) => {
                        config.style = style;
                        match style {
                            OutputStyle::Colored => println!("--> Coloured lamps enabled."),
                            OutputStyle::Plain => println!("--> Plain lamps enabled."),
                        }
                    }
                    ShellCommand::ColorUsage => println!("Usage: color on|off"),
                    ShellCommand::Show(time) => show(&time, config.style),
                    ShellCommand::Rejected(e) => {
                        debug!(input = %e.input, "rejected shell input");
                        println!("Error: {}", e);
                    }
                    ShellCommand::Unknown(line) => {
                        println!("Unknown command: '{}'. Type 'help'.", line)
                    }
                }
            }
            Err(_) => {
                println!("Exiting berlinshell...");
                break;
            }
        }
    }

    Ok(())
}

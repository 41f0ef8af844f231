use anyhow::{Context, Result};
use berlinclock::prelude::*;
use berlinclock::CLOCK_NAME;
use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Shows times on a Berlin Clock.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print bare lamp symbols without colour.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a given time, in 24-hour HH:mm:ss format.
    Show { time: String },
    /// Render the current time.
    Now,
    /// Keep redrawing the current time until Ctrl+C.
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BerlinClockConfig::load(cli.config.as_deref())?;
    apply_overrides(&cli, &mut config);

    // 1. Initialize structured logging. Logs go to stderr, the clock to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "configuration loaded");

    // 2. Dispatch the requested command.
    match cli.command {
        Command::Show { time } => {
            let time: ClockTime = time.parse()?;
            println!("{}", draw(&time, config.style));
        }
        Command::Now => println!("{}", draw(&config.now(), config.style)),
        Command::Watch => watch(&config).await?,
    }

    Ok(())
}

/// Command-line flags take precedence over the loaded configuration.
fn apply_overrides(cli: &Cli, config: &mut BerlinClockConfig) {
    if cli.plain {
        config.style = OutputStyle::Plain;
    }
}

fn draw(time: &ClockTime, style: OutputStyle) -> String {
    BerlinClock.render(time).render_styled(style)
}

/// Clears the terminal and draws one `watch` frame at the top left.
fn write_frame<W: Write>(out: &mut W, time: &ClockTime, style: OutputStyle) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{time}\n\n{}", draw(time, style))?;
    out.flush()?;
    Ok(())
}

/// Redraws the clock on every interval tick until a shutdown signal arrives.
async fn watch(config: &BerlinClockConfig) -> Result<()> {
    info!(
        "{} watching at {:?}. Press Ctrl+C to stop.",
        CLOCK_NAME,
        config.watch.interval()
    );
    let mut ticker = tokio::time::interval(config.watch.interval());
    let mut stdout = std::io::stdout();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            result = &mut shutdown => {
                result.context("failed to listen for Ctrl+C")?;
                break;
            }
            _ = ticker.tick() => {
                write_frame(&mut stdout, &config.now(), config.style)?;
            }
        }
    }

    info!("Shutdown signal received. {} stopped.", CLOCK_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("berlinclock").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn plain_flag_overrides_configured_colour() {
        let mut config = BerlinClockConfig::default();
        assert_eq!(config.style, OutputStyle::Colored);

        apply_overrides(&parse(&["--plain", "show", "13:17:01"]), &mut config);
        assert_eq!(config.style, OutputStyle::Plain);
    }

    #[test]
    fn plain_flag_is_accepted_after_the_subcommand() {
        let mut config = BerlinClockConfig::default();
        apply_overrides(&parse(&["now", "--plain"]), &mut config);
        assert_eq!(config.style, OutputStyle::Plain);
    }

    #[test]
    fn colour_is_kept_without_the_flag() {
        let mut config = BerlinClockConfig::default();
        apply_overrides(&parse(&["show", "13:17:01"]), &mut config);
        assert_eq!(config.style, OutputStyle::Colored);
    }

    #[test]
    fn plain_output_has_no_escapes_even_when_colour_is_forced() {
        colored::control::set_override(true);
        let time: ClockTime = "13:17:01".parse().unwrap();
        let drawn = draw(&time, OutputStyle::Plain);
        colored::control::unset_override();

        let expected = ["O", "RROO", "RRRO", "YYROOOOOOOO", "YYOO"].join(LINE_SEPARATOR);
        assert_eq!(drawn, expected);
    }

    #[test]
    fn watch_frame_ends_with_time_and_clock() {
        let time: ClockTime = "00:00:00".parse().unwrap();
        let mut out = Vec::new();
        write_frame(&mut out, &time, OutputStyle::Plain).unwrap();

        let frame = String::from_utf8(out).unwrap();
        let clock = ["Y", "OOOO", "OOOO", "OOOOOOOOOOO", "OOOO"].join(LINE_SEPARATOR);
        assert!(
            frame.ends_with(&format!("00:00:00\n\n{clock}\n")),
            "unexpected frame: {frame:?}"
        );
    }
}

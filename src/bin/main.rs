use clap::Parser;
use git_autocommit::{self, CycleReport};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{fmt, EnvFilter};

fn parse_interval(s: &str) -> std::result::Result<Duration, String> {
    let seconds: u64 = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid interval {s:?}: {e}"))?;
    if seconds == 0 {
        Err("Interval must be at least one second".to_string())
    } else {
        Ok(Duration::from_secs(seconds))
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Git working tree to watch
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    /// Seconds to wait between snapshots
    #[arg(short, long, default_value = "2", value_parser = parse_interval)]
    interval: Duration,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Print one JSON report per cycle instead of a progress character
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(global = true, short, long, default_value = "error")]
    log: LevelFilter,
}

fn print_report(out: &mut impl Write, report: &CycleReport, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", report.outcome.indicator())?;
    }
    out.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> git_autocommit::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive(cli.log.into());

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .pretty()
        .init();

    let watcher = git_autocommit::new_from_local(&cli.repo)?;
    let mut stdout = io::stdout();

    loop {
        let report = watcher.run_cycle()?;
        print_report(&mut stdout, &report, cli.json)?;

        if cli.once {
            break;
        }

        tokio::select! {
            () = tokio::time::sleep(cli.interval) => {}
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted, stopping watcher");
                break;
            }
        }
    }

    if !cli.json {
        writeln!(stdout)?;
    }
    Ok(())
}

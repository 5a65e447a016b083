//! AMR Demo - inject severity events and watch the monitoring rate adapt

use std::io::{self, Write};
use std::process::ExitCode;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use safe_amr::{AmrSimulator, Snapshot};
use safe_core::{AmrConfig, AmrError, SeverityMode};
use safe_runtime::{init_logging, load_amr_config, sparkline, Driver, DriverConfig, StatusReadout, Tone};

enum Command {
    Mode(SeverityMode),
    Quit,
}

fn parse_command(line: &str) -> Result<Command, AmrError> {
    match line.trim() {
        "m" | "M" => Ok(Command::Mode(SeverityMode::Moderate)),
        "c" | "C" => Ok(Command::Mode(SeverityMode::Critical)),
        "x" | "X" => Ok(Command::Mode(SeverityMode::Catastrophic)),
        "q" | "Q" => Ok(Command::Quit),
        other => other.parse().map(Command::Mode),
    }
}

fn config_path() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
    }
    None
}

fn render(snapshot: &Snapshot) {
    let readout = StatusReadout::from_snapshot(snapshot);
    let marker = match readout.tone {
        Tone::Alert => "🔴",
        Tone::Calm => "🟢",
    };

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ Live Simulator: AMR                           tick {:>9} ║", snapshot.tick);
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║ Status:   {} {:<49}║", marker, readout.mode_label);
    println!("║ Interval: {:<51}║", readout.interval_text);
    println!("║ Sampling: {:<51}║", readout.bar(40));
    println!("║ History:  {:<51}║", sparkline(&snapshot.history));
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║ Commands: [m]oderate, [c]ritical, [x] catastrophic, [q]uit   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    io::stdout().flush().ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("{e}");
    }

    let config = match config_path() {
        Some(path) => match load_amr_config(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AmrConfig::default(),
    };

    let sim = match AmrSimulator::with_config(config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let driver_config = DriverConfig::from_env();
    info!(period = ?driver_config.period, "starting amr demo");

    let mut driver = Driver::new(sim, driver_config);
    let mut snapshots = driver.subscribe();
    if let Err(e) = driver.start() {
        error!("Failed to start driver: {}", e);
        return ExitCode::FAILURE;
    }

    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(10);
    std::thread::spawn(move || loop {
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => {
                let _ = cmd_tx.blocking_send(Command::Quit);
                break;
            }
            Ok(_) if input.trim().is_empty() => {}
            Ok(_) => match parse_command(&input) {
                Ok(cmd) => {
                    if cmd_tx.blocking_send(cmd).is_err() {
                        break;
                    }
                }
                Err(e) => warn!("Ignoring input: {}", e),
            },
        }
    });

    render(&snapshots.borrow_and_update());

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                render(&snapshot);
            }

            Some(cmd) = cmd_rx.recv() => match cmd {
                Command::Mode(mode) => driver.set_mode(mode),
                Command::Quit => break,
            },
        }
    }

    driver.stop();
    info!(tick = driver.tick_count(), "amr demo finished");
    ExitCode::SUCCESS
}

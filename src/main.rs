use anyhow::Context;
use clap::Parser;
use small_calc::adapters::keyboard::tokenize;
use small_calc::utils::logger;
use small_calc::{CalcError, CliConfig, Session, TerminalDisplay};
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            fail(e);
        }
    };

    let stdout = io::stdout();
    let display = TerminalDisplay::new(stdout.lock(), settings.format);
    let mut session = Session::new(display).with_trace(settings.trace);

    match &config.keys {
        Some(keys) => {
            let events = settings.keymap.map_keys(tokenize(keys));
            session.run(events).unwrap_or_else(|e| fail(e));
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("reading keys from stdin")?;
                let events = settings.keymap.map_keys(tokenize(&line));
                session.run(events).unwrap_or_else(|e| fail(e));
            }
        }
    }

    let last = session.finish().unwrap_or_else(|e| fail(e));
    tracing::info!(display = %last.display, "session finished");

    Ok(())
}

fn fail(e: CalcError) -> ! {
    tracing::error!("❌ {} (recovery: {})", e, e.recovery_suggestion());
    eprintln!("{}", e.report());
    std::process::exit(1);
}

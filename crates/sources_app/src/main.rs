use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use sources_app::config::AppConfig;
use sources_app::driver::ViewDriver;
use sources_app::input::{parse_line, Input};
use sources_app::{logging, render};
use sources_engine::EngineHandle;
use sources_logging::sources_info;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => AppConfig::default(),
    };
    config.validate()?;
    logging::initialize(config.log_destination, config.log_level()?);

    let engine = EngineHandle::new(config.api_settings())?;
    let mut driver = ViewDriver::new(config.view_settings()?, engine, config.location()?);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(parse_line(&line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Quit);
    });

    driver.mount();
    loop {
        while let Ok(input) = input_rx.try_recv() {
            match input {
                Input::Msg(msg) => driver.dispatch(msg),
                Input::Quit => {
                    sources_info!("quit at {}", driver.location().url());
                    return Ok(());
                }
            }
        }

        driver.pump_for(POLL_INTERVAL);
        if driver.consume_dirty() {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", render::render(&driver.view()))?;
            writeln!(stdout, "url: {}", driver.location().url())?;
            stdout.flush()?;
        }
    }
}

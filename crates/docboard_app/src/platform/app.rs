use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use docboard_core::{update, AppState, Msg};
use docboard_logging::{board_debug, board_info, set_dispatch_seq};

use super::cli::Cli;
use super::config;
use super::effects::EffectRunner;
use super::locale::Catalog;
use super::logging;
use super::ui::{input, render};

const TICK_INTERVAL: Duration = Duration::from_millis(75);

/// Everything the main loop reacts to.
pub(crate) enum AppEvent {
    Msg(Msg),
    Help,
    InputError(String),
    Quit,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let settings = config::load(&cli)?;
    logging::initialize(settings.log, settings.log_level);
    board_info!("docboard starting against {}", settings.client.base_url);

    let catalog = Catalog::english().with_overrides(settings.strings.clone());
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(settings.client.clone(), event_tx.clone(), catalog.clone())
        .context("failed to start engine")?;

    spawn_input_reader(event_tx.clone());
    // Background tick to coalesce rendering.
    spawn_ticker(event_tx.clone());
    let _ = event_tx.send(AppEvent::Msg(Msg::RefreshRequested));
    drop(event_tx);

    println!("type `help` for commands");
    let mut state = AppState::new(settings.view);
    let mut seq: u64 = 0;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => {
                let is_tick = matches!(msg, Msg::Tick);
                if !is_tick {
                    seq += 1;
                    set_dispatch_seq(seq);
                    board_debug!("dispatch {:?}", msg);
                }
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
                if is_tick && state.consume_dirty() {
                    print!("{}", render::render(&state.view(), &catalog));
                }
            }
            AppEvent::Help => println!("{}", input::HELP),
            AppEvent::InputError(message) => println!("{}", message),
            AppEvent::Quit => break,
        }
    }

    board_info!("docboard exiting after {} messages", seq);
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let event = match input::parse_command(&line) {
                Ok(input::Command::Dispatch(msg)) => AppEvent::Msg(msg),
                Ok(input::Command::Help) => AppEvent::Help,
                Ok(input::Command::Quit) => AppEvent::Quit,
                Err(err) => AppEvent::InputError(err.to_string()),
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::Quit);
    });
}

fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while tx.send(AppEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });
}

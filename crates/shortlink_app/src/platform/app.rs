use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::Context;
use app_logging::app_info;
use shortlink_core::{update, AppState, Msg, SubmissionStatus};
use shortlink_engine::{api_base_url, API_URL_ENV};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    // Configuration problems are for the operator, not the end user.
    let base_url =
        api_base_url().with_context(|| format!("configuration error, check {API_URL_ENV}"))?;
    app_info!("using shortening service at {}", base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(&base_url, msg_tx);
    let mut state = AppState::new();

    render::print_banner();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "copy" => {
                state = dispatch(state, Msg::CopyClicked, &mut runner);
            }
            url_text => {
                // InputChanged has no effects and no rendering of its own;
                // the submit dispatch renders the combined transition.
                let (next, _) = update(state, Msg::InputChanged(url_text.to_string()));
                state = dispatch(next, Msg::SubmitClicked, &mut runner);
                if state.status() == SubmissionStatus::Loading {
                    // Block until the in-flight request settles. No second
                    // submission can start while this one is unsettled.
                    match msg_rx.recv() {
                        Ok(msg) => state = dispatch(state, msg, &mut runner),
                        Err(_) => break,
                    }
                } else {
                    println!("Enter a complete URL, e.g. https://example.com/page");
                }
            }
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &mut EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        render::render(&state.view());
    }
    state
}

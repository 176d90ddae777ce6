use crate::{AppState, Effect, Msg, SubmissionStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Mutual exclusion: one request in flight at a time. Extra clicks
            // during the flight are dropped, not queued.
            if state.status() == SubmissionStatus::Loading {
                return (state, Vec::new());
            }
            // Invariant: no request is ever sent with empty or malformed
            // input. Mirrors the native form validation of the input box.
            if !input_is_valid_url(state.input()) {
                return (state, Vec::new());
            }

            let url = state.input().to_owned();
            state.begin_submission();
            vec![Effect::SendRequest {
                url,
                expires_at: None,
            }]
        }
        Msg::SubmitCompleted { result } => {
            // Last-write-wins: the settlement applies to whatever the current
            // state is, and always leaves Loading.
            match result {
                Ok(link) => state.apply_success(link),
                Err(message) => state.apply_failure(message),
            }
            Vec::new()
        }
        Msg::CopyClicked => match state.result() {
            Some(link) => vec![Effect::CopyToClipboard {
                url: link.full_url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Syntax-only check: the exact input string must parse as an absolute URL.
/// No trimming or normalization is performed before sending.
fn input_is_valid_url(input: &str) -> bool {
    !input.is_empty() && url::Url::parse(input).is_ok()
}

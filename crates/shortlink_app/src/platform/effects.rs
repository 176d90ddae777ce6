use std::sync::mpsc;
use std::thread;

use app_logging::{app_info, app_warn};
use shortlink_core::{Effect, Msg, ShortenedLink};
use shortlink_engine::{ClipboardService, EngineEvent, EngineHandle, SystemClipboard};

/// Executes effects produced by the core and forwards engine settlements back
/// into the message channel.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardService>,
}

impl EffectRunner {
    pub fn new(base_url: &str, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(base_url, event_tx);
        spawn_event_bridge(event_rx, msg_tx);
        Self {
            engine,
            clipboard: Box::new(SystemClipboard),
        }
    }

    #[cfg(test)]
    fn with_parts(engine: EngineHandle, clipboard: Box<dyn ClipboardService>) -> Self {
        Self { engine, clipboard }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendRequest { url, expires_at } => {
                    app_info!("SendRequest url_len={} url={}", url.len(), url);
                    self.engine.submit(url, expires_at);
                }
                Effect::CopyToClipboard { url } => {
                    // Best-effort: a failed clipboard write is not an
                    // application error.
                    if let Err(err) = self.clipboard.put(url) {
                        app_warn!("clipboard write failed: {}", err);
                    }
                }
            }
        }
    }
}

fn spawn_event_bridge(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            match event {
                EngineEvent::SubmitCompleted { result } => {
                    let result = result
                        .map(|outcome| ShortenedLink {
                            full_url: outcome.short_url,
                            code: outcome.short_code,
                        })
                        .map_err(|err| err.message);
                    let _ = msg_tx.send(Msg::SubmitCompleted { result });
                }
            }
        }
    });
}

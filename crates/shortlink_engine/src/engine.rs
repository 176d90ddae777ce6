use std::sync::{mpsc, Arc};
use std::thread;

use app_logging::app_debug;

use crate::client::{ReqwestShortenClient, ShortenClient};
use crate::{EngineEvent, ShortenRequest};

enum EngineCommand {
    Submit {
        url: String,
        expires_at: Option<String>,
    },
}

/// Command side of the engine. Submissions are executed on a dedicated
/// thread owning a tokio runtime; settlements arrive on the event channel
/// given at construction.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(base_url: impl Into<String>, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self::with_client(Arc::new(ReqwestShortenClient::new(base_url)), event_tx)
    }

    pub fn with_client(
        client: Arc<dyn ShortenClient>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx }
    }

    /// Dispatches one submission. If the engine thread is gone the command is
    /// silently dropped; the abandoned flight has no cleanup contract.
    pub fn submit(&self, url: impl Into<String>, expires_at: Option<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            url: url.into(),
            expires_at,
        });
    }
}

async fn handle_command(
    client: &dyn ShortenClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { url, expires_at } => {
            let request = ShortenRequest::new(url, expires_at);
            let result = match client.shorten(&request).await {
                Ok(reply) => reply.into_outcome(),
                Err(err) => Err(err),
            };
            app_debug!("submission settled ok={}", result.is_ok());
            let _ = event_tx.send(EngineEvent::SubmitCompleted { result });
        }
    }
}

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::DocumentUpload;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /suggest (/s) [NUMBER] - Asks one of the suggested questions by its number.
- /new (/n) - Discards the current session and starts over with a new document.
- /quit /exit (/q) - Exit Paperchat.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit Paperchat.
        "#;

    return text.trim().to_string();
}

async fn upload_document(backend: &BackendBox, file_path: &path::Path) -> Result<()> {
    let bytes = fs::read(file_path).await?;
    let file_name = file_path
        .file_name()
        .map(|e| return e.to_string_lossy().to_string())
        .unwrap_or_else(|| return "document.pdf".to_string());

    return backend.upload_document(DocumentUpload { file_name, bytes }).await;
}

async fn handle_action(
    backend: &BackendBox,
    action: Action,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match action {
        Action::UploadDocument(file_path) => {
            let res = upload_document(backend, &file_path).await;
            if let Err(err) = &res {
                tracing::error!(error = ?err, "Document upload failed");
            }
            tx.send(Event::UploadComplete(res.is_ok()))?;
        }
        Action::AskQuestion(question) => match backend.ask_question(&question).await {
            Ok(answer) => {
                tx.send(Event::AnswerReceived(answer))?;
            }
            Err(err) => {
                tracing::error!(error = ?err, "Question request failed");
                tx.send(Event::AskFailed())?;
            }
        },
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Processes actions one at a time. Requests run to completion in the
    /// order they were queued, there is no cancellation.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            handle_action(&backend, action.unwrap(), &tx).await?;
        }
    }
}

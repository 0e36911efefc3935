//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;
use std::sync::Arc;

use pyfix_client::AnalysisService;
use pyfix_core::prelude::*;
use pyfix_core::{FileCandidate, SelectedFile};
use tokio::sync::mpsc;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: &Arc<S>)
where
    S: AnalysisService + Send + Sync + 'static,
{
    match action {
        UpdateAction::ReadFile { path } => {
            tokio::spawn(async move {
                let msg = read_file(path).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::UploadFile { file } => {
            let service = Arc::clone(service);
            tokio::spawn(async move {
                let msg = upload_file(service.as_ref(), file).await;
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Read `path` and turn the outcome into a selection message
pub async fn read_file(path: PathBuf) -> Message {
    match tokio::fs::read(&path).await {
        Ok(content) => {
            debug!("Read {} bytes from {:?}", content.len(), path);
            Message::FileChosen(FileCandidate::from_path(&path, content))
        }
        Err(e) => {
            let error = Error::file_read(&path, e).to_string();
            Message::FileReadFailed { path, error }
        }
    }
}

/// Run one analysis round trip and turn the outcome into a terminating message
pub async fn upload_file<S>(service: &S, file: SelectedFile) -> Message
where
    S: AnalysisService,
{
    match service.analyze(&file).await {
        Ok(result) => Message::AnalysisCompleted { result },
        Err(e) => {
            if e.is_recoverable() {
                warn!("Analysis of {} failed: {}", file.name(), e);
            } else {
                error!("Analysis of {} failed: {}", file.name(), e);
            }
            Message::AnalysisFailed {
                error: e.to_string(),
            }
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping background result");
    }
}

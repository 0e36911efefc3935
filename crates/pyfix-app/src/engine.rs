//! Engine - shared orchestration for the TUI and headless runners
//!
//! Owns the TEA state, the message channel, and the analysis service the
//! action layer uploads through.

use std::sync::Arc;

use pyfix_client::AnalysisService;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel
    pub msg_rx: mpsc::Receiver<Message>,

    service: Arc<S>,
}

impl<S> Engine<S>
where
    S: AnalysisService + Send + Sync + 'static,
{
    pub fn new(settings: Settings, service: S) -> Self {
        let state = AppState::with_settings(settings).with_server_label(service.describe());
        let (msg_tx, msg_rx) = mpsc::channel(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            service: Arc::new(service),
        }
    }

    /// Turn SIGINT/SIGTERM into `Message::Quit`
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update loop
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.service);
    }

    /// Process every message already queued. Returns how many were handled.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task or signal
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyfix_client::test_utils::{sample_result, MockAnalysisService};
    use std::time::Duration;
    use tempfile::tempdir;

    async fn step<S>(engine: &mut Engine<S>)
    where
        S: AnalysisService + Send + Sync + 'static,
    {
        let msg = tokio::time::timeout(Duration::from_secs(5), engine.next_message())
            .await
            .expect("timed out")
            .expect("channel closed");
        engine.process_message(msg);
    }

    #[tokio::test]
    async fn test_engine_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("script.py");
        std::fs::write(&path, "x = 1\n").unwrap();

        let service = MockAnalysisService::succeeding(sample_result());
        let mut engine = Engine::new(Settings::default(), service.clone());
        assert_eq!(engine.state.server_label, "mock://analysis");

        engine.process_message(Message::LoadFile { path });
        step(&mut engine).await;
        assert!(engine.state.can_analyze());

        engine.process_message(Message::Analyze);
        assert!(engine.state.busy);
        step(&mut engine).await;

        assert!(!engine.state.busy);
        assert_eq!(engine.state.result(), Some(&sample_result()));
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_engine_failure_keeps_idle_and_error() {
        let mut engine = Engine::new(Settings::default(), MockAnalysisService::refusing());
        engine.state.selected_file =
            Some(pyfix_client::test_utils::selected_file("a.py", "x = 1"));

        engine.process_message(Message::Analyze);
        step(&mut engine).await;

        assert!(!engine.state.busy);
        assert!(engine.state.can_analyze());
        assert!(engine.state.error_text().unwrap().starts_with("Request failed:"));
    }

    #[tokio::test]
    async fn test_drain_processes_queued_messages() {
        let mut engine = Engine::new(Settings::default(), MockAnalysisService::refusing());
        engine.msg_sender().send(Message::Tick).await.unwrap();
        engine.msg_sender().send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(engine.should_quit());
    }
}

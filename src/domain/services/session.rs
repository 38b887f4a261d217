#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Conversation;
use super::Scroll;
use super::Uploader;
use crate::domain::models::Action;
use crate::domain::models::Answer;
use crate::domain::models::Notice;

pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What is the main topic of this document?",
    "Can you summarize the key points?",
    "What are the important findings?",
    "Are there any recommendations mentioned?",
];

/// The aggregate state for one document session, owned by the UI loop for the
/// lifetime of the process. Composes the uploader and the conversation, and
/// gates the chat surface on upload success.
#[derive(Default)]
pub struct SessionState {
    pub uploader: Uploader,
    pub conversation: Conversation,
    pub notices: Vec<Notice>,
    pub scroll: Scroll,
}

impl SessionState {
    /// The chat surface is reachable only once a document has been ingested.
    pub fn chat_visible(&self) -> bool {
        return self.uploader.document_ready;
    }

    /// True while either request kind is outstanding. Submission controls are
    /// disabled for the duration, which is what rules out overlapping
    /// requests.
    pub fn pending_request(&self) -> bool {
        return self.uploader.uploading || self.conversation.waiting_for_backend;
    }

    /// Entry point for both the typed and the pasted document path. Terminals
    /// quote dropped paths that contain spaces, so quotes are stripped before
    /// validation.
    pub fn submit_document(
        &mut self,
        raw_path: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let trimmed = raw_path.trim().trim_matches('"').trim_matches('\'');
        if trimmed.is_empty() {
            return Ok(());
        }

        if let Some(notice) = self.uploader.submit(path::Path::new(trimmed), tx)? {
            self.notices.push(notice);
        }

        return Ok(());
    }

    pub fn handle_upload_result(&mut self, success: bool) {
        let notice = self.uploader.handle_result(success);
        self.notices.push(notice);
    }

    pub fn ask(&mut self, question: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        return self.conversation.ask(question, tx);
    }

    /// Suggested questions are input sugar. Selecting one goes through the
    /// same `ask` entry point as a typed question.
    pub fn ask_suggested(
        &mut self,
        index: usize,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if index == 0 || index > SUGGESTED_QUESTIONS.len() {
            self.notices.push(Notice::error(
                "Unknown suggestion",
                &format!(
                    "Pick a suggestion between 1 and {}.",
                    SUGGESTED_QUESTIONS.len()
                ),
            ));
            return Ok(());
        }

        return self.ask(SUGGESTED_QUESTIONS[index - 1], tx);
    }

    pub fn handle_answer(&mut self, answer: Answer) {
        self.conversation.handle_answer(answer);
        self.scroll.last();
    }

    pub fn handle_ask_error(&mut self) {
        let notice = self.conversation.handle_error();
        self.notices.push(notice);
        self.scroll.last();
    }

    /// Discards the whole session. The next render starts from the upload
    /// surface with a fresh greeting, the same state the process boots into.
    pub fn reset(&mut self) {
        *self = SessionState::default();
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        return self.notices.last();
    }
}

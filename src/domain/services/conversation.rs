#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Answer;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Notice;

pub const GREETING: &str = "Hello! I've processed your document and I'm ready to help you explore its content. You can ask me questions about the document, and I'll answer with supporting source excerpts when I can. What would you like to know?";

pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error while processing your question. Please make sure the inference server is running and try again.";

/// Owns the ordered transcript and the assistant-is-typing flag. The
/// transcript always starts with a synthetic greeting, no backend round-trip
/// involved.
pub struct Conversation {
    pub messages: Vec<Message>,
    pub waiting_for_backend: bool,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation {
            messages: vec![Message::new(Author::Assistant, GREETING)],
            waiting_for_backend: false,
        };
    }
}

impl Conversation {
    /// Appends the user's question and queues the backend request. Questions
    /// that are empty after trimming are dropped without a request.
    pub fn ask(&mut self, question: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(());
        }

        self.messages.push(Message::new(Author::User, question));
        self.waiting_for_backend = true;
        tx.send(Action::AskQuestion(question.to_string()))?;

        return Ok(());
    }

    pub fn handle_answer(&mut self, answer: Answer) {
        let mut message = Message::new(Author::Assistant, &answer.text);
        if let Some(excerpt) = answer.source_excerpt {
            message = message.with_source_excerpt(&excerpt);
        }

        self.messages.push(message);
        self.waiting_for_backend = false;
    }

    /// The failed question stays in the transcript. Only a fixed fallback
    /// answer is appended, never a rollback.
    pub fn handle_error(&mut self) -> Notice {
        self.messages.push(Message::new_with_type(
            Author::Assistant,
            MessageType::Error,
            FALLBACK_ANSWER,
        ));
        self.waiting_for_backend = false;

        return Notice::error(
            "Connection error",
            "Unable to reach the inference backend. Please check that the server is running.",
        );
    }
}

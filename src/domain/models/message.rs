#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
}

fn wrap_lines(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut char_count = 0;
        let mut current_lines: Vec<&str> = vec![];

        for word in full_line.split(' ') {
            if word.len() + char_count + 1 > line_max_width {
                lines.push(current_lines.join(" ").trim_end().to_string());
                current_lines = vec![word];
                char_count = word.len() + 1;
            } else {
                current_lines.push(word);
                char_count += word.len() + 1;
            }
        }
        if !current_lines.is_empty() {
            lines.push(current_lines.join(" ").trim_end().to_string());
        }
    }

    return lines;
}

/// One turn in the conversation. The transcript is append-only, a message is
/// never mutated once it has been pushed.
#[derive(Clone, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub source_excerpt: Option<String>,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            source_excerpt: None,
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            source_excerpt: None,
            mtype,
        };
    }

    pub fn with_source_excerpt(mut self, excerpt: &str) -> Message {
        self.source_excerpt = Some(excerpt.to_string());
        return self;
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        return wrap_lines(&self.text, line_max_width);
    }

    pub fn excerpt_string_lines(&self, line_max_width: usize) -> Vec<String> {
        if let Some(excerpt) = &self.source_excerpt {
            return wrap_lines(excerpt, line_max_width);
        }

        return vec![];
    }
}

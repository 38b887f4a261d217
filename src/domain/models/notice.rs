use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-visible notification, rendered outside the transcript. Notices never
/// become part of the message history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: &str, text: &str) -> Notice {
        return Notice {
            level: NoticeLevel::Info,
            title: title.to_string(),
            text: text.to_string(),
        };
    }

    pub fn error(title: &str, text: &str) -> Notice {
        return Notice {
            level: NoticeLevel::Error,
            title: title.to_string(),
            text: text.to_string(),
        };
    }
}

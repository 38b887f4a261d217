use std::path;

pub enum Action {
    AskQuestion(String),
    UploadDocument(path::PathBuf),
}

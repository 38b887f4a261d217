use anyhow::Result;
use async_trait::async_trait;

/// A PDF ready to be shipped to the backend. The worker reads the bytes off
/// disk so the UI never blocks on file IO.
pub struct DocumentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A resolved backend answer. `source_excerpt` carries the supporting
/// passages, already joined for display, when the backend returned any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source_excerpt: Option<String>,
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the backend is reachable before the first
    /// upload is attempted.
    async fn health_check(&self) -> Result<()>;

    /// Submits a PDF for ingestion. Success means the backend has processed
    /// the document and is ready to answer questions about it.
    async fn upload_document(&self, upload: DocumentUpload) -> Result<()>;

    /// Requests an answer for a single question about the ingested document.
    async fn ask_question(&self, question: &str) -> Result<Answer>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;

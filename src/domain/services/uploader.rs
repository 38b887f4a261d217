#[cfg(test)]
#[path = "uploader_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Notice;

fn is_pdf(file_path: &path::Path) -> bool {
    if let Some(extension) = file_path.extension() {
        return extension.to_string_lossy().eq_ignore_ascii_case("pdf");
    }

    return false;
}

/// Drives document submission for a session. A document has to be ingested by
/// the backend before the chat surface opens up.
#[derive(Default)]
pub struct Uploader {
    pub document_ready: bool,
    pub uploading: bool,
}

impl Uploader {
    /// Validates a path and queues the upload. Anything that isn't a PDF is
    /// rejected here, before a request is issued.
    pub fn submit(
        &mut self,
        file_path: &path::Path,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<Option<Notice>> {
        if !is_pdf(file_path) {
            return Ok(Some(Notice::error(
                "Unsupported file type",
                "Please choose a PDF file.",
            )));
        }

        self.uploading = true;
        tx.send(Action::UploadDocument(file_path.to_path_buf()))?;

        return Ok(None);
    }

    /// Folds the upload outcome back in. A failure leaves `document_ready`
    /// untouched, so a previously ingested document stays usable.
    pub fn handle_result(&mut self, success: bool) -> Notice {
        self.uploading = false;

        if success {
            self.document_ready = true;
            return Notice::info(
                "Document uploaded successfully!",
                "Your assistant is ready to help you explore the content.",
            );
        }

        return Notice::error(
            "Upload failed",
            "There was an error uploading your file. Please make sure the inference server is running.",
        );
    }
}

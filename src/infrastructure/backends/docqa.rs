#[cfg(test)]
#[path = "docqa_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Answer;
use crate::domain::models::Backend;
use crate::domain::models::DocumentUpload;

pub const UNEXPECTED_FORMAT_ANSWER: &str =
    "I received your question but got an unexpected response format.";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct QuestionRequest {
    question: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AnswerResponse {
    answer: Option<String>,
    response: Option<String>,
    source_documents: Option<Vec<String>>,
}

/// The answer text arrives under either field name depending on the backend
/// revision. Preference order: `answer`, then `response`.
fn resolve_answer_text(res: &AnswerResponse) -> String {
    for field in [&res.answer, &res.response] {
        if let Some(text) = field {
            return text.to_string();
        }
    }

    return UNEXPECTED_FORMAT_ANSWER.to_string();
}

/// Supporting passages are joined with a blank line between each, in the
/// order the backend returned them. An absent or empty list yields none.
fn resolve_source_excerpt(res: &AnswerResponse) -> Option<String> {
    if let Some(passages) = &res.source_documents {
        if !passages.is_empty() {
            return Some(passages.join("\n\n"));
        }
    }

    return None;
}

pub struct DocQa {
    url: String,
    timeout: String,
}

impl Default for DocQa {
    fn default() -> DocQa {
        return DocQa {
            url: Config::get(ConfigKey::BackendURL),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Backend for DocQa {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Backend URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(format!("{url}/openapi.json", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Inference backend is not reachable");
            bail!("Inference backend is not reachable");
        }

        let status = res.unwrap().status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Inference backend health check failed");
            bail!("Inference backend health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn upload_document(&self, upload: DocumentUpload) -> Result<()> {
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let res = reqwest::Client::new()
            .post(format!("{url}/upload-pdf", url = self.url))
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to upload document to the inference backend"
            );
            bail!("Failed to upload document to the inference backend");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn ask_question(&self, question: &str) -> Result<Answer> {
        let req = QuestionRequest {
            question: question.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/ask-question", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make question request to the inference backend"
            );
            bail!("Failed to make question request to the inference backend");
        }

        let body = res.json::<AnswerResponse>().await?;
        tracing::debug!(body = ?body, "Question response");

        return Ok(Answer {
            text: resolve_answer_text(&body),
            source_excerpt: resolve_source_excerpt(&body),
        });
    }
}

use anyhow::Result;

use super::resolve_answer_text;
use super::resolve_source_excerpt;
use super::AnswerResponse;
use super::DocQa;
use super::UNEXPECTED_FORMAT_ANSWER;
use crate::domain::models::Backend;
use crate::domain::models::DocumentUpload;

impl DocQa {
    fn with_url(url: String) -> DocQa {
        return DocQa {
            url,
            timeout: "200".to_string(),
        };
    }
}

fn fixture_upload() -> DocumentUpload {
    return DocumentUpload {
        file_name: "paper.pdf".to_string(),
        bytes: b"%PDF-1.4 stub".to_vec(),
    };
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/openapi.json")
        .with_status(200)
        .create();

    let backend = DocQa::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/openapi.json")
        .with_status(500)
        .create();

    let backend = DocQa::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_uploads_documents() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/upload-pdf")
        .with_status(200)
        .with_body(r#"{"message": "PDF uploaded and processed successfully."}"#)
        .create();

    let backend = DocQa::with_url(server.url());
    backend.upload_document(fixture_upload()).await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_uploads_on_server_error() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/upload-pdf").with_status(500).create();

    let backend = DocQa::with_url(server.url());
    let res = backend.upload_document(fixture_upload()).await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_asks_questions() -> Result<()> {
    let body = serde_json::to_string(&AnswerResponse {
        answer: Some("X".to_string()),
        response: None,
        source_documents: Some(vec!["A".to_string(), "B".to_string()]),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask-question")
        .with_status(200)
        .with_body(body)
        .create();

    let backend = DocQa::with_url(server.url());
    let answer = backend
        .ask_question("What is the main topic of this document?")
        .await?;

    assert_eq!(answer.text, "X");
    assert_eq!(answer.source_excerpt, Some("A\n\nB".to_string()));
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_accepts_the_alternate_answer_field() -> Result<()> {
    let body = serde_json::to_string(&AnswerResponse {
        answer: None,
        response: Some("Y".to_string()),
        source_documents: None,
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask-question")
        .with_status(200)
        .with_body(body)
        .create();

    let backend = DocQa::with_url(server.url());
    let answer = backend.ask_question("Anything in here?").await?;

    assert_eq!(answer.text, "Y");
    assert_eq!(answer.source_excerpt, None);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_on_unexpected_response_shapes() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask-question")
        .with_status(200)
        .with_body("{}")
        .create();

    let backend = DocQa::with_url(server.url());
    let answer = backend.ask_question("Anything in here?").await?;

    assert_eq!(answer.text, UNEXPECTED_FORMAT_ANSWER);
    assert_eq!(answer.source_excerpt, None);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_asks_on_server_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask-question")
        .with_status(500)
        .create();

    let backend = DocQa::with_url(server.url());
    let res = backend.ask_question("Anything in here?").await;

    assert!(res.is_err());
    mock.assert();
}

#[test]
fn it_prefers_answer_over_response() {
    let res = AnswerResponse {
        answer: Some("X".to_string()),
        response: Some("Y".to_string()),
        source_documents: None,
    };

    assert_eq!(resolve_answer_text(&res), "X");
}

#[test]
fn it_skips_empty_source_lists() {
    let res = AnswerResponse {
        answer: Some("X".to_string()),
        response: None,
        source_documents: Some(vec![]),
    };

    assert_eq!(resolve_source_excerpt(&res), None);
}

#[test]
fn it_joins_passages_in_order() {
    let res = AnswerResponse {
        answer: Some("X".to_string()),
        response: None,
        source_documents: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
    };

    assert_eq!(resolve_source_excerpt(&res), Some("A\n\nB\n\nC".to_string()));
}

use std::path::Path;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::Uploader;
use crate::domain::models::Action;
use crate::domain::models::NoticeLevel;

#[test]
fn it_rejects_non_pdf_files() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut uploader = Uploader::default();

    let notice = uploader.submit(Path::new("./notes.txt"), &tx)?;

    let notice = notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "Unsupported file type");
    assert!(!uploader.uploading);
    assert!(!uploader.document_ready);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_rejects_paths_without_extension() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut uploader = Uploader::default();

    let notice = uploader.submit(Path::new("./paper"), &tx)?;

    assert!(notice.is_some());
    assert!(!uploader.uploading);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_queues_pdf_uploads() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut uploader = Uploader::default();

    let notice = uploader.submit(Path::new("./paper.pdf"), &tx)?;

    assert!(notice.is_none());
    assert!(uploader.uploading);
    assert!(!uploader.document_ready);

    match rx.try_recv()? {
        Action::UploadDocument(file_path) => {
            assert_eq!(file_path, Path::new("./paper.pdf"));
        }
        _ => bail!("Wrong action"),
    }

    return Ok(());
}

#[test]
fn it_accepts_uppercase_extensions() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut uploader = Uploader::default();

    let notice = uploader.submit(Path::new("./PAPER.PDF"), &tx)?;

    assert!(notice.is_none());
    assert!(uploader.uploading);
    assert!(rx.try_recv().is_ok());

    return Ok(());
}

#[test]
fn it_marks_document_ready_on_success() {
    let mut uploader = Uploader {
        document_ready: false,
        uploading: true,
    };

    let notice = uploader.handle_result(true);

    assert!(uploader.document_ready);
    assert!(!uploader.uploading);
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.title, "Document uploaded successfully!");
}

#[test]
fn it_keeps_document_not_ready_on_failure() {
    let mut uploader = Uploader {
        document_ready: false,
        uploading: true,
    };

    let notice = uploader.handle_result(false);

    assert!(!uploader.document_ready);
    assert!(!uploader.uploading);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "Upload failed");
}

#[test]
fn it_keeps_document_ready_on_later_failure() {
    let mut uploader = Uploader {
        document_ready: true,
        uploading: true,
    };

    uploader.handle_result(false);

    assert!(uploader.document_ready);
    assert!(!uploader.uploading);
}

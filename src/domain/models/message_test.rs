use super::Author;
use super::Message;
use super::MessageType;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Assistant, "Hi there!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "Assistant");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.source_excerpt, None);
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Assistant, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.mtype, MessageType::Error);
}

#[test]
fn it_executes_message_type() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_attaches_source_excerpts() {
    let msg = Message::new(Author::Assistant, "The topic is oats.")
        .with_source_excerpt("Oats are a cereal grain.");
    assert_eq!(
        msg.source_excerpt,
        Some("Oats are a cereal grain.".to_string())
    );
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_as_string_lines() {
    let msg = Message::new(Author::User, "one two three four");
    let lines = msg.as_string_lines(10);
    assert_eq!(
        lines,
        vec![
            "one two".to_string(),
            "three".to_string(),
            "four".to_string()
        ]
    );
}

#[test]
fn it_executes_excerpt_string_lines() {
    let msg =
        Message::new(Author::Assistant, "Answer.").with_source_excerpt("first passage\n\nsecond");
    let lines = msg.excerpt_string_lines(80);
    assert_eq!(
        lines,
        vec![
            "first passage".to_string(),
            " ".to_string(),
            "second".to_string()
        ]
    );
}

#[test]
fn it_returns_no_excerpt_lines_without_excerpt() {
    let msg = Message::new(Author::Assistant, "Answer.");
    assert!(msg.excerpt_string_lines(80).is_empty());
}

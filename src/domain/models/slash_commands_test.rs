use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_quit() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_new_document() {
    let cmd = SlashCommand::parse("/n").unwrap();
    assert!(cmd.is_new_document());
}
#[test]
fn it_is_new_document() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(cmd.is_new_document());
}
#[test]
fn it_is_not_new_document() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(!cmd.is_new_document());
}

#[test]
fn it_is_short_suggest() {
    let cmd = SlashCommand::parse("/s 1").unwrap();
    assert!(cmd.is_suggest());
}
#[test]
fn it_is_suggest() {
    let cmd = SlashCommand::parse("/suggest 2").unwrap();
    assert!(cmd.is_suggest());
}
#[test]
fn it_parses_suggestion_index() {
    let cmd = SlashCommand::parse("/suggest 3").unwrap();
    assert_eq!(cmd.suggestion_index(), Some(3));
}
#[test]
fn it_handles_missing_suggestion_index() {
    let cmd = SlashCommand::parse("/suggest").unwrap();
    assert_eq!(cmd.suggestion_index(), None);
}
#[test]
fn it_handles_invalid_suggestion_index() {
    let cmd = SlashCommand::parse("/suggest one").unwrap();
    assert_eq!(cmd.suggestion_index(), None);
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_not_help() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(!cmd.is_help());
}

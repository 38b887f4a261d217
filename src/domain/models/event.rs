use tui_textarea::Input;

use super::Answer;

pub enum Event {
    AnswerReceived(Answer),
    AskFailed(),
    UploadComplete(bool),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}

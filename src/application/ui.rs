use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::MessageType;
use crate::domain::models::Notice;
use crate::domain::models::NoticeLevel;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::SessionState;
use crate::domain::services::SUGGESTED_QUESTIONS;
use crate::infrastructure::backends::BackendManager;

const UPLOAD_INPUT_TITLE: &str = "Document path";
const CHAT_INPUT_TITLE: &str = "Ask a question about your document";

fn transcript_lines(session: &SessionState, line_max_width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![];

    for message in &session.conversation.messages {
        let mut author_style = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        if message.author == Author::User {
            author_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }

        let mut text_style = Style::default();
        if message.message_type() == MessageType::Error {
            text_style = Style::default().fg(Color::Red);
        }

        lines.push(Line::from(Span::styled(
            message.author.to_string(),
            author_style,
        )));
        for text_line in message.as_string_lines(line_max_width) {
            lines.push(Line::from(Span::styled(text_line, text_style)));
        }

        let excerpt_lines = message.excerpt_string_lines(line_max_width.saturating_sub(2));
        if !excerpt_lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Source from document:".to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for excerpt_line in excerpt_lines {
                lines.push(Line::from(Span::styled(
                    format!("  {excerpt_line}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        lines.push(Line::from(""));
    }

    // Only the greeting so far. Offer the canned questions until the first
    // real exchange happens.
    if session.conversation.messages.len() == 1 {
        lines.push(Line::from(Span::styled(
            "Suggested questions:".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (idx, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
            let n = idx + 1;
            lines.push(Line::from(format!("- ({n}) {question}")));
        }
        lines.push(Line::from(
            "Use /suggest NUMBER to ask one, or type your own question.",
        ));
    }

    return lines;
}

fn upload_instructions() -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Upload your PDF document",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Type the path to a PDF file below and press Enter, or drag and drop the file onto the terminal.",
        ),
        Line::from(
            "The document is sent to the inference backend for processing before the chat opens.",
        ),
        Line::from(""),
        Line::from("Press CTRL+C to quit."),
    ];

    return Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
}

fn render_notice_line<B: Backend>(frame: &mut Frame<B>, rect: Rect, notice: Option<&Notice>) {
    if notice.is_none() {
        frame.render_widget(Paragraph::new("CTRL+C to quit, /help for commands."), rect);
        return;
    }

    let notice = notice.unwrap();
    let mut style = Style::default().fg(Color::Green);
    if notice.level == NoticeLevel::Error {
        style = Style::default().fg(Color::Red);
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(notice.title.to_string(), style.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", notice.text), style),
        ])),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut SessionState,
    events: &mut EventsService,
    tx: mpsc::UnboundedSender<Action>,
) -> Result<()> {
    let mut path_input = TextArea::new(UPLOAD_INPUT_TITLE);
    let mut question_input = TextArea::new(CHAT_INPUT_TITLE);

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Max(4),
                    Constraint::Max(1),
                ])
                .split(frame.size());

            if session.chat_visible() {
                let line_max_width = layout[0].width.saturating_sub(2) as usize;
                let lines = transcript_lines(session, line_max_width);
                session.scroll.set_state(lines.len() as u16, layout[0].height);
                if session.pending_request() {
                    session.scroll.last();
                }

                frame.render_widget(
                    Paragraph::new(Text::from(lines)).scroll((session.scroll.position, 0)),
                    layout[0],
                );
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    layout[0].inner(&Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut session.scroll.scrollbar_state,
                );

                if session.conversation.waiting_for_backend {
                    Loading::new("Assistant is typing...").render(frame, layout[1]);
                } else {
                    frame.render_widget(question_input.widget(), layout[1]);
                }
            } else {
                frame.render_widget(upload_instructions(), layout[0]);

                if session.uploader.uploading {
                    Loading::new("Processing your document...").render(frame, layout[1]);
                } else {
                    frame.render_widget(path_input.widget(), layout[1]);
                }
            }

            render_notice_line(frame, layout[2], session.last_notice());
        })?;

        match events.next().await? {
            Event::UploadComplete(success) => {
                session.handle_upload_result(success);
            }
            Event::AnswerReceived(answer) => {
                session.handle_answer(answer);
            }
            Event::AskFailed() => {
                session.handle_ask_error();
            }
            Event::KeyboardCTRLC() => break,
            Event::KeyboardEnter() => {
                if session.pending_request() {
                    continue;
                }

                if !session.chat_visible() {
                    let input_str = path_input.lines().join("\n");
                    path_input = TextArea::new(UPLOAD_INPUT_TITLE);
                    session.submit_document(&input_str, &tx)?;
                    continue;
                }

                let input_str = question_input.lines().join("\n");
                if input_str.is_empty() {
                    continue;
                }
                question_input = TextArea::new(CHAT_INPUT_TITLE);

                if let Some(command) = SlashCommand::parse(&input_str) {
                    if command.is_quit() {
                        break;
                    }

                    if command.is_new_document() {
                        session.reset();
                        path_input = TextArea::new(UPLOAD_INPUT_TITLE);
                        continue;
                    }

                    if command.is_suggest() {
                        match command.suggestion_index() {
                            Some(index) => session.ask_suggested(index, &tx)?,
                            None => session.notices.push(Notice::error(
                                "Unknown suggestion",
                                "Usage: /suggest NUMBER",
                            )),
                        }
                        continue;
                    }

                    if command.is_help() {
                        session.notices.push(Notice::info(
                            "Chat commands",
                            "/suggest N asks a suggested question, /new starts over with a new document, /quit exits.",
                        ));
                        continue;
                    }
                }

                session.ask(&input_str, &tx)?;
                session.scroll.last();
            }
            Event::KeyboardPaste(text) => {
                if session.pending_request() {
                    continue;
                }

                // A file dropped onto the terminal arrives as a pasted path.
                // In the upload surface that is a submission, in the chat it
                // is plain input.
                if !session.chat_visible() {
                    session.submit_document(&text, &tx)?;
                } else {
                    question_input.insert_str(text.replace('\n', " "));
                }
            }
            Event::KeyboardCharInput(input) => {
                if session.pending_request() {
                    continue;
                }

                if !session.chat_visible() {
                    path_input.input(input);
                } else {
                    question_input.input(input);
                }
            }
            Event::UIScrollUp() => session.scroll.up(),
            Event::UIScrollDown() => session.scroll.down(),
            Event::UIScrollPageUp() => session.scroll.up_page(),
            Event::UIScrollPageDown() => session.scroll.down_page(),
            Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut session = SessionState::default();
    if let Err(err) = BackendManager::get().health_check().await {
        session.notices.push(Notice::error(
            "Backend unreachable",
            &format!("The inference backend did not respond, uploads will fail until it is running. Error: {err}"),
        ));
    }

    let mut events = EventsService::new(rx);
    start_loop(&mut terminal, &mut session, &mut events, tx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}

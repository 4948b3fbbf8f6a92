use echochat_chat::{ChatScreen, ChatView, DisplayError, DisplaySink, Message, RecordingSink};
use echochat_types::WELCOME_TEXT;

/// Sink that fails a fixed number of times before recording anything
#[derive(Default)]
struct FlakySink {
    failures_left: usize,
    shown: Vec<String>,
}

impl FlakySink {
    fn failing(times: usize) -> Self {
        Self {
            failures_left: times,
            shown: Vec::new(),
        }
    }
}

impl DisplaySink for FlakySink {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(DisplayError::Render("surface detached".to_string()));
        }
        self.shown.push(message.text().to_string());
        Ok(())
    }
}

#[test]
fn test_open_renders_welcome() {
    let view = ChatView::open(ChatScreen::new(), RecordingSink::new()).unwrap();
    assert_eq!(view.sink().texts(), vec![WELCOME_TEXT]);
    assert_eq!(view.pending(), 0);
}

#[test]
fn test_sink_sees_exactly_the_log() {
    let mut view = ChatView::open(ChatScreen::new(), RecordingSink::new()).unwrap();
    for text in ["one", "  ", "two", "", "three"] {
        view.screen_mut().set_input(text);
        view.submit().unwrap();
    }

    assert_eq!(view.screen().log().len(), 7);
    assert_eq!(view.sink().shown(), view.screen().log().entries());
}

#[test]
fn test_failed_render_keeps_state_and_retries() {
    let mut view = ChatView::open(ChatScreen::new(), FlakySink::default()).unwrap();
    view.sink_mut().failures_left = 1;

    view.screen_mut().set_input("Hello");
    let err = view.submit().unwrap_err();
    assert!(matches!(err, DisplayError::Render(_)));

    // State already moved on
    assert_eq!(view.screen().log().len(), 3);
    assert_eq!(view.screen().input().as_str(), "");
    assert_eq!(view.pending(), 2);

    view.flush().unwrap();
    assert_eq!(view.pending(), 0);
    assert_eq!(
        view.sink().shown,
        vec![
            WELCOME_TEXT.to_string(),
            "Bạn: Hello".to_string(),
            "Bot: Tôi đã nhận được tin nhắn: Hello".to_string(),
        ]
    );
}

#[test]
fn test_open_propagates_sink_error() {
    let result = ChatView::open(ChatScreen::new(), FlakySink::failing(1));
    assert!(matches!(result, Err(DisplayError::Render(_))));
}

#[test]
fn test_partial_render_resumes_at_failed_entry() {
    let mut view = ChatView::new(ChatScreen::new(), FlakySink::default());
    view.flush().unwrap();

    view.screen_mut().set_input("a");
    view.submit().unwrap();

    // Mutate state behind the view's back
    view.screen_mut().set_input("b");
    let _ = view.screen_mut().submit();
    assert_eq!(view.pending(), 2);

    view.sink_mut().failures_left = 1;
    assert!(view.flush().is_err());
    assert_eq!(view.pending(), 2);

    view.flush().unwrap();
    assert_eq!(view.sink().shown.len(), 5);
    assert_eq!(view.sink().shown[3], "Bạn: b");
}

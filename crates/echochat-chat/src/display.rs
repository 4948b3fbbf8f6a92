use echochat_types::Message;

/// Failure reported by a display sink while rendering an entry
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write entry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render entry: {0}")]
    Render(String),
}

/// Capability to append one entry to a display surface.
///
/// Sinks only ever see entries in log order, each one once, unless the
/// caller explicitly replays the log.
pub trait DisplaySink {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError> {
        (**self).show(message)
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError> {
        (**self).show(message)
    }
}

/// In-memory sink that keeps everything it was asked to show
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    shown: Vec<Message>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> &[Message] {
        &self.shown
    }

    pub fn texts(&self) -> Vec<&str> {
        self.shown.iter().map(Message::text).collect()
    }
}

impl DisplaySink for RecordingSink {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError> {
        self.shown.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.show(&Message::new("one")).unwrap();
        sink.show(&Message::new("two")).unwrap();
        assert_eq!(sink.texts(), vec!["one", "two"]);
    }

    #[test]
    fn test_sink_through_mut_ref_and_box() {
        fn show_one(mut sink: impl DisplaySink, text: &str) {
            sink.show(&Message::new(text)).unwrap();
        }

        let mut sink = RecordingSink::new();
        show_one(&mut sink, "ref");
        show_one(Box::new(&mut sink) as Box<dyn DisplaySink + '_>, "boxed");

        assert_eq!(sink.texts(), vec!["ref", "boxed"]);
    }

    #[test]
    fn test_display_error_messages() {
        let err = DisplayError::Render("container missing".to_string());
        assert_eq!(err.to_string(), "failed to render entry: container missing");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DisplayError = io.into();
        assert!(matches!(err, DisplayError::Io(_)));
        assert_eq!(err.to_string(), "failed to write entry: closed");
    }
}

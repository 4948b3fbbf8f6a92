use crate::chat::screen::{ChatScreen, Submission};
use crate::display::{DisplayError, DisplaySink};

/// Rendering adapter between a [`ChatScreen`] and a display surface.
///
/// The view remembers how many log entries the sink has already shown and
/// forwards only the new ones after each state change.
pub struct ChatView<S> {
    screen: ChatScreen,
    sink: S,
    rendered: usize,
}

impl<S: DisplaySink> ChatView<S> {
    /// Pair a screen with a sink without rendering anything yet
    pub fn new(screen: ChatScreen, sink: S) -> Self {
        Self {
            screen,
            sink,
            rendered: 0,
        }
    }

    /// Pair a screen with a sink and render what the screen already holds
    pub fn open(screen: ChatScreen, sink: S) -> Result<Self, DisplayError> {
        let mut view = Self::new(screen, sink);
        view.flush()?;
        Ok(view)
    }

    /// Run the send action and render whatever it appended.
    ///
    /// The state change is kept even when rendering fails; the entries stay
    /// pending for the next [`flush`](Self::flush).
    pub fn submit(&mut self) -> Result<Submission, DisplayError> {
        let outcome = self.screen.submit();
        self.flush()?;
        Ok(outcome)
    }

    /// Render every entry the sink has not shown yet
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        while let Some(message) = self.screen.log().get(self.rendered) {
            self.sink.show(message)?;
            self.rendered += 1;
        }
        Ok(())
    }

    /// Show the already rendered part of the log again, from the top
    pub fn replay(&mut self) -> Result<(), DisplayError> {
        for message in &self.screen.log().entries()[..self.rendered] {
            self.sink.show(message)?;
        }
        Ok(())
    }

    /// Number of entries appended but not shown yet
    pub fn pending(&self) -> usize {
        self.screen.log().len() - self.rendered
    }

    pub fn screen(&self) -> &ChatScreen {
        &self.screen
    }

    /// Mutable access for typing into the input buffer
    pub fn screen_mut(&mut self) -> &mut ChatScreen {
        &mut self.screen
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (ChatScreen, S) {
        (self.screen, self.sink)
    }
}

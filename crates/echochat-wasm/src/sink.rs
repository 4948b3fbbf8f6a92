use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use echochat_chat::{DisplayError, DisplaySink, Message};
use echochat_types::EntryStyle;

/// Display sink that appends one styled `div` per entry to a container
pub struct DomSink {
    document: Document,
    container: Element,
    style: EntryStyle,
}

impl DomSink {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
            style: EntryStyle::DEFAULT,
        }
    }

    fn append(&self, message: &Message) -> Result<(), JsValue> {
        let entry = dom::create_html_element_with_class(&self.document, "div", "chat-entry")?;
        entry.set_text_content(Some(message.text()));

        let css = entry.style();
        css.set_property("font-size", &format!("{}px", self.style.text_size))?;
        css.set_property("padding", &self.style.padding.to_css())?;
        css.set_property("margin", &self.style.margin.to_css())?;
        css.set_property("background-color", &self.style.background.to_css_hex())?;

        self.container.append_child(&entry)?;
        dom::scroll_to_bottom(&self.container);
        Ok(())
    }
}

impl DisplaySink for DomSink {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError> {
        self.append(message).map_err(render_error)
    }
}

fn render_error(err: JsValue) -> DisplayError {
    DisplayError::Render(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

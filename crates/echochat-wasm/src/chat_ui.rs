use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlInputElement, KeyboardEvent};

use crate::dom;
use crate::sink::DomSink;
use crate::{CONTAINER_ID, INPUT_ID, SEND_BUTTON_ID};
use echochat_chat::{ChatScreen, ChatView, ResponderKind, Submission};
use echochat_types::{INPUT_PLACEHOLDER, SCREEN_TITLE, SEND_LABEL};

type SharedView = Rc<RefCell<ChatView<DomSink>>>;

pub struct ChatApp {
    document: Document,
    input: HtmlInputElement,
    send_button: HtmlButtonElement,
    view: SharedView,
}

impl ChatApp {
    pub fn new(responder: ResponderKind) -> Result<Self, JsValue> {
        let document = crate::document()?;
        let container = dom::get_element_by_id(&document, CONTAINER_ID)?;
        let input = dom::get_input_by_id(&document, INPUT_ID)?;
        let send_button = dom::get_button_by_id(&document, SEND_BUTTON_ID)?;

        let sink = DomSink::new(document.clone(), container);
        let view = ChatView::open(ChatScreen::with_kind(responder), sink)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            document,
            input,
            send_button,
            view: Rc::new(RefCell::new(view)),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        self.document.set_title(SCREEN_TITLE);
        self.input.set_placeholder(INPUT_PLACEHOLDER);
        self.send_button.set_text_content(Some(SEND_LABEL));

        self.setup_send_button()?;
        self.setup_enter_key()?;
        self.setup_input_watch()?;

        sync_input(&self.view, &self.input, &self.send_button);
        Ok(())
    }

    fn setup_send_button(&self) -> Result<(), JsValue> {
        let view = self.view.clone();
        let input = self.input.clone();
        let button = self.send_button.clone();

        dom::add_listener(&self.send_button, "click", move |_event| {
            send_from_input(&view, &input, &button);
        })
    }

    fn setup_enter_key(&self) -> Result<(), JsValue> {
        let view = self.view.clone();
        let input = self.input.clone();
        let button = self.send_button.clone();

        dom::add_listener(&self.input, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Enter" && !key_event.is_composing() {
                event.prevent_default();
                send_from_input(&view, &input, &button);
            }
        })
    }

    /// Keep the buffer and the send button state in step with typing
    fn setup_input_watch(&self) -> Result<(), JsValue> {
        let view = self.view.clone();
        let input = self.input.clone();
        let button = self.send_button.clone();

        dom::add_listener(&self.input, "input", move |_event| {
            view.borrow_mut().screen_mut().set_input(input.value());
            button.set_disabled(!view.borrow().screen().can_send());
        })
    }
}

/// Copy the field into the buffer, submit, and copy the buffer back.
/// A blank submission leaves the field as typed.
fn send_from_input(view: &SharedView, input: &HtmlInputElement, button: &HtmlButtonElement) {
    let mut view = view.borrow_mut();
    view.screen_mut().set_input(input.value());

    match view.submit() {
        Ok(Submission::Sent { .. }) => {
            log::debug!("{} entries in conversation", view.screen().log().len());
        }
        Ok(Submission::Ignored) => {}
        Err(e) => {
            log::error!("Failed to render messages: {}", e);
        }
    }

    input.set_value(view.screen().input().as_str());
    button.set_disabled(!view.screen().can_send());
}

fn sync_input(view: &SharedView, input: &HtmlInputElement, button: &HtmlButtonElement) {
    let view = view.borrow();
    input.set_value(view.screen().input().as_str());
    button.set_disabled(!view.screen().can_send());
}

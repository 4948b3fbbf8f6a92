use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod chat_ui;
mod dom;
mod sink;

pub use sink::DomSink;

/// Element ids the host page must provide
pub const CONTAINER_ID: &str = "chatContainer";
pub const INPUT_ID: &str = "messageInput";
pub const SEND_BUTTON_ID: &str = "sendButton";

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("echochat WASM initialized");
}

/// Initialize the chat screen page.
///
/// `responder` selects the reply strategy ("echo" when omitted).
#[wasm_bindgen]
pub fn init_chat_screen(responder: Option<String>) -> Result<(), JsValue> {
    let kind = match responder {
        Some(name) => name
            .parse()
            .map_err(|e: echochat_chat::ParseResponderError| JsValue::from_str(&e.to_string()))?,
        None => echochat_chat::ResponderKind::default(),
    };
    log::info!("Initializing chat screen ({} responder)", kind);
    chat_ui::ChatApp::new(kind)?.start()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring behavior into the browser DOM.
#[derive(Error, Debug)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,

    #[error("node is not mounted")]
    NodeMissing,

    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("intersection observer rejected: {reason}")]
    Observer { reason: String },
}

impl DomError {
    pub fn listener(event: &'static str, err: JsValue) -> Self {
        DomError::Listener {
            event,
            reason: format!("{:?}", err),
        }
    }

    pub fn observer(err: JsValue) -> Self {
        DomError::Observer {
            reason: format!("{:?}", err),
        }
    }
}

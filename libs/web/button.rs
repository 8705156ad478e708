use crate::escape::{escape_attr, escape_text};

const BUTTON_STYLE: &str =
    "padding:10px 20px;background:blue;color:white;border:none;border-radius:4px";

/// The shared clickable element: a label, an optional click handler,
/// and the fixed inline style.
pub struct Button {
    label: String,
    on_click: Option<String>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            on_click: None,
        }
    }

    /// Attach a click handler expression.
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<button");
        if let Some(handler) = &self.on_click {
            out.push_str(&format!(" onclick=\"{}\"", escape_attr(handler)));
        }
        out.push_str(&format!(" style=\"{BUTTON_STYLE}\">"));
        out.push_str(&escape_text(&self.label));
        out.push_str("</button>");
        out
    }
}

use crate::escape::{escape_attr, escape_text};

const BODY_STYLE: &str =
    "margin:0;padding:0;background-color:#FFFFFF;min-height:100vh;font-family:sans-serif";

/// Builder for the fixed document skeleton wrapping page content.
///
/// Metadata defaults to the dashboard's static values; children are
/// pre-rendered HTML fragments appended in order.
pub struct Page {
    lang: String,
    title: String,
    description: String,
    children: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            lang: "ko".to_string(),
            title: "CSMAC 대시보드".to_string(),
            description: "AI 기반 PDCA 관리 시스템".to_string(),
            children: Vec::new(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a pre-rendered HTML fragment to the body.
    pub fn child(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    /// Render the complete document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>");
        out.push_str(&format!("<html lang=\"{}\">", escape_attr(&self.lang)));
        out.push_str("<head>");
        out.push_str("<meta charset=\"utf-8\">");
        out.push_str(&format!("<title>{}</title>", escape_text(&self.title)));
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_attr(&self.description)
        ));
        out.push_str("</head>");
        out.push_str(&format!("<body style=\"{BODY_STYLE}\">"));
        for child in &self.children {
            out.push_str(child);
        }
        out.push_str("</body></html>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_skeleton_with_default_metadata() {
        let html = Page::new().render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ko\">"));
        assert!(html.contains("<title>CSMAC 대시보드</title>"));
        assert!(html.contains("content=\"AI 기반 PDCA 관리 시스템\""));
        assert!(html.contains("background-color:#FFFFFF"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn wraps_children_in_order() {
        let html = Page::new().child("<p>one</p>").child("<p>two</p>").render();
        let one = html.find("<p>one</p>").unwrap();
        let two = html.find("<p>two</p>").unwrap();
        assert!(one < two);
    }

    #[test]
    fn escapes_custom_title() {
        let html = Page::new().with_title("a < b").render();
        assert!(html.contains("<title>a &lt; b</title>"));
    }
}

/// Escape text for interpolation into element content.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for interpolation into a double-quoted attribute value.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(
            escape_text("<script>a & b</script>"),
            "&lt;script&gt;a &amp; b&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_quotes_in_attributes() {
        assert_eq!(escape_attr(r#"say("hi")"#), "say(&quot;hi&quot;)");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn leaves_plain_korean_text_untouched() {
        assert_eq!(escape_text("CSMAC 대시보드"), "CSMAC 대시보드");
    }
}

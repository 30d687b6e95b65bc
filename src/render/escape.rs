//! Escaping for every place user text meets markup or the terminal.

use std::borrow::Cow;

/// Escapes text for HTML and XML content and quoted attribute values.
pub fn markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escapes text for an XML document such as SVG.
///
/// Like [`markup`], but control characters XML 1.0 forbids (everything
/// below U+0020 except tab, newline and carriage return) become U+FFFD,
/// since a single one makes the whole document unparseable.
pub fn xml_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_xml_illegal) {
        return markup(text);
    }
    let legal: String = text
        .chars()
        .map(|c| if is_xml_illegal(c) { '\u{fffd}' } else { c })
        .collect();
    Cow::Owned(markup(&legal).into_owned())
}

fn is_xml_illegal(c: char) -> bool {
    c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')
}

/// Makes text safe to print on one terminal line.
///
/// Newlines and tabs become spaces; other control characters (including
/// ESC, which starts terminal escape sequences) become `?`.
pub fn terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '\n' | '\r' | '\t' => ' ',
                c if c.is_control() => '?',
                c => c,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_escapes_all_special_characters() {
        assert_eq!(
            markup(r#"<img src="x" onerror='alert(1)'> & co"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;alert(1)&#39;&gt; &amp; co"
        );
    }

    #[test]
    fn markup_borrows_plain_text() {
        assert!(matches!(markup("Troca de óleo"), Cow::Borrowed(_)));
    }

    #[test]
    fn xml_text_replaces_forbidden_control_characters() {
        assert_eq!(xml_text("ver\u{0b}nota\u{0c}<x>"), "ver\u{fffd}nota\u{fffd}&lt;x&gt;");
        assert_eq!(xml_text("a\tb"), "a\tb");
        assert!(matches!(xml_text("Troca de óleo"), Cow::Borrowed(_)));
    }

    #[test]
    fn terminal_neutralizes_control_characters() {
        assert_eq!(terminal("linha 1\nlinha 2\x1b[31m"), "linha 1 linha 2?[31m");
        assert!(matches!(terminal("Frota 12"), Cow::Borrowed(_)));
    }
}

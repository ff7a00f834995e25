use crate::session::{Message, Role};

/// Escapes the five HTML-significant characters.
///
/// Quotes are escaped too, so the result is safe inside attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders one message as a chat bubble.
pub fn render_message(message: &Message) -> String {
    let class = match message.role() {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    format!(
        r#"<div class="chat-bubble {class}">{}</div>"#,
        escape_html(message.content())
    )
}

/// Renders the transcript as escaped markup, one bubble per line.
pub fn render(messages: &[Message]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

use std::fmt::Write;

use super::html::{escape_html, render};
use crate::config::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::session::{Message, Settings};

/// Built-in styles, always embedded ahead of any external stylesheet.
const DEFAULT_STYLES: &str = include_str!("../../assets/styles.css");

const PAGE_TITLE: &str = "AI Chat Bot";

/// Everything the single page shows.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub messages: &'a [Message],
    pub models: &'a [String],
    pub settings: &'a Settings,
    /// Contents of the external stylesheet, if one was loaded.
    pub stylesheet: Option<&'a str>,
    /// Warnings shown above the transcript (missing stylesheet, empty prompt).
    pub warnings: &'a [String],
}

/// Renders the complete chat page.
///
/// Every interpolated value goes through [`escape_html`]; the external
/// stylesheet is the only raw text and is guarded against closing its tag.
pub fn render_page(view: &PageView<'_>) -> String {
    let mut page = String::with_capacity(8 * 1024);

    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>
{DEFAULT_STYLES}
</style>
"#
    );

    if let Some(css) = view.stylesheet {
        let _ = write!(page, "<style>\n{}\n</style>\n", css.replace("</", "<\\/"));
    }

    page.push_str("</head>\n<body>\n<div class=\"layout\">\n");
    render_sidebar(&mut page, view);
    page.push_str("<main>\n");
    page.push_str(
        r#"<div class="card title-row"><div class="logo">AI Chat Bot</div><div class="muted">Hope you have a good time</div></div>
"#,
    );

    for warning in view.warnings {
        let _ = writeln!(
            page,
            r#"<div class="banner" role="alert">{}</div>"#,
            escape_html(warning)
        );
    }

    let _ = write!(
        page,
        r#"<div class="columns">
<div class="card chat-box" id="transcript">
{}
</div>
<div class="card">
<h3>Quick actions</h3>
<p class="muted">Use Enter or the Send button to submit.</p>
<hr>
</div>
</div>
<form class="chat-form" id="chat-form" method="post" action="/chat">
<input type="text" name="prompt" aria-label="Ask the assistant..." placeholder="What's on your mind?" autocomplete="off" autofocus>
<button type="submit">Send</button>
</form>
<div class="busy" id="busy" hidden>Thinking...</div>
<div class="muted" style="margin-top:18px">Built for fun</div>
</main>
</div>
"#,
        render(view.messages)
    );

    page.push_str(SCRIPT);
    page.push_str("</body>\n</html>\n");
    page
}

fn render_sidebar(page: &mut String, view: &PageView<'_>) {
    page.push_str("<aside class=\"sidebar\">\n<h2>Settings</h2>\n");
    page.push_str("<label for=\"model\">Model</label>\n");
    page.push_str("<select id=\"model\" name=\"model\" form=\"chat-form\">\n");
    for model in view.models {
        let selected = if *model == view.settings.model {
            " selected"
        } else {
            ""
        };
        let escaped = escape_html(model);
        let _ = writeln!(
            page,
            r#"<option value="{escaped}"{selected}>{escaped}</option>"#
        );
    }
    page.push_str("</select>\n");

    let temperature = view.settings.temperature;
    let _ = write!(
        page,
        r#"<label for="temperature">Temperature <output id="temperature-value">{temperature:.1}</output></label>
<input type="range" id="temperature" name="temperature" form="chat-form" min="{MIN_TEMPERATURE:.1}" max="{MAX_TEMPERATURE:.1}" step="0.1" value="{temperature:.1}">
<form method="post" action="/clear"><button type="submit">Clear chat</button></form>
</aside>
"#
    );
}

const SCRIPT: &str = r"<script>
(function () {
  var transcript = document.getElementById('transcript');
  transcript.scrollTop = transcript.scrollHeight;
  var slider = document.getElementById('temperature');
  var output = document.getElementById('temperature-value');
  slider.addEventListener('input', function () {
    output.textContent = Number(slider.value).toFixed(1);
  });
  document.getElementById('chat-form').addEventListener('submit', function (event) {
    event.target.querySelector('button[type=submit]').disabled = true;
    document.getElementById('busy').hidden = false;
  });
})();
</script>
";

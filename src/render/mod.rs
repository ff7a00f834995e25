//! HTML rendering of the transcript and the chat page.

mod html;
mod page;

pub use html::{escape_html, render, render_message};
pub use page::{PageView, render_page};

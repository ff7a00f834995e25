//! The single-page web interface served by `chatbot serve`.

pub mod routes;
mod state;
mod stylesheet;

pub use routes::{ChatForm, build};
pub use state::{AppState, Interface, parse_temperature};
pub use stylesheet::Stylesheet;

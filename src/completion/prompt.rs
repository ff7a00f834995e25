/// System instruction sent ahead of every user prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Nucleus sampling is not exposed in the settings panel.
pub const TOP_P: f32 = 1.0;

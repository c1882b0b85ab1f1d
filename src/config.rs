use log::Level;

pub const ACCENT: &str = "#F08F23";

/// How long the "thank you" message stays up after a submission.
pub const ACK_DURATION_MS: u32 = 3_000;

pub const HEADER_IMAGE: &str = "HEAD.PNG";
pub const LOGO_IMAGE: &str = "LOGO.PNG";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Share of a section that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.25;

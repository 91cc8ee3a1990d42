//! Loading spinner.

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the spinner glyph for animation tick `ticks`.
pub fn frame(ticks: u64) -> &'static str {
    FRAMES[(ticks % FRAMES.len() as u64) as usize]
}

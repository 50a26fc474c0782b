use ratatui::style::{Color, Modifier, Style};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Fixed-width bar for a 0..=100 share.
pub fn share_bar(share: f64, width: usize) -> String {
    let ratio = if share.is_finite() { (share / 100.0).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

/// Parses `#rrggbb` language colors from the snapshot.
pub fn hex_color(value: Option<&str>) -> Option<Color> {
    let hex = value?.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub fn language_style(color: Option<&str>) -> Style {
    Style::default().fg(hex_color(color).unwrap_or(Color::Gray))
}

pub fn title_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn value_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

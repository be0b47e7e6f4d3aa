use std::fmt::Display;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::terminal::colors;
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "tourbook::print";

static KEY_WIDTH: AtomicUsize = AtomicUsize::new(12);
static QUIET: AtomicU8 = AtomicU8::new(0);

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn initialize(q_level: u8) {
    QUIET.store(q_level, Ordering::Relaxed);
}

/// Widest key expected in the next block of [`aligned_line`] calls.
pub fn set_key_width(width: usize) {
    KEY_WIDTH.store(width, Ordering::Relaxed);
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner() {
    if QUIET.load(Ordering::Relaxed) > 0 {
        return;
    }
    let text_content: String = format!("⟦ TOURBOOK v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str) {
    if QUIET.load(Ordering::Relaxed) > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let key_len: usize = console::measure_text_width(key);
    let dots: String = ".".repeat((KEY_WIDTH.load(Ordering::Relaxed) + 1).saturating_sub(key_len));
    let colon: String = format!("{}{}", dots.color(colors::SEPARATOR), ":".color(colors::SEPARATOR));
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref()));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!("{} {}", idx_str.color(colors::SEPARATOR), name.color(colors::PRIMARY)));
}

/// One level of `├─ key...: value` lines under a [`tree_head`].
pub fn as_tree_one_level(lines: Vec<(String, ColoredString)>) {
    let key_width: usize = lines
        .iter()
        .map(|(key, _)| console::measure_text_width(key))
        .max()
        .unwrap_or(0);
    for (i, (key, value)) in lines.iter().enumerate() {
        let last: bool = i + 1 == lines.len();
        let branch: ColoredString = if last { "└─".bright_black() } else { "├─".bright_black() };
        let dots: String = ".".repeat(key_width - console::measure_text_width(key) + 1);
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn end_of_program() {
    if QUIET.load(Ordering::Relaxed) > 0 {
        return;
    }
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

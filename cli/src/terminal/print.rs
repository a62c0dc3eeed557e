use colored::*;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

const BANNER_STARS: usize = 20;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// `******************** Title ********************`
pub fn banner(title: &str) {
    let stars: ColoredString = "*".repeat(BANNER_STARS).color(colors::SEPARATOR);
    print(&format!("{} {} {}", stars, title.color(colors::PRIMARY).bold(), stars));
}

pub fn key_value<V: AsRef<str>>(key: &str, sep: &str, value: V) {
    print(&format!(
        "{}{} {}",
        key.color(colors::TEXT_DEFAULT),
        sep.color(colors::SEPARATOR),
        value.as_ref()
    ));
}

//! format — отображение имён с форматными маркерами в терминале.
//!
//! Маркеры `&x` и `§x` переводятся в ANSI SGR. Неизвестные коды остаются как есть.

use crate::consts::{is_format_code, is_format_prefix};

const RESET: &str = "\x1b[0m";

fn sgr_for(code: char) -> Option<&'static str> {
    let s = match code {
        '0' => "\x1b[30m",
        '1' => "\x1b[34m",
        '2' => "\x1b[32m",
        '3' => "\x1b[36m",
        '4' => "\x1b[31m",
        '5' => "\x1b[35m",
        '6' => "\x1b[33m",
        '7' => "\x1b[37m",
        '8' => "\x1b[90m",
        '9' => "\x1b[94m",
        'a' => "\x1b[92m",
        'b' => "\x1b[96m",
        'c' => "\x1b[91m",
        'd' => "\x1b[95m",
        'e' => "\x1b[93m",
        'f' => "\x1b[97m",
        'k' => "\x1b[5m",
        'l' => "\x1b[1m",
        'm' => "\x1b[9m",
        'n' => "\x1b[4m",
        'o' => "\x1b[3m",
        'r' => RESET,
        _ => return None,
    };
    Some(s)
}

/// Render a display name to ANSI. Codes are matched case-insensitively,
/// as the host chat does.
pub fn to_ansi(display: &str) -> String {
    let mut out = String::with_capacity(display.len() + 16);
    let mut emitted = false;
    let mut chars = display.chars().peekable();
    while let Some(c) = chars.next() {
        if is_format_prefix(c) {
            if let Some(&next) = chars.peek() {
                let code = next.to_ascii_lowercase();
                if is_format_code(code) {
                    if let Some(sgr) = sgr_for(code) {
                        out.push_str(sgr);
                        emitted = true;
                        chars.next();
                        continue;
                    }
                }
            }
        }
        out.push(c);
    }
    if emitted {
        out.push_str(RESET);
    }
    out
}

/// One listing line: "<pos>. <name>".
pub fn list_line(position: usize, display: &str, ansi: bool) -> String {
    if ansi {
        format!("{}. {}", position, to_ansi(display))
    } else {
        format!("{}. {}", position, crate::normalize::strip_format_codes(display))
    }
}

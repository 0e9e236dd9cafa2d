//! normalize — преобразование «сырого» имени в ключ реестра.
//!
//! Ключ = lower-case, без форматных маркеров (`§x` / `&x`), без крайних пробелов.
//! Удаление маркеров повторяется до неподвижной точки: "&&cc" -> "&c" -> "",
//! поэтому normalize_key(normalize_key(s)) == normalize_key(s).

use crate::consts::{is_format_code, is_format_prefix, AMPERSAND_ESCAPES, AMPERSAND_MARKER};

/// Normalized lookup key for a raw snippet name. May be empty.
pub fn normalize_key(raw: &str) -> String {
    let mut cur = raw.to_lowercase();
    loop {
        let next = strip_markers_once(&cur);
        if next.len() == cur.len() {
            break;
        }
        cur = next;
    }
    cur.trim().to_string()
}

/// Strip format markers without changing case. Used for status lines.
pub fn strip_format_codes(text: &str) -> String {
    strip_markers_once(text).trim().to_string()
}

/// Replace escaped ampersand encodings with a literal '&'.
pub fn unescape_ampersands(s: &str) -> String {
    let mut out = s.to_string();
    for esc in AMPERSAND_ESCAPES {
        if out.contains(esc) {
            out = out.replace(esc, &AMPERSAND_MARKER.to_string());
        }
    }
    out
}

// Один проход слева направо: пара (префикс, код) выкидывается целиком.
fn strip_markers_once(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if is_format_prefix(c) {
            if let Some(&code) = chars.peek() {
                if is_format_code(code) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

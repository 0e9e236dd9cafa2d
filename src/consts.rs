//! Общие константы (файл сниппетов, ENV, алфавит форматных маркеров).

// -------- Snippet file --------
pub const APP_DIR_NAME: &str = "snipdb";
pub const FALLBACK_DIR_NAME: &str = ".snipdb";
pub const SNIPPET_FILE: &str = "snippets.json";
pub const TMP_SUFFIX: &str = ".tmp";
pub const LOCK_SUFFIX: &str = ".lock";

// -------- Document fields (wire names, keep stable) --------
pub const FIELD_ORDER: &str = "order";
pub const FIELD_ORIGINAL_NAMES: &str = "textOriginalNames";
pub const FIELD_TEXTS: &str = "texts";
pub const FIELD_CLOSE_CHAT: &str = "closeChatAfterSend";

// -------- Options --------
pub const DEFAULT_CLOSE_CHAT_AFTER_SEND: bool = true;

// -------- ENV --------
pub const ENV_CONFIG_DIR: &str = "SNIPDB_CONFIG_DIR";
pub const ENV_FILE: &str = "SNIPDB_FILE";
pub const ENV_FILE_LOCK: &str = "SNIPDB_FILE_LOCK";
pub const ENV_PRETTY: &str = "SNIPDB_PRETTY";

// -------- Format markers --------
// Маркер = префикс + один символ кода: "&c", "§l", ...
pub const SECTION_MARKER: char = '§';
pub const AMPERSAND_MARKER: char = '&';

// Экранированные формы '&', которые приходят из JSON/чата.
// Двойное экранирование проверяется первым.
pub const AMPERSAND_ESCAPES: [&str; 2] = ["\\\\u0026", "\\u0026"];

/// Код маркера: 0-9, a-f (цвета), k-o (стили), r (сброс).
#[inline]
pub fn is_format_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Префикс маркера ('§' или '&').
#[inline]
pub fn is_format_prefix(c: char) -> bool {
    c == SECTION_MARKER || c == AMPERSAND_MARKER
}

//! Разбор аргументов командного слоя: "<имя>/<тело>" и "имя или номер".

use crate::persist::Persistence;
use crate::store::SnippetStore;

/// Greedy words back into one string.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Split at the first '/'; both halves trimmed. No separator -> empty body.
pub fn split_name_body(data: &str) -> (String, String) {
    match data.split_once('/') {
        Some((name, body)) => (name.trim().to_string(), body.trim().to_string()),
        None => (data.trim().to_string(), String::new()),
    }
}

/// Like `split_name_body`, but the separator is mandatory.
pub fn split_required(data: &str) -> Option<(String, String)> {
    data.split_once('/')
        .map(|(a, b)| (a.trim().to_string(), b.trim().to_string()))
}

/// Last word is the position, the rest is the name.
pub fn split_trailing_position(words: &[String]) -> Option<(String, i64)> {
    let (last, head) = words.split_last()?;
    let pos = last.trim().parse::<i64>().ok()?;
    let name = join_words(head);
    if name.trim().is_empty() {
        return None;
    }
    Some((name, pos))
}

/// A list number that resolves to an entry becomes its key; anything else
/// is taken as a name.
pub fn resolve_target<P: Persistence>(store: &SnippetStore<P>, arg: &str) -> String {
    if let Ok(idx) = arg.trim().parse::<i64>() {
        if let Some(key) = store.name_at_position(idx) {
            return key.to_string();
        }
    }
    arg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn split_first_slash_only() {
        assert_eq!(
            split_name_body(" &d&lToxic / /hm sban 30d Toxic "),
            ("&d&lToxic".to_string(), "/hm sban 30d Toxic".to_string())
        );
        assert_eq!(split_name_body("Solo"), ("Solo".to_string(), String::new()));
        assert_eq!(split_required("x"), None);
        assert_eq!(split_required("x/"), Some(("x".to_string(), String::new())));
    }

    #[test]
    fn trailing_position_takes_the_last_word() {
        let w = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(
            split_trailing_position(&w(&["Big", "Ban", "-2"])),
            Some(("Big Ban".to_string(), -2))
        );
        assert_eq!(split_trailing_position(&w(&["Ban", "x"])), None);
        assert_eq!(split_trailing_position(&w(&["3"])), None);
    }

    #[test]
    fn numbers_resolve_when_in_range() {
        let mut s = SnippetStore::new(MemoryStore::new());
        s.add("Ban", "b").unwrap();
        s.add("42", "answer").unwrap();
        assert_eq!(resolve_target(&s, "1"), "ban");
        assert_eq!(resolve_target(&s, " 2 "), "42");
        // вне диапазона -> как имя
        assert_eq!(resolve_target(&s, "42"), "42");
        assert_eq!(resolve_target(&s, "Mute"), "Mute");
    }
}

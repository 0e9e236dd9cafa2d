//! Формат файла:
//! {
//!   "order": ["ban", "mute"],
//!   "textOriginalNames": {"ban": "&cBan", "mute": "Mute"},
//!   "texts": {"ban": "&cBanned for cheating", "mute": "/mute %s"},
//!   "closeChatAfterSend": true
//! }
//!
//! Decode is tolerant (legacy files without "order", hand-edited files):
//! - keys listed in "order" come first, if present in "texts";
//! - remaining "texts" keys follow in file order;
//! - null body -> "", null name -> key, numbers/bools stringified,
//!   arrays/objects skipped.

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::{
    DEFAULT_CLOSE_CHAT_AFTER_SEND, FIELD_CLOSE_CHAT, FIELD_ORDER, FIELD_ORIGINAL_NAMES,
    FIELD_TEXTS,
};

use super::Snapshot;

#[derive(Serialize)]
struct DocumentOut<'a> {
    order: Vec<&'a str>,
    #[serde(rename = "textOriginalNames")]
    text_original_names: &'a IndexMap<String, String>,
    texts: &'a IndexMap<String, String>,
    #[serde(rename = "closeChatAfterSend")]
    close_chat_after_send: bool,
}

pub fn encode_document(snapshot: &Snapshot, pretty: bool) -> Result<Vec<u8>> {
    let doc = DocumentOut {
        order: snapshot.order(),
        text_original_names: &snapshot.original_names,
        texts: &snapshot.texts,
        close_chat_after_send: snapshot
            .close_chat_after_send
            .unwrap_or(DEFAULT_CLOSE_CHAT_AFTER_SEND),
    };
    let data = if pretty {
        serde_json::to_vec_pretty(&doc)
    } else {
        serde_json::to_vec(&doc)
    };
    data.context("serialize snippet document")
}

pub fn decode_document(bytes: &[u8]) -> Result<Snapshot> {
    let parsed: Value = serde_json::from_slice(bytes).context("parse snippet document")?;
    let Value::Object(root) = parsed else {
        return Err(anyhow!("snippet document root is not an object"));
    };

    let empty = Map::new();
    let texts_obj = object_field(&root, FIELD_TEXTS).unwrap_or(&empty);
    let names_obj = object_field(&root, FIELD_ORIGINAL_NAMES).unwrap_or(&empty);

    let mut snap = Snapshot {
        close_chat_after_send: root.get(FIELD_CLOSE_CHAT).and_then(Value::as_bool),
        ..Snapshot::default()
    };

    // 1) явный порядок
    if let Some(Value::Array(order)) = root.get(FIELD_ORDER) {
        for key in order.iter().filter_map(Value::as_str) {
            if snap.texts.contains_key(key) {
                continue;
            }
            if let Some(body) = texts_obj.get(key) {
                take_entry(&mut snap, key, body, names_obj);
            }
        }
    }

    // 2) всё, чего нет в order (старый формат / ручная правка)
    for (key, body) in texts_obj {
        if snap.texts.contains_key(key) {
            continue;
        }
        take_entry(&mut snap, key, body, names_obj);
    }

    Ok(snap)
}

fn object_field<'a>(root: &'a Map<String, Value>, field: &str) -> Option<&'a Map<String, Value>> {
    match root.get(field) {
        Some(Value::Object(m)) => Some(m),
        Some(other) if !other.is_null() => {
            warn!("snippet document: field '{}' is not an object, ignored", field);
            None
        }
        _ => None,
    }
}

fn take_entry(snap: &mut Snapshot, key: &str, body: &Value, names: &Map<String, Value>) {
    let Some(body) = value_text(body, "") else {
        warn!("snippet document: skip '{}' with non-text body", key);
        return;
    };
    snap.texts.insert(key.to_string(), body);
    if let Some(name) = names.get(key).and_then(|v| value_text(v, key)) {
        snap.original_names.insert(key.to_string(), name);
    }
}

fn value_text(v: &Value, null_default: &str) -> Option<String> {
    match v {
        Value::Null => Some(null_default.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(v.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> Snapshot {
        decode_document(s.as_bytes()).expect("decode")
    }

    #[test]
    fn encode_field_order_is_stable() -> Result<()> {
        let mut snap = Snapshot::default();
        snap.texts.insert("b".into(), "B".into());
        snap.texts.insert("a".into(), "A".into());
        snap.original_names.insert("b".into(), "&cB".into());
        snap.original_names.insert("a".into(), "A".into());
        let text = String::from_utf8(encode_document(&snap, false)?)?;
        assert_eq!(
            text,
            r#"{"order":["b","a"],"textOriginalNames":{"b":"&cB","a":"A"},"texts":{"b":"B","a":"A"},"closeChatAfterSend":true}"#
        );
        Ok(())
    }

    #[test]
    fn order_first_then_leftovers() {
        let snap = decode(
            r#"{"order":["c","ghost","a"],"texts":{"a":"1","b":"2","c":"3"},"textOriginalNames":{"c":"&cC"}}"#,
        );
        assert_eq!(snap.order(), vec!["c", "a", "b"]);
        assert_eq!(snap.original_names.get("c").map(String::as_str), Some("&cC"));
        assert!(snap.original_names.get("a").is_none());
        assert_eq!(snap.close_chat_after_send, None);
    }

    #[test]
    fn legacy_without_order_uses_texts_order() {
        let snap = decode(r#"{"texts":{"zulu":"z","alpha":"a","mike":"m"},"closeChatAfterSend":false}"#);
        assert_eq!(snap.order(), vec!["zulu", "alpha", "mike"]);
        assert_eq!(snap.close_chat_after_send, Some(false));
    }

    #[test]
    fn odd_values_are_tolerated() {
        let snap = decode(
            r#"{"order":[1,null,"n"],"texts":{"n":null,"num":42,"arr":[1],"t":true},"textOriginalNames":{"n":null},"closeChatAfterSend":"yes"}"#,
        );
        assert_eq!(snap.order(), vec!["n", "num", "t"]);
        assert_eq!(snap.texts["n"], "");
        assert_eq!(snap.texts["num"], "42");
        assert_eq!(snap.texts["t"], "true");
        assert_eq!(snap.original_names["n"], "n");
        assert_eq!(snap.close_chat_after_send, None);
    }

    #[test]
    fn wrong_shapes() {
        assert!(decode_document(b"[1,2]").is_err());
        assert!(decode_document(b"{not json").is_err());
        let snap = decode(r#"{"texts":"oops"}"#);
        assert!(snap.is_empty());
    }
}

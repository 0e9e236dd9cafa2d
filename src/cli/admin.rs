//! Опции, перезагрузка, статус.

use anyhow::Result;
use serde_json::json;

use crate::persist::Persistence;
use crate::store::{LoadOutcome, SnippetStore};

/// `Some(v)` sets, `None` toggles.
pub fn cmd_auto_close<P: Persistence>(store: &mut SnippetStore<P>, state: Option<bool>) -> Result<()> {
    let now = match state {
        Some(v) => {
            store.set_close_chat_after_send(v);
            v
        }
        None => store.toggle_close_chat_after_send(),
    };
    if now {
        println!("Chat will close after sending");
    } else {
        println!("Chat stays open after sending");
    }
    Ok(())
}

pub fn cmd_reload<P: Persistence>(store: &mut SnippetStore<P>) -> Result<()> {
    match store.reload() {
        LoadOutcome::Loaded(n) => println!("Config reloaded: {} snippet(s)", n),
        LoadOutcome::Missing => println!(
            "Nothing to reload: {} does not exist",
            store.persistence().describe()
        ),
        LoadOutcome::Failed => println!(
            "Reload failed, keeping current snippets ({})",
            store.persistence().describe()
        ),
    }
    Ok(())
}

pub fn cmd_status<P: Persistence>(store: &SnippetStore<P>, json: bool) -> Result<()> {
    let location = store.persistence().describe();
    if json {
        let v = json!({
            "file": location,
            "snippets": store.len(),
            "closeChatAfterSend": store.close_chat_after_send(),
        });
        println!("{}", v);
        return Ok(());
    }
    println!("snipdb {}", location);
    println!("  snippets             = {}", store.len());
    println!("  close_chat_after_send = {}", store.close_chat_after_send());
    Ok(())
}

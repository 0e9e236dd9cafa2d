//! Обработчики add/list/get/send/rename/edit/remove.

use anyhow::{bail, Result};
use log::debug;

use crate::dispatch::ChatSink;
use crate::error::RegistryError;
use crate::format::list_line;
use crate::normalize::{normalize_key, strip_format_codes};
use crate::persist::Persistence;
use crate::store::SnippetStore;

use super::args::{resolve_target, split_name_body, split_required};

/// Терминальный "чат": команды и сообщения печатаются в stdout.
pub struct StdoutSink;

impl ChatSink for StdoutSink {
    fn submit_command(&mut self, command: &str) -> Result<()> {
        println!("{}", command);
        Ok(())
    }

    fn send_message(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn close_chat(&mut self) -> Result<()> {
        debug!("close chat requested");
        Ok(())
    }
}

pub fn cmd_add<P: Persistence>(store: &mut SnippetStore<P>, data: &str) -> Result<()> {
    let (name, body) = split_name_body(data);
    if name.is_empty() {
        bail!("invalid format, use: snipdb add <name>/<body>");
    }
    let key = store.add(&name, &body)?;
    println!(
        "Added: {} (#{}, key='{}')",
        strip_format_codes(&name),
        store.len(),
        key
    );
    Ok(())
}

pub fn cmd_list<P: Persistence>(store: &SnippetStore<P>, json: bool, plain: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = store.iter().collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if store.is_empty() {
        println!("No snippets saved");
        return Ok(());
    }
    println!("Snippets:");
    for row in store.iter() {
        println!("{}", list_line(row.position, row.display_name, !plain));
    }
    Ok(())
}

pub fn cmd_get<P: Persistence>(store: &SnippetStore<P>, target: &str) -> Result<()> {
    let name = resolve_target(store, target);
    match store.get(&name) {
        Some(body) => {
            println!("{}", body);
            Ok(())
        }
        None => Err(RegistryError::NotFound(normalize_key(&name)).into()),
    }
}

pub fn cmd_send<P: Persistence>(store: &SnippetStore<P>, target: &str) -> Result<()> {
    let name = resolve_target(store, target);
    let plan = store.send(&name, &mut StdoutSink)?;
    debug!(
        "sent '{}' as {}, close_chat={}",
        name,
        if plan.is_command() { "command" } else { "message" },
        plan.close_chat
    );
    Ok(())
}

pub fn cmd_rename<P: Persistence>(store: &mut SnippetStore<P>, args: &str) -> Result<()> {
    let Some((old, new)) = split_required(args) else {
        bail!("usage: snipdb rename <old name|#>/<new name>");
    };
    let old = resolve_target(store, &old);
    store.rename(&old, &new)?;
    println!(
        "Renamed: {} -> {}",
        strip_format_codes(&old),
        strip_format_codes(&new)
    );
    Ok(())
}

pub fn cmd_edit<P: Persistence>(store: &mut SnippetStore<P>, args: &str) -> Result<()> {
    let Some((name, body)) = split_required(args) else {
        bail!("usage: snipdb edit <name|#>/<new body>");
    };
    let name = resolve_target(store, &name);
    store.update_body(&name, &body)?;
    println!("Updated body of: {}", strip_format_codes(&name));
    Ok(())
}

pub fn cmd_remove<P: Persistence>(store: &mut SnippetStore<P>, target: &str) -> Result<()> {
    let name = resolve_target(store, target);
    let key = store.remove(&name)?;
    println!("Removed: {}", key);
    Ok(())
}

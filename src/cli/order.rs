use anyhow::{anyhow, Result};

use crate::cli::args::split_trailing_position;
use crate::normalize::strip_format_codes;
use crate::persist::Persistence;
use crate::store::SnippetStore;

pub fn cmd_move<P: Persistence>(store: &mut SnippetStore<P>, words: &[String]) -> Result<()> {
    let (name, pos) = split_trailing_position(words)
        .ok_or_else(|| anyhow!("usage: move <name> <position>"))?;
    let m = store.move_to(&name, pos)?;
    println!(
        "Moved: {} #{} -> #{}",
        strip_format_codes(&name),
        m.from,
        m.to
    );
    Ok(())
}

pub fn cmd_move_index<P: Persistence>(store: &mut SnippetStore<P>, from: i64, to: i64) -> Result<()> {
    let m = store.move_by_index(from, to)?;
    let key = store.name_at_position(m.to as i64).unwrap_or_default();
    println!("Moved: {} #{} -> #{}", key, m.from, m.to);
    Ok(())
}

use anyhow::Result;
use clap::Parser;

use snipdb::cli::{exec, Cli};
use snipdb::{MemoryStore, RegistryError, SnippetStore};

fn run(store: &mut SnippetStore<MemoryStore>, argv: &[&str]) -> Result<()> {
    let mut full = vec!["snipdb"];
    full.extend_from_slice(argv);
    let cli = Cli::try_parse_from(full)?;
    exec(store, cli.cmd)
}

fn keys(s: &SnippetStore<MemoryStore>) -> Vec<String> {
    s.iter().map(|l| l.key.to_string()).collect()
}

#[test]
fn add_splits_name_and_body() -> Result<()> {
    let mut s = SnippetStore::open(MemoryStore::new());
    run(&mut s, &["add", "Ban/&cBanned", "for", "cheating"])?;
    run(&mut s, &["add", "&d&lToxic", "/", "/hm", "sban", "30d"])?;
    assert_eq!(keys(&s), vec!["ban", "toxic"]);
    assert_eq!(s.get("ban"), Some("&cBanned for cheating"));
    assert_eq!(s.get("toxic"), Some("/hm sban 30d"));
    assert_eq!(s.display_name("toxic"), Some("&d&lToxic"));

    let err = run(&mut s, &["add", "BAN/again"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RegistryError>(),
        Some(&RegistryError::Duplicate("ban".into()))
    );
    assert!(run(&mut s, &["add", "/body only"]).is_err());
    Ok(())
}

#[test]
fn targets_accept_list_numbers() -> Result<()> {
    let mut s = SnippetStore::open(MemoryStore::new());
    for n in ["a/1", "b/2", "c/3"] {
        run(&mut s, &["add", n])?;
    }
    run(&mut s, &["rename", "2/Bee"])?;
    run(&mut s, &["edit", "3/three"])?;
    assert_eq!(keys(&s), vec!["a", "bee", "c"]);
    assert_eq!(s.get("c"), Some("three"));

    run(&mut s, &["delete", "1"])?;
    assert_eq!(keys(&s), vec!["bee", "c"]);
    run(&mut s, &["get", "2"])?;
    run(&mut s, &["send", "bee"])?;
    assert!(run(&mut s, &["rename", "no-separator"]).is_err());
    Ok(())
}

#[test]
fn move_commands() -> Result<()> {
    let mut s = SnippetStore::open(MemoryStore::new());
    for n in ["a/", "b/", "c/"] {
        run(&mut s, &["add", n])?;
    }
    run(&mut s, &["move-index", "3", "1"])?;
    assert_eq!(keys(&s), vec!["c", "a", "b"]);
    run(&mut s, &["move", "c", "99"])?;
    assert_eq!(keys(&s), vec!["a", "b", "c"]);
    run(&mut s, &["move", "b", "-2"])?;
    assert_eq!(keys(&s), vec!["b", "a", "c"]);

    run(&mut s, &["add", "Big Ban/x"])?;
    run(&mut s, &["move", "Big", "Ban", "1"])?;
    assert_eq!(keys(&s), vec!["big ban", "b", "a", "c"]);
    assert!(run(&mut s, &["move", "a", "top"]).is_err());

    let err = run(&mut s, &["move-index", "7", "1"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RegistryError>(),
        Some(&RegistryError::InvalidIndex(7))
    );
    Ok(())
}

#[test]
fn options_list_status_reload() -> Result<()> {
    let mut s = SnippetStore::open(MemoryStore::new());
    run(&mut s, &["add", "&cBan/x"])?;
    run(&mut s, &["auto-close", "off"])?;
    assert!(!s.close_chat_after_send());
    run(&mut s, &["auto-close"])?;
    assert!(s.close_chat_after_send());

    run(&mut s, &["list"])?;
    run(&mut s, &["texts", "--json"])?;
    run(&mut s, &["list", "--plain"])?;
    run(&mut s, &["status", "--json"])?;

    s.persistence()
        .set_document(r#"{"texts":{"x":"1","y":"2"}}"#);
    run(&mut s, &["reload"])?;
    assert_eq!(keys(&s), vec!["x", "y"]);
    // опция не задана в файле -> остаётся прежней
    assert!(s.close_chat_after_send());
    Ok(())
}

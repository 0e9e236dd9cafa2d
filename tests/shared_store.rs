use std::thread;

use anyhow::Result;

use snipdb::{MemoryStore, SharedStore, SnippetStore};

#[test]
fn concurrent_adds_keep_keys_unique() -> Result<()> {
    let shared = SharedStore::new(SnippetStore::open(MemoryStore::new()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let s = shared.clone();
            thread::spawn(move || {
                let mut ok = 0usize;
                for i in 0..50 {
                    // половина имён общая для всех потоков -> коллизии
                    let name = if i % 2 == 0 {
                        format!("Common{i}")
                    } else {
                        format!("t{t}-{i}")
                    };
                    if s.add(&name, "x").is_ok() {
                        ok += 1;
                    }
                }
                ok
            })
        })
        .collect();

    let mut total = 0usize;
    for h in handles {
        total += h.join().expect("thread");
    }

    // 25 общих + 8 * 25 уникальных
    assert_eq!(total, 25 + 8 * 25);
    assert_eq!(shared.len(), total);
    let snap = shared.snapshot();
    assert_eq!(snap.len(), total);
    assert_eq!(
        shared.with(|s| s.persistence().saves()),
        total as u64
    );
    Ok(())
}

#[test]
fn with_runs_compound_ops_atomically() -> Result<()> {
    let shared = SharedStore::new(SnippetStore::open(MemoryStore::new()));
    shared.add("a", "1")?;
    shared.add("b", "2")?;
    shared.with(|s| -> Result<()> {
        s.rename("a", "z")?;
        s.move_to("z", 2)?;
        Ok(())
    })?;
    let order: Vec<String> = shared.snapshot().order().iter().map(|k| k.to_string()).collect();
    assert_eq!(order, vec!["b", "z"]);
    assert_eq!(shared.get("Z").as_deref(), Some("1"));
    assert!(shared.remove("b").is_ok());
    assert!(!shared.is_empty());
    Ok(())
}

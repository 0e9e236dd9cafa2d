use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::SnipConfig;
use crate::persist::Persistence;
use crate::store::SnippetStore;

pub mod admin;
pub mod args;
pub mod order;
pub mod snippets;

#[derive(Parser, Debug)]
#[command(
    name = "snipdb",
    version,
    about = "Ordered text-snippet store (name -> message)",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Config directory (overrides SNIPDB_CONFIG_DIR)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Add a snippet: <name>/<body>
    ///
    /// Примеры:
    ///   snipdb add 'Check/&c&lThis is a cheat check!'
    ///   snipdb add '&d&lToxic / /hm sban 30d Toxic'
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        data: Vec<String>,
    },
    /// Show all snippets in saved order
    #[command(visible_alias = "texts")]
    List {
        /// JSON output (array of {position,key,name,body})
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Strip format codes instead of rendering ANSI colors
        #[arg(long, default_value_t = false)]
        plain: bool,
    },
    /// Print a snippet body (name or list number)
    Get {
        #[arg(required = true, num_args = 1..)]
        target: Vec<String>,
    },
    /// Send a snippet: commands go through the command path, text as a message
    Send {
        #[arg(required = true, num_args = 1..)]
        target: Vec<String>,
    },
    /// Rename: <name|#>/<new name> (list position is kept)
    Rename {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Replace a body: <name|#>/<new body>
    Edit {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove a snippet (name or list number)
    #[command(visible_alias = "delete")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        target: Vec<String>,
    },
    /// Move a snippet to a position (clamped to the list): <name...> <pos>
    Move {
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Move by list numbers: <from> <to>
    MoveIndex {
        #[arg(allow_negative_numbers = true)]
        from: i64,
        #[arg(allow_negative_numbers = true)]
        to: i64,
    },
    /// Close chat after sending plain text (commands always close). Toggles when omitted.
    AutoClose {
        #[arg(value_enum)]
        state: Option<Switch>,
    },
    /// Reload the snippet file (after external edits)
    Reload,
    /// Print file location, count and options
    Status {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = SnipConfig::from_env();
    if let Some(dir) = cli.config_dir {
        cfg = cfg.with_config_dir(Some(dir));
    }
    let mut store = SnippetStore::open_with_config(&cfg);
    exec(&mut store, cli.cmd)
}

pub fn exec<P: Persistence>(store: &mut SnippetStore<P>, cmd: Cmd) -> Result<()> {
    match cmd {
        Cmd::Add { data } => snippets::cmd_add(store, &args::join_words(&data)),
        Cmd::List { json, plain } => snippets::cmd_list(store, json, plain),
        Cmd::Get { target } => snippets::cmd_get(store, &args::join_words(&target)),
        Cmd::Send { target } => snippets::cmd_send(store, &args::join_words(&target)),
        Cmd::Rename { args: a } => snippets::cmd_rename(store, &args::join_words(&a)),
        Cmd::Edit { args: a } => snippets::cmd_edit(store, &args::join_words(&a)),
        Cmd::Remove { target } => snippets::cmd_remove(store, &args::join_words(&target)),
        Cmd::Move { args: a } => order::cmd_move(store, &a),
        Cmd::MoveIndex { from, to } => order::cmd_move_index(store, from, to),
        Cmd::AutoClose { state } => admin::cmd_auto_close(store, state.map(|s| s == Switch::On)),
        Cmd::Reload => admin::cmd_reload(store),
        Cmd::Status { json } => admin::cmd_status(store, json),
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Cli as Parser>::parse()
    }
}

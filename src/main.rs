use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use memshell::history::DEFAULT_MAX_HISTORY;
use memshell::store::{JsonFileStore, SnapshotStore};
use memshell::terminal::{Terminal, TerminalOptions};

#[derive(Parser)]
#[command(name = "memshell")]
#[command(about = "An in-memory filesystem with a shell-style command layer")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Persist the session to a JSON file at this path
    #[arg(long = "state")]
    state: Option<PathBuf>,

    /// With -c, print the result as JSON (stdout, stderr, exit_code)
    #[arg(long)]
    json: bool,

    /// Maximum number of history entries to keep
    #[arg(long = "max-history", default_value_t = DEFAULT_MAX_HISTORY)]
    max_history: usize,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let store: Option<Arc<dyn SnapshotStore>> = cli
        .state
        .map(|path| Arc::new(JsonFileStore::new(path)) as Arc<dyn SnapshotStore>);

    let terminal = Terminal::new(TerminalOptions {
        max_history: cli.max_history,
        store,
    })
    .await;

    if let Some(line) = cli.command {
        let result = terminal.execute(&line).await;
        if cli.json {
            let out = serde_json::json!({
                "stdout": result.stdout,
                "stderr": result.stderr,
                "exit_code": result.exit_code,
            });
            println!("{out}");
        } else {
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
        }
        std::process::exit(result.exit_code);
    }

    println!("memshell v{} - type 'help' for commands, 'exit' to quit", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    loop {
        print!("{}> ", terminal.current_path().await);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line == "exit" {
            break;
        }

        let result = terminal.execute(line).await;
        print!("{}", result.stdout);
        eprint!("{}", result.stderr);
    }
}

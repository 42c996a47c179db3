// src/commands/help_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

const HELP_TEXT: &str = "\
Available commands:
  help                 Show this help
  clear                Clear the screen
  pwd                  Print the current directory
  ls [path]            List directory contents
  cd [path]            Change the current directory
  mkdir <dir>...       Create directories
  rm [-r] <path>...    Remove files (with -r, directories too)
  rmdir <dir>...       Remove empty directories
  tree                 Show the whole tree as ASCII art
  touch <file>...      Create empty files
  cat <file>...        Print file contents
  echo <text> [> f]    Print text, or write it to a file
  grep <pattern>       Find the file whose content is closest to a pattern
  history [-c]         Show command history (-c to clear)
  date                 Print the current date and time
  version              Print the version
  reset                Restore the default filesystem
  exit                 Leave the shell

Commands can be chained with &&; the chain stops at the first failure.
";

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show this help"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(HELP_TEXT.to_string())
    }
}

// src/commands/date/mod.rs
use async_trait::async_trait;
use chrono::Local;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct DateCommand;

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn description(&self) -> &'static str {
        "Print the current date and time"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(format!("{}\n", Local::now().to_rfc2822()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;

    #[tokio::test]
    async fn test_date_outputs_something() {
        let ctx = make_ctx(vec![]);
        let result = DateCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.ends_with('\n'));
        assert!(result.stdout.len() > 10);
    }
}

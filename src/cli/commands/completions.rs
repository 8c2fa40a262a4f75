//! Shell completions generation.
//!
//! The `doclint completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "doclint", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn render(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(shell, &mut cmd, "doclint", &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_defines_the_completion_function() {
        let script = render(Shell::Bash);
        assert!(script.contains("_doclint"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn zsh_script_carries_the_compdef_header() {
        let script = render(Shell::Zsh);
        assert!(script.starts_with("#compdef doclint"));
    }

    #[test]
    fn scripts_offer_both_linter_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let script = render(shell);
            assert!(script.contains("content"), "{shell} is missing content");
            assert!(script.contains("seo"), "{shell} is missing seo");
        }
    }
}

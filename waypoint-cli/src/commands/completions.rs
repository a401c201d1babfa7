//! Shell completions command - Generate shell completion scripts
//!
//! - bash: Add to ~/.bashrc or ~/.bash_completion
//! - zsh: Add to ~/.zshrc or put in fpath
//! - fish: Add to ~/.config/fish/completions/
//! - powershell: Add to $PROFILE
//! - elvish: Add to ~/.elvish/rc.elv

use std::io::{self, Write};

use clap::Command;
use clap_complete::{generate, shells};
use colored::Colorize;
use serde::Serialize;

use crate::output::{Output, OutputConfig, OutputFormat, Outputter};

const BIN_NAME: &str = "waypoint";

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Instructions for installing completions
#[derive(Debug, Serialize)]
pub struct CompletionInstructions {
    pub shell: String,
    pub instructions: Vec<String>,
}

impl Outputter for CompletionInstructions {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = format!(
            "{} completions for {}\n\n{}\n",
            "Waypoint".cyan().bold(),
            self.shell.yellow(),
            "Installation:".cyan().bold()
        );
        for instruction in &self.instructions {
            output.push_str(&format!("  {}\n", instruction));
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let mut lines = vec!["shell,instruction".to_string()];
        lines.extend(
            self.instructions
                .iter()
                .filter(|i| !i.is_empty())
                .map(|i| format!("{},\"{}\"", self.shell, i.replace('"', "\"\""))),
        );
        lines.join("\n")
    }
}

/// Get installation instructions for a shell
fn get_instructions(shell: Shell) -> Vec<String> {
    let lines: &[&str] = match shell {
        Shell::Bash => &[
            "# Add to ~/.bashrc:",
            "eval \"$(waypoint completions bash)\"",
            "",
            "# Or save to a file:",
            "waypoint completions bash > ~/.local/share/bash-completion/completions/waypoint",
        ],
        Shell::Zsh => &[
            "# Add to ~/.zshrc:",
            "eval \"$(waypoint completions zsh)\"",
            "",
            "# Or save to a file in fpath:",
            "waypoint completions zsh > ~/.zfunc/_waypoint",
        ],
        Shell::Fish => &[
            "# Save to fish completions directory:",
            "waypoint completions fish > ~/.config/fish/completions/waypoint.fish",
        ],
        Shell::PowerShell => &[
            "# Add to $PROFILE:",
            "Invoke-Expression (& waypoint completions powershell | Out-String)",
        ],
        Shell::Elvish => &[
            "# Add to ~/.elvish/rc.elv:",
            "eval (waypoint completions elvish | slurp)",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

/// Write a completion script for `cmd` to `out`
pub fn write_completions<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) {
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, BIN_NAME, out),
        Shell::Zsh => generate(shells::Zsh, cmd, BIN_NAME, out),
        Shell::Fish => generate(shells::Fish, cmd, BIN_NAME, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, BIN_NAME, out),
        Shell::Elvish => generate(shells::Elvish, cmd, BIN_NAME, out),
    }
}

/// Run the completions command
///
/// Prints the completion script, or installation instructions when
/// `show_instructions` is set.
pub fn run(
    shell: Shell,
    cmd: &mut Command,
    show_instructions: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if show_instructions {
        let instructions = CompletionInstructions {
            shell: shell.to_string(),
            instructions: get_instructions(shell),
        };
        return Output::new(instructions, format).render();
    }

    write_completions(shell, cmd, &mut io::stdout());
    Ok(())
}

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

#[derive(Args)]
pub struct Completions {
    /// The shell to generate completions for
    #[arg(value_enum, long)]
    pub shell: Shell,
}

impl Completions {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut cmd = crate::Cli::command();
        let bin_name = cmd.get_name().to_string();

        if self.shell == Shell::Zsh {
            // Guard the bare compdef call so the script can be sourced before compinit.
            let mut buf = Vec::new();
            generate(self.shell, &mut cmd, bin_name.clone(), &mut buf);
            let script = String::from_utf8(buf)?;

            let bare = format!("compdef _{0} {0}", bin_name);
            let guarded = format!("(( $+functions[compdef] )) && compdef _{0} {0}", bin_name);
            io::stdout().write_all(script.replace(&bare, &guarded).as_bytes())?;
        } else {
            generate(self.shell, &mut cmd, bin_name, &mut io::stdout());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completions_mention_subcommands() {
        let mut cmd = crate::Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut cmd, "jobscope", &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("matrix"));
        assert!(script.contains("profile"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        crate::Cli::command().debug_assert();
    }
}

use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    docs-authoring completions bash > ~/.bash_completion.d/docs-authoring\n\n\
                  Generate zsh completions:\n    docs-authoring completions zsh > ~/.zfunc/_docs-authoring\n\n\
                  Generate fish completions:\n    docs-authoring completions fish > ~/.config/fish/completions/docs-authoring.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}

//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// relprep - release preparation pipeline
///
/// Assemble, convert, and gate a package's long description before upload.
#[derive(Parser, Debug)]
#[command(
    name = "relprep",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Release preparation for a package's long description",
    long_about = "Relprep assembles a package's long-form description from its readme, \
                  history, and license documents, converts it to the publication format, \
                  and gates the upload on the converted file being committed and the \
                  release being explicitly confirmed. Without a subcommand it packages \
                  the distribution using the committed description.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  relprep prep\n    \
                  relprep publish\n    \
                  relprep show --fresh\n    \
                  relprep\n\n\
                  \x1b[1m\x1b[32mConfiguration:\x1b[0m\n    \
                  relprep.yaml at the workspace root overrides source paths and commands"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Run mode; packaging is the default when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the description file from the source documents
    Prep,

    /// Upload the package once the description is committed and confirmed
    Publish,

    /// Package the distribution using the committed description (default)
    Package,

    /// Print the long-form description
    Show(ShowArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the committed description:\n    relprep show\n\n\
                  Preview a freshly assembled description:\n    relprep show --fresh")]
pub struct ShowArgs {
    /// Assemble a fresh description instead of reading the committed file
    #[arg(long)]
    pub fresh: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    relprep completions --shell bash > ~/.bash_completion.d/relprep\n\n\
                  Generate zsh completions:\n    relprep completions --shell zsh > ~/.zfunc/_relprep")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_prep() {
        let cli = Cli::try_parse_from(["relprep", "prep"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Prep)));
    }

    #[test]
    fn test_cli_parsing_publish() {
        let cli = Cli::try_parse_from(["relprep", "publish"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Publish)));
    }

    #[test]
    fn test_cli_parsing_package() {
        let cli = Cli::try_parse_from(["relprep", "package"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Package)));
    }

    #[test]
    fn test_cli_no_subcommand_defaults_to_packaging() {
        let cli = Cli::try_parse_from(["relprep"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        // A mistyped mode is a usage error, not a silent fall-through to
        // packaging.
        let result = Cli::try_parse_from(["relprep", "pubish"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["relprep", "show"]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => assert!(!args.fresh),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_show_fresh() {
        let cli = Cli::try_parse_from(["relprep", "show", "--fresh"]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => assert!(args.fresh),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["relprep", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["relprep", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, "bash"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_workspace_option() {
        let cli = Cli::try_parse_from(["relprep", "-w", "/tmp/pkg", "prep"]).unwrap();
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/pkg")));
    }
}

//! Clap derive structures for the `kataboard` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// kataboard -- Codewars leaderboards for a hand-picked list of users
#[derive(Debug, Parser)]
#[command(
    name = "kataboard",
    version,
    about = "Rank Codewars users side by side",
    long_about = "Fetch public Codewars profiles for a list of usernames and rank them\n\
        by overall score or by any language they have a rank in.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Profile endpoint; usernames are appended to it (overrides config)
    #[arg(long, env = "KATABOARD_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format (overrides config)
    #[arg(long, short = 'o', env = "KATABOARD_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output (overrides config)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "KATABOARD_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch users and print their leaderboard
    #[command(alias = "r")]
    Rank(RankArgs),

    /// Fetch users and list the categories they can be ranked by
    #[command(alias = "langs")]
    Languages(UsersArgs),

    /// Show one user's public profile
    #[command(alias = "u")]
    User(UserArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsersArgs {
    /// Usernames, separated by commas and/or given as separate arguments
    #[arg(required = true, num_args = 1..)]
    pub users: Vec<String>,
}

impl UsersArgs {
    /// Join all positional arguments into one comma-separated string.
    pub fn raw(&self) -> String {
        self.users.join(",")
    }
}

#[derive(Debug, Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub users: UsersArgs,

    /// Rank by this language instead of the overall score
    #[arg(long, short = 'L', value_name = "LANGUAGE")]
    pub language: Option<String>,
}

#[derive(Debug, Args)]
pub struct UserArgs {
    /// Username to look up
    pub username: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_users_are_joined() {
        let cli = Cli::try_parse_from(["kataboard", "rank", "a,b", "c", "-L", "go"]).unwrap();
        let Command::Rank(args) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.users.raw(), "a,b,c");
        assert_eq!(args.language.as_deref(), Some("go"));
    }

    #[test]
    fn output_flag_is_global() {
        let cli = Cli::try_parse_from(["kataboard", "user", "g964", "-o", "json"]).unwrap();
        assert_eq!(cli.global.output, Some(OutputFormat::Json));
    }
}

pub mod apply;
pub mod tours;
pub mod weather;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tourbook")]
#[command(about = "Tours, weather and applications for a China travel agency.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides TOURBOOK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Less output; repeat for errors only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output; repeat for trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tours and the excursions offered with each
    #[command(alias = "t")]
    Tours,
    /// Current weather in the destination cities
    #[command(alias = "w")]
    Weather,
    /// Fill in and submit a tour application
    #[command(alias = "a")]
    Apply(ApplyArgs),
}

#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Tour id or exact tour name
    #[arg(long)]
    pub tour: Option<String>,

    /// Excursion id; repeat for several
    #[arg(long = "excursion")]
    pub excursions: Vec<String>,

    /// Tourist as "Last First"; repeat for several
    #[arg(long = "tourist", value_name = "LAST FIRST")]
    pub tourists: Vec<String>,

    /// Validate and show the mail payload without sending anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> i8 {
        self.verbose.min(8) as i8 - self.quiet.min(8) as i8
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_collects_repeated_flags() {
        let cli: CommandLine = CommandLine::try_parse_from([
            "tourbook",
            "apply",
            "--tour",
            "1",
            "--excursion",
            "wall",
            "--excursion",
            "army",
            "--tourist",
            "Петров Иван",
            "--dry-run",
            "-qq",
        ])
        .unwrap();

        assert_eq!(cli.verbosity(), -2);
        let Commands::Apply(args) = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.excursions, vec!["wall", "army"]);
        assert_eq!(args.tourists, vec!["Петров Иван"]);
        assert!(args.dry_run);
        assert_eq!(args.email, "");
    }
}

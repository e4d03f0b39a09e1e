//! Configuration settings for tvb
//!
//! Defines the CLI arguments, subcommands and the runtime settings derived
//! from them. The `-profile` flag is not declared here: it uses a single
//! dash and is stripped from the argument list before clap sees it.

use crate::profile::{
    take_profile, FrameworkProbe, SettingsFileProbe, StaticProbe, FRAMEWORK_SETTINGS_ENV,
    SUBPARAM_PROFILE,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tvb - profile selection and package metadata for TheVirtualBrain
#[derive(Parser, Debug, Clone)]
#[command(name = "tvb")]
#[command(author = "Stuart Knock, Marmaduke Woodman, Paula Sanz Leon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Profile selection and package metadata for TheVirtualBrain")]
#[command(long_about = r#"
Selects the execution profile for TheVirtualBrain and manages the package's
install-time metadata.

The profile is passed as `-profile <NAME>` anywhere on the command line.
Known profiles: LIBRARY_PROFILE, DEVELOPMENT_PROFILE, TEST_POSTGRES_PROFILE,
TEST_SQLITE_PROFILE, DEPLOYMENT_PROFILE, CONSOLE_PROFILE.

Examples:
  tvb -profile LIBRARY_PROFILE            # Show the selected profile
  tvb profiles                            # List known profiles
  tvb package --format json               # Package metadata as JSON
  tvb install ./build                     # Generate and clean up metadata
"#)]
pub struct CliArgs {
    /// Framework settings file; the framework counts as installed when it exists
    #[arg(long, env = FRAMEWORK_SETTINGS_ENV, value_name = "PATH")]
    pub framework_settings: Option<PathBuf>,

    /// Treat the framework as absent regardless of settings
    #[arg(long)]
    pub no_framework: bool,

    /// Output format for reports
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the selected profile and whether library mode is active
    #[command(name = "profile")]
    Profile,

    /// List the known profiles
    #[command(name = "profiles")]
    Profiles,

    /// Show package metadata
    #[command(name = "package")]
    Package,

    /// Write or remove the generated metadata directory
    #[command(name = "metadata")]
    Metadata {
        /// Action to run
        #[command(subcommand)]
        action: MetadataAction,
    },

    /// Generate the metadata directory under ROOT, then clean it up
    #[command(name = "install")]
    Install {
        /// Install root
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

/// Metadata directory actions
#[derive(Subcommand, Debug, Clone)]
pub enum MetadataAction {
    /// Render the metadata files under ROOT
    Write {
        /// Target root
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Remove the metadata directory under ROOT, if any
    Clean {
        /// Target root
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// How framework availability is decided
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrameworkSource {
    /// Look for the settings file at this path
    SettingsFile(PathBuf),
    /// Forced absent
    Absent,
    /// Nothing configured
    #[default]
    Unconfigured,
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Framework availability source
    pub framework: FrameworkSource,
    /// Report format
    pub format: OutputFormat,
    /// Verbosity level
    pub verbose: u8,
    /// Suppress non-error output
    pub quiet: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        let framework = if args.no_framework {
            FrameworkSource::Absent
        } else if let Some(path) = &args.framework_settings {
            FrameworkSource::SettingsFile(path.clone())
        } else {
            FrameworkSource::Unconfigured
        };

        Self {
            framework,
            format: args.format,
            verbose: args.verbose,
            quiet: args.quiet,
        }
    }

    /// Probe matching the configured framework source
    pub fn probe(&self) -> Box<dyn FrameworkProbe> {
        match &self.framework {
            FrameworkSource::SettingsFile(path) => Box::new(SettingsFileProbe::new(path)),
            FrameworkSource::Absent => Box::new(StaticProbe(false)),
            FrameworkSource::Unconfigured => Box::new(SettingsFileProbe::unconfigured()),
        }
    }

    /// Default `tracing` filter directive for the verbosity level
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Split process arguments into the list clap parses and the `-profile` tokens.
///
/// The program name in `argv[0]` always stays first in the clap list; only the
/// remaining arguments are searched and stripped. The second list is either
/// empty or `["-profile", NAME]`.
pub fn split_process_args(argv: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut iter = argv.into_iter();
    let program = iter.next();
    let mut rest: Vec<String> = iter.collect();

    let profile_args = match take_profile(&mut rest, true) {
        Some(name) => vec![SUBPARAM_PROFILE.to_string(), name],
        None => Vec::new(),
    };

    let cli_argv = program.into_iter().chain(rest).collect();
    (cli_argv, profile_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = CliArgs::try_parse_from(["tvb"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_metadata_clean() {
        let args = CliArgs::try_parse_from(["tvb", "metadata", "clean", "/tmp/build"]).unwrap();
        match args.command {
            Some(Commands::Metadata {
                action: MetadataAction::Clean { root },
            }) => assert_eq!(root, PathBuf::from("/tmp/build")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_single_dash_profile_is_not_a_clap_flag() {
        assert!(CliArgs::try_parse_from(["tvb", "-profile", "LIBRARY_PROFILE"]).is_err());
    }

    #[test]
    fn test_settings_framework_source() {
        let args = CliArgs::try_parse_from(["tvb", "--no-framework", "profile"]).unwrap();
        let settings = Settings::from_cli(&args);
        assert_eq!(settings.framework, FrameworkSource::Absent);
        assert!(!settings.probe().framework_available());

        let args =
            CliArgs::try_parse_from(["tvb", "--framework-settings", "/nonexistent/settings.py"])
                .unwrap();
        let settings = Settings::from_cli(&args);
        assert_eq!(
            settings.framework,
            FrameworkSource::SettingsFile(PathBuf::from("/nonexistent/settings.py"))
        );
        assert!(!settings.probe().framework_available());
    }

    #[test]
    fn test_no_framework_wins_over_env_settings() {
        std::env::set_var(FRAMEWORK_SETTINGS_ENV, "/etc/tvb/settings.py");
        let parsed = CliArgs::try_parse_from(["tvb", "--no-framework", "profile"]);
        std::env::remove_var(FRAMEWORK_SETTINGS_ENV);

        let args = parsed.unwrap();
        assert_eq!(args.framework_settings, Some(PathBuf::from("/etc/tvb/settings.py")));
        let settings = Settings::from_cli(&args);
        assert_eq!(settings.framework, FrameworkSource::Absent);
    }

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_process_args_keeps_program_name() {
        let (cli, profile) = split_process_args(argv(&["tvb", "package", "-profile", "tvb"]));
        assert_eq!(cli, argv(&["tvb", "package"]));
        assert_eq!(profile, argv(&["-profile", "tvb"]));

        let args = CliArgs::try_parse_from(&cli).unwrap();
        assert!(matches!(args.command, Some(Commands::Package)));
    }

    #[test]
    fn test_split_process_args_without_profile() {
        let (cli, profile) = split_process_args(argv(&["tvb", "profiles", "-profile"]));
        assert_eq!(cli, argv(&["tvb", "profiles", "-profile"]));
        assert!(profile.is_empty());

        let (cli, profile) = split_process_args(Vec::new());
        assert!(cli.is_empty());
        assert!(profile.is_empty());
    }

    #[test]
    fn test_log_directive() {
        let mut settings = Settings::default();
        assert_eq!(settings.log_directive(), "warn");
        settings.verbose = 2;
        assert_eq!(settings.log_directive(), "debug");
        settings.quiet = true;
        assert_eq!(settings.log_directive(), "error");
    }
}

//! tvb CLI - profile selection and package metadata

use clap::Parser;
use tvb::config::{split_process_args, CliArgs, Commands, MetadataAction, OutputFormat, Settings};
use tvb::error::Result;
use tvb::package::PackageDescriptor;
use tvb::profile::{self, ProfileContext, TvbProfile};
use tracing_subscriber::EnvFilter;

fn main() {
    // Strip `-profile <NAME>` before clap parses the rest
    let (cli_argv, mut profile_args) = split_process_args(std::env::args().collect());

    let args = CliArgs::parse_from(&cli_argv);
    let settings = Settings::from_cli(&args);

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Handle result
    if let Err(e) = run(args, settings, &mut profile_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs, settings: Settings, profile_args: &mut Vec<String>) -> Result<()> {
    profile::global::apply_profile(profile_args, true)?;
    profile::global::install_probe(settings.probe().as_ref())?;
    profile::global::freeze();
    let context = profile::global::snapshot();

    tracing::info!(
        "Profile {:?}, framework available: {}",
        context.selected(),
        context.framework_available()
    );

    match args.command.unwrap_or(Commands::Profile) {
        Commands::Profile => cmd_profile(&context, &settings),
        Commands::Profiles => cmd_profiles(&settings),
        Commands::Package => cmd_package(&settings),
        Commands::Metadata { action } => cmd_metadata(action, &settings),
        Commands::Install { root } => cmd_install(&root, &settings),
    }
}

fn cmd_profile(context: &ProfileContext, settings: &Settings) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "selected": context.selected(),
                "known": context.selected_profile().is_some(),
                "framework_available": context.framework_available(),
                "library_mode": context.is_library_mode(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("Profile:      {}", context.selected().unwrap_or("(none)"));
            if context.selected().is_some() && context.selected_profile().is_none() {
                println!("              (not a known profile)");
            }
            let framework = if context.framework_available() {
                "available"
            } else {
                "absent"
            };
            println!("Framework:    {}", framework);
            println!("Library mode: {}", context.is_library_mode());
        }
    }
    Ok(())
}

fn cmd_profiles(settings: &Settings) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&TvbProfile::ALL)?);
        }
        OutputFormat::Text => {
            for profile in TvbProfile::ALL {
                println!("{:24} {}", profile.as_str(), profile.description());
            }
        }
    }
    Ok(())
}

fn cmd_package(settings: &Settings) -> Result<()> {
    let descriptor = PackageDescriptor::tvb();
    match settings.format {
        OutputFormat::Json => println!("{}", descriptor.to_json()?),
        OutputFormat::Text => descriptor.print_summary(),
    }
    Ok(())
}

fn cmd_metadata(action: MetadataAction, settings: &Settings) -> Result<()> {
    let descriptor = PackageDescriptor::tvb();
    match action {
        MetadataAction::Write { root } => {
            let written = descriptor.write_metadata(&root)?;
            if !settings.quiet {
                for path in written {
                    println!("{}", path.display());
                }
            }
        }
        MetadataAction::Clean { root } => {
            let removed = descriptor.cleanup_metadata_dir(&root);
            if !settings.quiet {
                let dir = descriptor.metadata_dir(&root);
                if removed {
                    println!("Removed {}", dir.display());
                } else {
                    println!("Nothing removed at {}", dir.display());
                }
            }
        }
    }
    Ok(())
}

fn cmd_install(root: &std::path::Path, settings: &Settings) -> Result<()> {
    let report = PackageDescriptor::tvb().install(root)?;
    if !settings.quiet {
        println!(
            "Generated {} metadata files in {}",
            report.files_written.len(),
            report.metadata_dir.display()
        );
        println!("Cleanup:   {}", if report.cleaned { "removed" } else { "skipped" });
    }
    Ok(())
}

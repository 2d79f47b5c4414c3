//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use flowbuild::config::Overrides;
use flowbuild::output::OutputMode;

/// flowbuild - Resolve native dependencies and drive the CMake build
#[derive(Parser, Debug)]
#[command(
    name = "flowbuild",
    version,
    about = "Resolve native dependencies and drive the CMake build",
    long_about = "Build orchestration for native image-processing components.\n\n\
                  Requirements are resolved from flowbuild.toml and located in the package store.\n\
                  Runtime libraries are imported, then cmake generates, builds and tests the project."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Option and setting overrides shared by resolving commands
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Option override: build_tests=<bool> or <package>:shared=<bool>
    #[arg(short = 'o', long = "option", value_name = "OPTION")]
    pub options: Vec<String>,

    /// Setting override: os, arch, compiler, compiler.version, build_type
    #[arg(short = 's', long = "setting", value_name = "SETTING")]
    pub settings: Vec<String>,

    /// Package store location
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Folder containing flowbuild.toml (searched upwards)
    #[arg(long = "source-folder", default_value = ".")]
    pub source_folder: PathBuf,
}

impl ConfigArgs {
    /// Command-line overrides for config layering
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            options: self.options.clone(),
            settings: self.settings.clone(),
            store: self.store.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default flowbuild.toml in the current directory
    Init {
        /// Overwrite an existing recipe
        #[arg(short, long)]
        force: bool,
    },

    /// Show resolved dependencies and the commands a build would run
    Info {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Locate packages, import runtime files and write flowbuildinfo.cmake
    Install {
        #[command(flatten)]
        config: ConfigArgs,

        /// Where imported files and generated files go
        #[arg(long = "install-folder", default_value = ".")]
        install_folder: PathBuf,
    },

    /// Install, then generate, build and test the project
    Build {
        #[command(flatten)]
        config: ConfigArgs,

        /// Where imported files and generated files go
        #[arg(long = "install-folder", default_value = ".")]
        install_folder: PathBuf,

        /// Print the commands instead of running them
        #[arg(long)]
        dry_run: bool,

        /// Skip the install phase
        #[arg(long)]
        skip_install: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Info { config }) => commands::info(&config, output_mode),
        Some(Command::Install {
            config,
            install_folder,
        }) => commands::install(&config, &install_folder, output_mode),
        Some(Command::Build {
            config,
            install_folder,
            dry_run,
            skip_install,
        }) => commands::build(
            &config,
            &commands::BuildFlags {
                install_folder,
                dry_run,
                skip_install,
            },
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("flowbuild v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("flowbuild v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'flowbuild --help' for usage");
                println!("Run 'flowbuild init' to get started");
            }
            Ok(())
        },
    }
}

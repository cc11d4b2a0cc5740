//! Unified command-line interface for the SoC configuration generator.

mod commands;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};

use socgen_config::{find_and_load, load_config, SocConfig};

#[derive(Parser)]
#[command(name = "socgen", version, about = "SoC configuration generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new SoC project with a starter soc.toml
    Init {
        /// Project and board name
        name: String,
    },
    /// Validate the configuration and print derived values
    Check {
        /// Path to soc.toml (default: search upward from cwd)
        #[arg(long)]
        config: Option<String>,
    },
    /// Show the resolved configuration
    Show {
        /// Path to soc.toml (default: search upward from cwd)
        #[arg(long)]
        config: Option<String>,
        /// Output format (default: human-readable, "toml" for TOML)
        #[arg(long)]
        format: Option<String>,
    },
    /// Render one artifact to stdout without writing files
    Preview {
        /// Artifact name (boot-stub, firmware-header, hardware-package,
        /// emulator-constants, timing-constraint, shell-config)
        artifact: String,
        /// Path to soc.toml (default: search upward from cwd)
        #[arg(long)]
        config: Option<String>,
    },
    /// Generate every artifact into the project tree
    Generate {
        /// Path to soc.toml (default: search upward from cwd)
        #[arg(long)]
        config: Option<String>,
        /// Output root (default: the directory containing soc.toml)
        #[arg(long)]
        out_dir: Option<String>,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Check { config } => {
            let (config, _) = resolve_config(&cwd, config.as_deref())?;
            commands::check::run(&config)
        }

        Commands::Show { config, format } => {
            let (config, _) = resolve_config(&cwd, config.as_deref())?;
            commands::show::run(&config, format.as_deref())
        }

        Commands::Preview { artifact, config } => {
            let (config, _) = resolve_config(&cwd, config.as_deref())?;
            commands::preview::run(&config, &artifact)
        }

        Commands::Generate {
            config,
            out_dir,
            report,
        } => {
            let (config, project_dir) = resolve_config(&cwd, config.as_deref())?;
            let out_root = out_dir.map(PathBuf::from).unwrap_or(project_dir);
            commands::generate::run(&config, &out_root, report.as_deref())
        }
    }
}

/// Resolve the configuration: an explicit `--config` path wins, otherwise the
/// nearest `soc.toml` found walking upward from cwd. Also returns the project
/// directory (the directory containing the configuration file).
fn resolve_config(cwd: &Path, flag: Option<&str>) -> anyhow::Result<(SocConfig, PathBuf)> {
    match flag {
        Some(path) => {
            let path = Path::new(path);
            let config =
                load_config(path).with_context(|| format!("loading {}", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if parent != Path::new("") => parent.to_path_buf(),
                _ => cwd.to_path_buf(),
            };
            Ok((config, dir))
        }
        None => match find_and_load(cwd)? {
            Some((config, dir)) => Ok((config, dir)),
            None => anyhow::bail!("no soc.toml found (run `socgen init` first)"),
        },
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Full workflow: init, check, generate.
    #[test]
    fn init_check_generate_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("workflow-test");

        // 1. Init
        commands::init::create_project(&project_path, "workflow-test").unwrap();
        assert!(project_path.join("soc.toml").is_file());

        // 2. Check: load, validate, derive
        let (config, project_dir) = find_and_load(&project_path).unwrap().unwrap();
        assert_eq!(project_dir, project_path);
        commands::check::run(&config).unwrap();

        // 3. Generate into the project tree
        commands::generate::run(&config, &project_path, None).unwrap();
        assert!(project_path.join("firmware/src/start.S").is_file());
        assert!(project_path.join("firmware/src/soc_config.hpp").is_file());
        assert!(project_path.join("hdl/soc_config.sv").is_file());
        assert!(project_path.join("emulator/src/soc_config.hpp").is_file());
        assert!(project_path.join("hdl/clocks.sdc").is_file());
        assert!(project_path.join("scripts/soc_config.sh").is_file());
    }

    /// Generate with JSON report output.
    #[test]
    fn generate_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("json-test");
        commands::init::create_project(&project_path, "json-test").unwrap();

        let (config, _) = find_and_load(&project_path).unwrap().unwrap();
        commands::generate::run(&config, &project_path, Some("json")).unwrap();
    }

    /// Preview renders without writing.
    #[test]
    fn preview_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("preview-test");
        commands::init::create_project(&project_path, "preview-test").unwrap();

        let (config, _) = find_and_load(&project_path).unwrap().unwrap();
        commands::preview::run(&config, "boot-stub").unwrap();
        assert!(!project_path.join("firmware").exists());
    }

    #[test]
    fn resolve_config_prefers_flag() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        commands::init::create_project(&a, "board-a").unwrap();
        commands::init::create_project(&b, "board-b").unwrap();

        let flag = b.join("soc.toml");
        let (config, project_dir) = resolve_config(&a, Some(flag.to_str().unwrap())).unwrap();
        assert_eq!(config.board.name, "board-b");
        assert_eq!(project_dir, b);
    }

    #[test]
    fn resolve_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("nested-test");
        commands::init::create_project(&project_path, "nested-test").unwrap();

        let nested = project_path.join("hdl");
        std::fs::create_dir_all(&nested).unwrap();
        let (config, project_dir) = resolve_config(&nested, None).unwrap();
        assert_eq!(config.board.name, "nested-test");
        assert_eq!(project_dir, project_path);
    }

    #[test]
    fn resolve_config_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("soc.toml");
        let result = resolve_config(dir.path(), Some(missing.to_str().unwrap()));
        assert!(result.is_err());
    }
}

//! `socgen init`: project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use socgen_config::{generate_template, CONFIG_FILE_NAME};

/// Create a new SoC project at the given path.
///
/// `name` is the board and project name. The directory `name` is created
/// relative to cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir).context("creating project directory")?;

    let config_content = generate_template(name);
    fs::write(project_dir.join(CONFIG_FILE_NAME), &config_content)
        .context("writing soc.toml")?;

    println!("Created project '{name}'");
    println!("  {name}/{CONFIG_FILE_NAME}");
    println!();
    println!("Edit {CONFIG_FILE_NAME} and run `socgen generate`.");

    Ok(())
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use geng_config::{Config, ExcludeSet, GengToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InterfaceCommand {
    /// Directory to walk (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Glob of paths to skip, relative to the directory (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Path to geng.toml (defaults to <dir>/geng.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the generated files without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl InterfaceCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config().unwrap_or_exit();

        let patterns = config.interface.exclude.iter().chain(&self.exclude);
        let exclusions = ExcludeSet::new(&self.dir, patterns).unwrap_or_exit();
        tracing::debug!(patterns = exclusions.len(), "exclusions compiled");

        let report = ops::interface(ops::interface::InterfaceOptions {
            dir: &self.dir,
            exclusions: exclusions.into_predicates(),
            dry_run: self.dry_run,
        })
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn load_config(&self) -> geng_config::Result<Config> {
        let file = match &self.config {
            Some(path) => Some(GengToml::open(path)?),
            None => GengToml::discover(&self.dir)?,
        };

        Ok(match file {
            Some(file) => {
                tracing::debug!(path = %file.path().display(), "loaded config");
                file.into_config()
            }
            None => Config::default(),
        })
    }
}

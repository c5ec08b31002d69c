use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Interactive console file manager
#[derive(Parser, Debug)]
#[command(name = "tansu", version, about)]
pub struct Cli {
    /// Directory to start in (defaults to the home directory)
    pub path: Option<PathBuf>,

    /// Show hidden files
    #[arg(long)]
    pub show_hidden: bool,

    /// Move deleted files to the system trash instead of removing them
    #[arg(long, overrides_with = "no_trash")]
    pub trash: bool,

    /// Delete files permanently even if the config enables the trash
    #[arg(long)]
    pub no_trash: bool,
}

impl Cli {
    /// Layers command line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if self.show_hidden {
            config.ui.show_hidden = true;
        }
        if self.trash {
            config.ops.use_trash = true;
        }
        if self.no_trash {
            config.ops.use_trash = false;
        }
    }
}

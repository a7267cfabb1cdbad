use clap::Parser;
use std::path::PathBuf;

use crate::config::DemoConfig;
use crate::list::EmptyList;

#[derive(Parser, Debug)]
#[command(name = "filedrop-demo")]
#[command(
    about = "Replay recorded drop-zone and file-input events and print the dropped files",
    long_about = None
)]
pub struct Cli {
    /// JSON config file (camelCase keys)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Id of the drop zone element; dragleave only counts for it
    #[arg(long)]
    pub zone_id: Option<String>,

    /// Id of the hidden file input
    #[arg(long)]
    pub input_id: Option<String>,

    /// MIME type accepted by the picker (repeatable)
    #[arg(long = "accept")]
    pub accept: Vec<String>,

    /// Pick a single file instead of several
    #[arg(long)]
    pub single: bool,

    /// Deliver a placeholder file for empty file lists instead of ignoring them
    #[arg(long)]
    pub sentinel: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<DemoConfig, String> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };

        if let Some(id) = &self.zone_id {
            config.drop_zone_id = id.clone();
        }
        if let Some(id) = &self.input_id {
            config.input_id = id.clone();
        }
        if !self.accept.is_empty() {
            config.accept = self.accept.clone();
        }
        if self.single {
            config.multiple = false;
        }
        if self.sentinel {
            config.empty_list = EmptyList::Sentinel;
        }

        config.validate()?;
        Ok(config)
    }
}

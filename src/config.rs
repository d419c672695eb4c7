use crate::sitemap::COURSERA_SITEMAP_URL;
use clap::Parser;
use std::{num::NonZeroUsize, path::PathBuf};

pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Sample random courses from the Coursera catalog and export them to an xlsx file.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Destination .xlsx file
    pub output: PathBuf,

    /// Number of courses to sample
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub count: usize,

    /// Sitemap listing the catalog's course pages
    #[arg(long, default_value = COURSERA_SITEMAP_URL)]
    pub sitemap_url: String,

    /// Course pages fetched at once
    #[arg(short = 'j', long, default_value = "1")]
    pub concurrency: NonZeroUsize,

    /// Skip courses that fail to fetch or lack a name/language instead of aborting
    #[arg(long)]
    pub skip_failed: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sitemap_url: String,
    pub sample_size: usize,
    pub concurrency: NonZeroUsize,
    pub skip_failed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sitemap_url: COURSERA_SITEMAP_URL.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            concurrency: NonZeroUsize::MIN,
            skip_failed: false,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            sitemap_url: cli.sitemap_url.clone(),
            sample_size: cli.count,
            concurrency: cli.concurrency,
            skip_failed: cli.skip_failed,
        }
    }
}

pub mod analyze;
pub mod config;
pub mod export;
pub mod inspect;

use crate::config::Config;
use crate::core::loader::load_archive_file;
use crate::errors::AppResult;
use crate::models::baby_stats::BabyStats;
use crate::utils::path::expand_tilde;

/// Load and normalize the archive named on the command line.
pub(crate) fn load_stats(archive: &str, cfg: &Config) -> AppResult<BabyStats> {
    let path = expand_tilde(archive);
    tracing::debug!(archive = %path.display(), "loading archive");
    load_archive_file(&path, &cfg.day_boundaries()?)
}

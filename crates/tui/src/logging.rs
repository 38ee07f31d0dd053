use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{
  Context,
  Result
};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// File-backed tracing setup. The
/// terminal owns stdout once the
/// alternate screen is up, so
/// without a configured file there
/// is no subscriber at all.
pub(crate) fn init_logging(
  config: &LoggingConfig
) -> Result<()> {
  let Some(path) = &config.file
  else {
    return Ok(());
  };

  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent)
        .with_context(|| {
          format!(
            "create log dir: {}",
            parent.display()
          )
        })?;
    }
  }

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| {
      format!(
        "open log file: {}",
        path.display()
      )
    })?;

  // Base level from config, still
  // overridable via RUST_LOG.
  let level = &config.level;
  let default = format!(
    "{level},rollscan_core={level},\
     reqwest=warn"
  );
  let filter =
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| {
        EnvFilter::new(default)
      });

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();

  Ok(())
}

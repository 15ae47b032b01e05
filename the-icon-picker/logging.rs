//! Log setup for embedding shells.
//!
//! The picker itself only uses the `log` facade; the shell decides where
//! records go. This helper wires the usual file dispatch: level from a
//! `-v`-style verbosity count, timestamped records, target file resolved by
//! the loader unless overridden.

use std::path::PathBuf;

use anyhow::Result;

pub fn setup_logging(verbosity: u8, file: Option<PathBuf>) -> Result<()> {
  let log_file = file.unwrap_or_else(the_icon_picker_loader::log_file);

  let mut base = fern::Dispatch::new();
  base = match verbosity {
    0 => base.level(log::LevelFilter::Warn),
    1 => base.level(log::LevelFilter::Info),
    2 => base.level(log::LevelFilter::Debug),
    _ => base.level(log::LevelFilter::Trace),
  };

  let file_dispatch = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .chain(fern::log_file(log_file)?);

  base.chain(file_dispatch).apply()?;
  Ok(())
}

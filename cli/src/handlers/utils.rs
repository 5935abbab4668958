use core::fmt;
use std::{io, path::PathBuf};

use musadora_core::config::CliSettings;

/// Pick the library file to read: the one given on the command line, or the one from the config.
///
/// # Errors
///
/// Returns an error if neither is set.
pub fn resolve_library_path(
    path: Option<&PathBuf>,
    settings: &CliSettings,
) -> anyhow::Result<PathBuf> {
    path.or(settings.library.as_ref()).cloned().ok_or_else(|| {
        anyhow::anyhow!("No library file given, and no `library` set in the config file")
    })
}

pub struct WriteAdapter<W>(pub W);

impl<W> fmt::Write for WriteAdapter<W>
where
    W: io::Write,
{
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), fmt::Error> {
        self.0.write_fmt(args).map_err(|_| fmt::Error)
    }
}

//! Infrastructure implementation of the `FileIo` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::FileIo;

/// Temp-dir backed `FileIo`. Written files get owner-only permissions;
/// the export flow puts private keys through this.
pub struct TempFileIo;

impl FileIo for TempFileIo {
    fn temp_dir(&self) -> Result<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix("groundwork-")
            .tempdir()
            .context("creating temp directory")?;
        // The key file must outlive this process; the surrounding shell
        // references it until the session ends.
        Ok(dir.keep())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        // Write to a sibling temp file then rename, so a failure never
        // leaves a partial file at `path`.
        let temp_path = path.with_extension("tmp");
        if let Err(e) = std::fs::write(&temp_path, contents) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("writing {}", temp_path.display()));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp_path.display()))?;
        }

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("finalizing {}", path.display()))?;
        Ok(())
    }
}

//! Readers over the deployment vars files.
//!
//! Provisioning leaves YAML vars files under `<state-dir>/vars`; this
//! module implements the `SshKeyGetter` and `CredhubGetter` ports on top
//! of them. Nothing here dials credhub itself — the files are the source
//! of truth.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{CredhubGetter, SshKeyGetter};

/// Credhub's TLS port on the director VM.
const CREDHUB_PORT: u16 = 8844;

/// Vars-file directory for one environment.
pub struct VarsDir {
    dir: PathBuf,
}

impl VarsDir {
    /// Vars files live in `<state-dir>/vars`.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: state_dir.into().join("vars"),
        }
    }

    fn read_yaml(&self, file: &str) -> Result<serde_yaml::Value> {
        let path = self.dir.join(file);
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Walk `keys` into a YAML document and return the string at the end.
    fn lookup_string(&self, file: &str, keys: &[&str]) -> Result<String> {
        let doc = self.read_yaml(file)?;
        let mut value = &doc;
        for &key in keys {
            value = value
                .get(key)
                .with_context(|| format!("{} not found in {file}", keys.join(".")))?;
        }
        let s = value
            .as_str()
            .with_context(|| format!("{} in {file} is not a string", keys.join(".")))?;
        Ok(s.to_string())
    }
}

impl SshKeyGetter for VarsDir {
    fn get(&self, deployment: &str) -> Result<String> {
        self.lookup_string(
            &format!("{deployment}-vars-store.yml"),
            &["jumpbox_ssh", "private_key"],
        )
    }
}

impl CredhubGetter for VarsDir {
    fn get_server(&self) -> Result<String> {
        let ip = self.lookup_string("director-vars-file.yml", &["internal_ip"])?;
        Ok(format!("https://{ip}:{CREDHUB_PORT}"))
    }

    fn get_certs(&self) -> Result<String> {
        let credhub_ca =
            self.lookup_string("director-vars-store.yml", &["credhub_ca", "certificate"])?;
        let uaa_ca = self.lookup_string("director-vars-store.yml", &["uaa_ssl", "ca"])?;
        Ok(format!("{credhub_ca}{uaa_ca}"))
    }

    fn get_password(&self) -> Result<String> {
        self.lookup_string("director-vars-store.yml", &["credhub_cli_password"])
    }
}

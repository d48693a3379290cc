//! Environment-export derivation.
//!
//! Turns the persisted deployment state (plus terraform outputs in
//! no-director mode) into the `export` statements the BOSH and credhub
//! CLIs need. Director and jumpbox material is mandatory; the credhub
//! lookups are best-effort and degrade to stderr warnings.

use anyhow::Result;

use crate::application::ports::{
    CredhubGetter, FileIo, Logger, SshKeyGetter, StateValidator, TerraformManager,
};
use crate::domain::DeploymentState;

/// Deployment whose SSH key opens the tunnel.
const JUMPBOX_DEPLOYMENT: &str = "jumpbox";

/// File name the jumpbox private key is written under.
const JUMPBOX_KEY_FILE: &str = "bosh_jumpbox_private.key";

/// Outcome of one optional lookup: export lines to print, or a fixed
/// warning for the stderr logger. Keeps the fatal/recoverable split
/// visible in the types instead of buried in control flow.
enum Lookup {
    Lines(Vec<String>),
    Warn(&'static str),
}

/// Cheap pre-flight check so a missing environment fails before any
/// side effects.
///
/// # Errors
///
/// Propagates the validator's error verbatim.
pub fn check_fast_fails(validator: &impl StateValidator) -> Result<()> {
    validator.validate()
}

/// Print the export statements for `state`.
///
/// In no-director mode only the environment URL is derived (from terraform
/// outputs) and nothing else is printed. Otherwise: director lines, then
/// credhub lines, then the jumpbox key and proxy lines.
///
/// # Errors
///
/// Terraform-output fetch, SSH key fetch, and key-file write failures are
/// fatal and surface the collaborator's error unchanged. Credhub lookup
/// failures only produce warnings on `stderr_logger`.
pub async fn execute(
    logger: &impl Logger,
    stderr_logger: &impl Logger,
    ssh_key_getter: &impl SshKeyGetter,
    credhub: &impl CredhubGetter,
    terraform: &impl TerraformManager,
    file_io: &impl FileIo,
    state: &DeploymentState,
) -> Result<()> {
    if state.no_director {
        let outputs = terraform.get_outputs().await?;
        logger.println(&format!(
            "export BOSH_ENVIRONMENT=https://{}:25555",
            outputs.get_string("external_ip")
        ));
        return Ok(());
    }

    logger.println(&format!("export BOSH_CLIENT={}", state.director.username));
    logger.println(&format!(
        "export BOSH_CLIENT_SECRET={}",
        state.director.password
    ));
    logger.println(&format!("export BOSH_CA_CERT='{}'", state.director.ca_cert));
    logger.println(&format!("export BOSH_ENVIRONMENT={}", state.director.address));

    for lookup in credhub_lookups(credhub) {
        match lookup {
            Lookup::Lines(lines) => {
                for line in lines {
                    logger.println(&line);
                }
            }
            Lookup::Warn(warning) => stderr_logger.println(warning),
        }
    }

    let private_key = ssh_key_getter.get(JUMPBOX_DEPLOYMENT)?;
    let dir = file_io.temp_dir()?;
    let key_path = dir.join(JUMPBOX_KEY_FILE);
    file_io.write_file(&key_path, private_key.as_bytes())?;

    logger.println(&format!(
        "export JUMPBOX_PRIVATE_KEY={}",
        key_path.display()
    ));
    logger.println(&format!(
        "export BOSH_ALL_PROXY=ssh+socks5://jumpbox@{}?private-key=$JUMPBOX_PRIVATE_KEY",
        state.jumpbox.url
    ));

    Ok(())
}

/// The credhub block. Each lookup fails independently; `CREDHUB_USER` is a
/// fixed client name and always printed.
fn credhub_lookups(credhub: &impl CredhubGetter) -> [Lookup; 4] {
    [
        match credhub.get_server() {
            Ok(server) => Lookup::Lines(vec![format!("export CREDHUB_SERVER={server}")]),
            Err(_) => Lookup::Warn("No credhub server found."),
        },
        match credhub.get_certs() {
            Ok(certs) => Lookup::Lines(vec![format!("export CREDHUB_CA_CERT='{certs}'")]),
            Err(_) => Lookup::Warn("No credhub certs found."),
        },
        Lookup::Lines(vec!["export CREDHUB_USER=credhub-cli".to_string()]),
        match credhub.get_password() {
            Ok(password) => Lookup::Lines(vec![format!("export CREDHUB_PASSWORD={password}")]),
            Err(_) => Lookup::Warn("No credhub password found."),
        },
    ]
}

//! `groundwork cleanup [--filter <substring>] [--no-confirm]` — list and
//! delete leftover resource groups.

use anyhow::Result;

use crate::application::ports::{GroupsClient, Prompter};
use crate::application::services::leftovers::Groups;
use crate::domain::Deletable;
use crate::domain::error::CleanupError;
use crate::output::OutputContext;

/// Run the cleanup flow: list, filter, confirm, then delete what was
/// confirmed.
///
/// Individual deletion failures are reported and the run continues; the
/// command fails at the end if any deletion failed.
///
/// # Errors
///
/// Returns an error if the provider listing call fails or any deletion
/// failed.
pub async fn run(
    ctx: &OutputContext,
    client: &impl GroupsClient,
    prompter: &impl Prompter,
    filter: &str,
) -> Result<()> {
    let resources = Groups::new(client, prompter).list(filter).await?;

    if resources.is_empty() {
        ctx.info("No leftover resource groups matched.");
        return Ok(());
    }

    let mut failed = 0u32;
    for resource in &resources {
        match resource.delete().await {
            Ok(()) => ctx.success(&format!("Deleted {} {}.", resource.kind(), resource.name())),
            Err(cause) => {
                let err = CleanupError::Deleting {
                    kind: crate::domain::resource::RESOURCE_GROUP,
                    name: resource.name().to_string(),
                    cause,
                };
                ctx.error(&err.to_string());
                failed += 1;
            }
        }
    }

    anyhow::ensure!(failed == 0, "{failed} deletion(s) failed");
    Ok(())
}

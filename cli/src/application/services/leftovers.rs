//! Leftover-resource listing.
//!
//! Lists deletable Azure resource groups, filters them by a name
//! substring, and asks the prompter about each survivor. Deletion is a
//! separate step on the returned handles, so callers decide whether
//! anything is actually destroyed.

use anyhow::Result;

use crate::application::ports::{GroupsClient, Prompter};
use crate::domain::error::CleanupError;
use crate::domain::resource::{Deletable, RESOURCE_GROUP};

/// A resource group that survived filtering and confirmation. Holds the
/// client so it can delete itself later.
#[derive(Debug)]
pub struct Group<'a, C> {
    client: &'a C,
    name: String,
}

impl<'a, C: GroupsClient> Group<'a, C> {
    fn new(client: &'a C, name: String) -> Self {
        Self { client, name }
    }
}

impl<C: GroupsClient> Deletable for Group<'_, C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        RESOURCE_GROUP
    }

    async fn delete(&self) -> Result<()> {
        self.client.delete(&self.name).await
    }
}

/// Resource-group lister over an injected provider client and prompter.
pub struct Groups<'a, C, P> {
    client: &'a C,
    prompter: &'a P,
}

impl<'a, C: GroupsClient, P: Prompter> Groups<'a, C, P> {
    #[must_use]
    pub fn new(client: &'a C, prompter: &'a P) -> Self {
        Self { client, prompter }
    }

    /// List resource groups whose name contains `filter` and which the
    /// prompter confirmed, in provider order. An empty result is success.
    ///
    /// The filter short-circuits: filtered-out resources are never
    /// prompted for.
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::Listing`] when the provider listing call
    /// fails.
    pub async fn list(&self, filter: &str) -> Result<Vec<Group<'a, C>>, CleanupError> {
        let groups = self
            .client
            .list("", None)
            .await
            .map_err(|cause| CleanupError::Listing {
                kind: RESOURCE_GROUP,
                cause,
            })?;

        let mut resources = Vec::new();
        for group in groups {
            let r = Group::new(self.client, group.name);

            if !r.name().contains(filter) {
                continue;
            }

            if !self.prompter.confirm_deletion(r.kind(), r.name()) {
                continue;
            }

            resources.push(r);
        }

        Ok(resources)
    }
}

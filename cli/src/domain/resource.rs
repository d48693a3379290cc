//! Deletable cloud resources.

use anyhow::Result;

/// Display tag for Azure resource groups.
pub const RESOURCE_GROUP: &str = "resource group";

/// A resource as returned by the provider's listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    /// Provider-assigned name.
    pub name: String,
}

/// Uniform handle over a cloud resource that can be deleted.
///
/// Listing produces these after filtering and confirmation; deletion is a
/// separate, explicit step so a caller can list without destroying.
#[allow(async_fn_in_trait)]
pub trait Deletable {
    /// Provider-assigned display name.
    fn name(&self) -> &str;

    /// Resource kind tag, e.g. `"resource group"`.
    fn kind(&self) -> &str;

    /// Delete the resource through the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects or fails the deletion.
    async fn delete(&self) -> Result<()>;
}

//! Marketplace connection profiles.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use offersync_core::ProfileUid;

/// One merchant account on the marketplace: the authorization token, the
/// marketplace-assigned company number, and whether the connection is live.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileUid,
    pub token: String,
    pub company: i64,
    pub active: bool,
}

impl Profile {
    pub fn new(id: ProfileUid, token: impl Into<String>, company: i64) -> Self {
        Self {
            id,
            token: token.into(),
            company,
            active: true,
        }
    }
}

// The token is a credential; keep it out of Debug output and logs.
impl core::fmt::Debug for Profile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .field("company", &self.company)
            .field("active", &self.active)
            .finish()
    }
}

/// Access to the configured marketplace connections.
///
/// The production implementation reads the merchant's stored credentials;
/// this workspace only consumes the trait. Fan-out asks for the active set;
/// the delivery client resolves a single profile at delivery time and checks
/// `active` itself, because a profile may die while its tasks are in flight.
#[async_trait]
pub trait ProfileRegistry: Send + Sync {
    async fn active_profiles(&self) -> Result<Vec<Profile>, RegistryError>;

    /// The profile regardless of its active flag, or `None` if unknown.
    async fn authorization(&self, profile: ProfileUid) -> Result<Option<Profile>, RegistryError>;
}

#[async_trait]
impl<R> ProfileRegistry for Arc<R>
where
    R: ProfileRegistry + ?Sized,
{
    async fn active_profiles(&self) -> Result<Vec<Profile>, RegistryError> {
        (**self).active_profiles().await
    }

    async fn authorization(&self, profile: ProfileUid) -> Result<Option<Profile>, RegistryError> {
        (**self).authorization(profile).await
    }
}

/// Profile lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("profile storage error: {0}")]
    Storage(String),
}

/// In-memory registry for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProfileRegistry {
    profiles: RwLock<Vec<Profile>>,
}

impl InMemoryProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn insert(&self, profile: Profile) {
        self.profiles.write().unwrap().push(profile);
    }
}

#[async_trait]
impl ProfileRegistry for InMemoryProfileRegistry {
    async fn active_profiles(&self) -> Result<Vec<Profile>, RegistryError> {
        let profiles = self.profiles.read().unwrap();
        Ok(profiles.iter().filter(|p| p.active).cloned().collect())
    }

    async fn authorization(&self, profile: ProfileUid) -> Result<Option<Profile>, RegistryError> {
        let profiles = self.profiles.read().unwrap();
        Ok(profiles.iter().find(|p| p.id == profile).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn active_profiles_excludes_deactivated() {
        let registry = InMemoryProfileRegistry::new();
        let live = Profile::new(ProfileUid::new(), "token-a", 1);
        let mut dead = Profile::new(ProfileUid::new(), "token-b", 2);
        dead.active = false;
        registry.insert(live.clone());
        registry.insert(dead);

        let active = registry.active_profiles().await.unwrap();
        assert_eq!(active, vec![live]);
    }

    #[tokio::test]
    async fn authorization_returns_deactivated_profiles_too() {
        let registry = InMemoryProfileRegistry::new();
        let mut dead = Profile::new(ProfileUid::new(), "token-b", 2);
        dead.active = false;
        registry.insert(dead.clone());

        let found = registry.authorization(dead.id).await.unwrap();
        assert_eq!(found, Some(dead));

        let missing = registry.authorization(ProfileUid::new()).await.unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn debug_never_leaks_the_token() {
        let profile = Profile::new(ProfileUid::new(), "super-secret", 7);
        let rendered = format!("{profile:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

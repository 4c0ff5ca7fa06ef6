//! Session passed explicitly from the application root to every page.

use haven_nav::{CommunityTag, Feature, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub user: Option<String>,
    /// Partner community the user belongs to.
    pub discord_tag: Option<String>,
}

impl Session {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_discord_tag(mut self, tag: impl Into<String>) -> Self {
        self.discord_tag = Some(tag.into());
        self
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::SubAdmin | Role::SuperAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }

    pub fn is_partner(&self) -> bool {
        self.role == Role::Partner
    }

    pub fn allows(&self, feature: Feature) -> bool {
        self.role.allows(feature)
    }

    /// Partners land on their own community; everyone else on `all`.
    pub fn default_community_tag(&self) -> CommunityTag {
        match (&self.role, &self.discord_tag) {
            (Role::Partner, Some(tag)) => CommunityTag::from(tag.as_str()),
            _ => CommunityTag::All,
        }
    }
}

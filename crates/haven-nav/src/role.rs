//! Role capability sets.
//!
//! Pages ask `role.allows(feature)` instead of checking role flags directly.
//! Roles are strictly nested: each one allows everything the previous allows.

use crate::NavError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Public,
    Partner,
    SubAdmin,
    SuperAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    BrowseSystems,
    BrowseDiscoveries,
    SystemDetail,
    Events,
    Settings,
    EditSystems,
    CsvImport,
    Analytics,
    BulkActions,
    ApprovalAudit,
    DatabaseStats,
    ApiKeys,
    DataRestrictions,
    SubAdmins,
    TestRunner,
}

impl Feature {
    pub const ALL: [Feature; 15] = [
        Feature::BrowseSystems,
        Feature::BrowseDiscoveries,
        Feature::SystemDetail,
        Feature::Events,
        Feature::Settings,
        Feature::EditSystems,
        Feature::CsvImport,
        Feature::Analytics,
        Feature::BulkActions,
        Feature::ApprovalAudit,
        Feature::DatabaseStats,
        Feature::ApiKeys,
        Feature::DataRestrictions,
        Feature::SubAdmins,
        Feature::TestRunner,
    ];

    /// Least privileged role that may use this feature.
    pub fn minimum_role(&self) -> Role {
        match self {
            Feature::BrowseSystems
            | Feature::BrowseDiscoveries
            | Feature::SystemDetail
            | Feature::Events
            | Feature::Settings => Role::Public,
            Feature::EditSystems | Feature::CsvImport | Feature::Analytics => Role::Partner,
            Feature::BulkActions | Feature::ApprovalAudit | Feature::DatabaseStats => {
                Role::SubAdmin
            }
            Feature::ApiKeys
            | Feature::DataRestrictions
            | Feature::SubAdmins
            | Feature::TestRunner => Role::SuperAdmin,
        }
    }
}

impl Role {
    pub fn allows(&self, feature: Feature) -> bool {
        *self >= feature.minimum_role()
    }

    pub fn features(&self) -> Vec<Feature> {
        Feature::ALL
            .iter()
            .copied()
            .filter(|f| self.allows(*f))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Partner => "partner",
            Role::SubAdmin => "sub_admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "public" => Ok(Role::Public),
            "partner" => Ok(Role::Partner),
            "sub_admin" | "subadmin" => Ok(Role::SubAdmin),
            "super_admin" | "superadmin" => Ok(Role::SuperAdmin),
            _ => Err(NavError::UnknownRole(s.to_string())),
        }
    }
}

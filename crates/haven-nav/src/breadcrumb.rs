//! Breadcrumb trail derivation.
//!
//! The trail is recomputed from `HierarchyState` on every render; it holds no
//! state of its own.

use crate::filters::CommunityTag;
use crate::hierarchy::{CurrentLevel, HierarchyState, NavLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Level the list shows when this crumb is the deepest one.
    pub level: CurrentLevel,
    /// Where clicking the crumb ascends to; `None` for the region crumb,
    /// which is always the current position when present.
    pub target: Option<NavLevel>,
    pub active: bool,
}

impl Breadcrumb {
    fn new(label: impl Into<String>, level: CurrentLevel, target: Option<NavLevel>) -> Self {
        Self {
            label: label.into(),
            level,
            target,
            active: false,
        }
    }
}

/// Label of the view-all pseudo crumb for the active community filter.
pub fn view_all_label(tag: &CommunityTag) -> String {
    match tag {
        CommunityTag::All => "All Systems".to_string(),
        CommunityTag::Untagged => "All Untagged Systems".to_string(),
        CommunityTag::Personal => "All Personal Systems".to_string(),
        CommunityTag::Tag(t) => format!("All {} Systems", t),
    }
}

pub fn derive(state: &HierarchyState, root_label: &str, tag: &CommunityTag) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb::new(
        root_label,
        CurrentLevel::Realities,
        Some(NavLevel::Root),
    )];

    if let Some(reality) = &state.reality {
        crumbs.push(Breadcrumb::new(
            reality.as_str(),
            CurrentLevel::Galaxies,
            Some(NavLevel::Reality),
        ));
    }

    if let Some(galaxy) = &state.galaxy {
        crumbs.push(Breadcrumb::new(
            galaxy.as_str(),
            CurrentLevel::Regions,
            Some(NavLevel::Galaxy),
        ));
    }

    if state.view_all_systems {
        crumbs.push(Breadcrumb::new(
            view_all_label(tag),
            CurrentLevel::ViewAllSystems,
            Some(NavLevel::ViewAll),
        ));
    } else if let Some(region) = &state.region {
        crumbs.push(Breadcrumb::new(region.label(), CurrentLevel::Systems, None));
    }

    let current = state.current_level();
    for crumb in &mut crumbs {
        crumb.active = crumb.level == current;
    }
    crumbs
}

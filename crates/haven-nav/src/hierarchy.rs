//! Hierarchy navigator.
//!
//! Four-level drill-down (Reality → Galaxy → Region → Systems) plus an
//! orthogonal "view all systems" mode. Selecting a shallower level always
//! clears everything deeper; `region` and `view_all_systems` are mutually
//! exclusive.

use crate::breadcrumb::{self, Breadcrumb};
use crate::filters::CommunityTag;
use crate::url_state;
use crate::{NavError, SYSTEMS_ROOT_LABEL};
use haven_types::RegionSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// REGION
// ============================================================================

/// A region key `{x, y, z}` with its optional human names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub region_x: i64,
    pub region_y: i64,
    pub region_z: i64,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
}

impl Region {
    pub fn new(region_x: i64, region_y: i64, region_z: i64) -> Self {
        Self {
            region_x,
            region_y,
            region_z,
            display_name: None,
            custom_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    pub fn coords(&self) -> (i64, i64, i64) {
        (self.region_x, self.region_y, self.region_z)
    }

    /// Same coordinate key, names ignored.
    pub fn same_key(&self, other: &Region) -> bool {
        self.coords() == other.coords()
    }

    /// Name to show: custom name, then display name.
    pub fn name(&self) -> Option<&str> {
        self.custom_name
            .as_deref()
            .or(self.display_name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Breadcrumb label; falls back to the coordinate key.
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!(
                "Region [{}, {}, {}]",
                self.region_x, self.region_y, self.region_z
            ),
        }
    }

    /// Parse `"X,Y,Z"` into an unnamed region.
    pub fn parse_coords(s: &str) -> Result<Self, NavError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [x, y, z] => match (x.parse(), y.parse(), z.parse()) {
                (Ok(x), Ok(y), Ok(z)) => Ok(Region::new(x, y, z)),
                _ => Err(NavError::InvalidCoordinates(s.to_string())),
            },
            _ => Err(NavError::InvalidCoordinates(s.to_string())),
        }
    }
}

impl From<&RegionSummary> for Region {
    fn from(row: &RegionSummary) -> Self {
        Self {
            region_x: row.region_x,
            region_y: row.region_y,
            region_z: row.region_z,
            display_name: row.display_name.clone(),
            custom_name: row.custom_name.clone(),
        }
    }
}

// ============================================================================
// LEVELS
// ============================================================================

/// Which list the browser is showing; a pure function of `HierarchyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrentLevel {
    Realities,
    Galaxies,
    Regions,
    Systems,
    ViewAllSystems,
}

impl CurrentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentLevel::Realities => "realities",
            CurrentLevel::Galaxies => "galaxies",
            CurrentLevel::Regions => "regions",
            CurrentLevel::Systems => "systems",
            CurrentLevel::ViewAllSystems => "viewAllSystems",
        }
    }

    /// Systems and view-all both render a system list.
    pub fn lists_systems(&self) -> bool {
        matches!(self, CurrentLevel::Systems | CurrentLevel::ViewAllSystems)
    }
}

impl fmt::Display for CurrentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ascent targets for `Navigator::go_to_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLevel {
    Root,
    Reality,
    Galaxy,
    ViewAll,
}

impl FromStr for NavLevel {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(NavLevel::Root),
            "reality" => Ok(NavLevel::Reality),
            "galaxy" => Ok(NavLevel::Galaxy),
            "viewall" | "view_all" | "view-all" => Ok(NavLevel::ViewAll),
            _ => Err(NavError::UnknownLevel(s.to_string())),
        }
    }
}

// ============================================================================
// STATE
// ============================================================================

/// Drill-down position. Invariant: never `region.is_some() && view_all_systems`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyState {
    pub reality: Option<String>,
    pub galaxy: Option<String>,
    pub region: Option<Region>,
    pub view_all_systems: bool,
}

impl HierarchyState {
    pub fn current_level(&self) -> CurrentLevel {
        if self.view_all_systems {
            CurrentLevel::ViewAllSystems
        } else if self.region.is_some() {
            CurrentLevel::Systems
        } else if self.galaxy.is_some() {
            CurrentLevel::Regions
        } else if self.reality.is_some() {
            CurrentLevel::Galaxies
        } else {
            CurrentLevel::Realities
        }
    }

    pub fn is_root(&self) -> bool {
        *self == HierarchyState::default()
    }
}

// ============================================================================
// NAVIGATOR
// ============================================================================

/// Owns `HierarchyState` and keeps the URL mirror in step with it.
///
/// Every mutating call returns `true` when the state actually changed; a
/// change queues exactly one URL update for `take_url_update`.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: HierarchyState,
    root_label: String,
    url_dirty: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: HierarchyState::default(),
            root_label: SYSTEMS_ROOT_LABEL.to_string(),
            url_dirty: false,
        }
    }

    /// Seed from a query string. This is the only time the URL is read.
    pub fn from_query(query: &str) -> Self {
        let state = url_state::from_query(query);
        debug!(level = %state.current_level(), "navigator seeded from url");
        Self {
            state,
            ..Self::new()
        }
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn state(&self) -> &HierarchyState {
        &self.state
    }

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn current_level(&self) -> CurrentLevel {
        self.state.current_level()
    }

    /// An empty name counts as no selection, matching what `from_query` reads back.
    pub fn select_reality(&mut self, reality: Option<String>) -> bool {
        self.apply(HierarchyState {
            reality: non_empty(reality),
            ..HierarchyState::default()
        })
    }

    /// Reality should already be set; if not, the galaxy list is simply empty.
    pub fn select_galaxy(&mut self, galaxy: Option<String>) -> bool {
        self.apply(HierarchyState {
            reality: self.state.reality.clone(),
            galaxy: non_empty(galaxy),
            region: None,
            view_all_systems: false,
        })
    }

    pub fn select_region(&mut self, region: Region) -> bool {
        self.apply(HierarchyState {
            region: Some(region),
            view_all_systems: false,
            ..self.state.clone()
        })
    }

    pub fn enter_view_all_systems(&mut self) -> bool {
        self.apply(HierarchyState {
            region: None,
            view_all_systems: true,
            ..self.state.clone()
        })
    }

    /// Ascend: clear everything strictly deeper than `level`.
    pub fn go_to_level(&mut self, level: NavLevel) -> bool {
        let s = &self.state;
        let next = match level {
            NavLevel::Root => HierarchyState::default(),
            NavLevel::Reality => HierarchyState {
                reality: s.reality.clone(),
                ..HierarchyState::default()
            },
            NavLevel::Galaxy => HierarchyState {
                reality: s.reality.clone(),
                galaxy: s.galaxy.clone(),
                ..HierarchyState::default()
            },
            NavLevel::ViewAll => HierarchyState {
                view_all_systems: false,
                ..s.clone()
            },
        };
        self.apply(next)
    }

    pub fn breadcrumbs(&self, tag: &CommunityTag) -> Vec<Breadcrumb> {
        breadcrumb::derive(&self.state, &self.root_label, tag)
    }

    /// Current state rendered as a query string (no leading `?`).
    pub fn query_string(&self) -> String {
        url_state::to_query_string(&self.state)
    }

    /// Pending URL write, if the state changed since the last call.
    pub fn take_url_update(&mut self) -> Option<String> {
        if std::mem::take(&mut self.url_dirty) {
            Some(self.query_string())
        } else {
            None
        }
    }

    fn apply(&mut self, next: HierarchyState) -> bool {
        debug_assert!(!(next.region.is_some() && next.view_all_systems));
        if next == self.state {
            return false;
        }
        let from = self.state.current_level();
        self.state = next;
        self.url_dirty = true;
        debug!(from = %from, to = %self.state.current_level(), "hierarchy transition");
        true
    }
}

fn non_empty(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drilled() -> Navigator {
        let mut nav = Navigator::new();
        nav.select_reality(Some("Normal".into()));
        nav.select_galaxy(Some("Euclid".into()));
        nav.select_region(Region::new(5, -3, 12));
        nav
    }

    #[test]
    fn drill_down_levels_in_order() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current_level(), CurrentLevel::Realities);

        nav.select_reality(Some("Normal".into()));
        assert_eq!(nav.current_level(), CurrentLevel::Galaxies);

        nav.select_galaxy(Some("Euclid".into()));
        assert_eq!(nav.current_level(), CurrentLevel::Regions);

        nav.select_region(Region::new(1, 2, 3));
        assert_eq!(nav.current_level(), CurrentLevel::Systems);
    }

    #[test]
    fn select_reality_resets_deeper_levels() {
        let mut nav = drilled();
        nav.select_reality(Some("Permadeath".into()));

        let s = nav.state();
        assert_eq!(s.reality.as_deref(), Some("Permadeath"));
        assert!(s.galaxy.is_none());
        assert!(s.region.is_none());
        assert!(!s.view_all_systems);
    }

    #[test]
    fn select_reality_none_returns_to_root() {
        let mut nav = drilled();
        nav.select_reality(None);
        assert!(nav.state().is_root());
    }

    #[test]
    fn select_galaxy_resets_region_and_view_all() {
        let mut nav = drilled();
        nav.select_galaxy(Some("Hilbert Dimension".into()));
        assert!(nav.state().region.is_none());

        nav.enter_view_all_systems();
        nav.select_galaxy(Some("Calypso".into()));
        assert!(!nav.state().view_all_systems);
        assert_eq!(nav.current_level(), CurrentLevel::Regions);
    }

    #[test]
    fn empty_names_count_as_unselected() {
        let mut nav = Navigator::new();
        assert!(!nav.select_reality(Some(String::new())));
        assert!(nav.state().is_root());

        nav.select_reality(Some("Normal".into()));
        nav.select_galaxy(Some(String::new()));
        assert_eq!(nav.current_level(), CurrentLevel::Galaxies);
        assert_eq!(Navigator::from_query(&nav.query_string()).state(), nav.state());
    }

    #[test]
    fn select_galaxy_without_reality_is_allowed() {
        let mut nav = Navigator::new();
        nav.select_galaxy(Some("Euclid".into()));
        assert_eq!(nav.current_level(), CurrentLevel::Regions);
        assert!(nav.state().reality.is_none());
    }

    #[test]
    fn region_selection_wins_over_view_all() {
        let mut nav = Navigator::new();
        nav.select_reality(Some("Normal".into()));
        nav.select_galaxy(Some("Euclid".into()));
        nav.enter_view_all_systems();
        assert_eq!(nav.current_level(), CurrentLevel::ViewAllSystems);

        nav.select_region(Region::new(7, 8, 9));
        assert!(!nav.state().view_all_systems);
        assert_eq!(nav.state().region, Some(Region::new(7, 8, 9)));
    }

    #[test]
    fn view_all_clears_region() {
        let mut nav = drilled();
        nav.enter_view_all_systems();
        assert!(nav.state().region.is_none());
        assert!(nav.state().view_all_systems);
    }

    #[test]
    fn go_to_level_root_clears_everything() {
        let mut nav = drilled();
        nav.go_to_level(NavLevel::Root);
        assert_eq!(*nav.state(), HierarchyState::default());
    }

    #[test]
    fn go_to_level_reality_and_galaxy() {
        let mut nav = drilled();
        nav.go_to_level(NavLevel::Galaxy);
        assert_eq!(nav.current_level(), CurrentLevel::Regions);
        assert_eq!(nav.state().galaxy.as_deref(), Some("Euclid"));

        nav.enter_view_all_systems();
        nav.go_to_level(NavLevel::Reality);
        assert_eq!(nav.current_level(), CurrentLevel::Galaxies);
        assert!(!nav.state().view_all_systems);
    }

    #[test]
    fn go_to_level_view_all_returns_to_regions() {
        let mut nav = Navigator::new();
        nav.select_reality(Some("Normal".into()));
        nav.select_galaxy(Some("Euclid".into()));
        nav.enter_view_all_systems();

        nav.go_to_level(NavLevel::ViewAll);
        assert_eq!(nav.current_level(), CurrentLevel::Regions);
        assert_eq!(nav.state().galaxy.as_deref(), Some("Euclid"));
    }

    #[test]
    fn url_update_queued_once_per_change() {
        let mut nav = Navigator::new();
        assert!(nav.take_url_update().is_none());

        assert!(nav.select_reality(Some("Normal".into())));
        assert_eq!(nav.take_url_update().as_deref(), Some("reality=Normal"));
        assert!(nav.take_url_update().is_none());

        // Re-selecting the same value is not a change.
        assert!(!nav.select_reality(Some("Normal".into())));
        assert!(nav.take_url_update().is_none());
    }

    #[test]
    fn seeding_does_not_queue_url_write() {
        let mut nav = Navigator::from_query("reality=Normal&galaxy=Euclid");
        assert_eq!(nav.current_level(), CurrentLevel::Regions);
        assert!(nav.take_url_update().is_none());
    }

    #[test]
    fn region_label_fallbacks() {
        let r = Region::new(1, -2, 3);
        assert_eq!(r.label(), "Region [1, -2, 3]");

        let r = r.with_display_name("Ahlepsi Cluster");
        assert_eq!(r.label(), "Ahlepsi Cluster");

        let r = r.with_custom_name("Haven Hub");
        assert_eq!(r.label(), "Haven Hub");
    }

    #[test]
    fn region_parse_coords() {
        assert_eq!(Region::parse_coords("5,-3,12").unwrap(), Region::new(5, -3, 12));
        assert_eq!(Region::parse_coords(" 1 , 2 , 3 ").unwrap(), Region::new(1, 2, 3));
        assert!(Region::parse_coords("5,-3").is_err());
        assert!(Region::parse_coords("a,b,c").is_err());
    }

    #[test]
    fn nav_level_parse() {
        assert_eq!("root".parse::<NavLevel>().unwrap(), NavLevel::Root);
        assert_eq!("viewAll".parse::<NavLevel>().unwrap(), NavLevel::ViewAll);
        assert!("planet".parse::<NavLevel>().is_err());
    }
}

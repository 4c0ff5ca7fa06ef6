//! Systems / Discoveries page controller.
//!
//! Composes the hierarchy navigator, filter state, pagination, bulk selection
//! and the debounced search controller. The page fetches on mount and on
//! every hierarchy or filter change; fetch failures degrade to empty lists.

use crate::error::BrowserError;
use crate::search::{SearchController, SearchSettings, SearchState};
use crate::session::Session;
use haven_client::HavenApi;
use haven_nav::{
    AdvancedFilters, Breadcrumb, BulkSelection, CommunityTag, CurrentLevel, Feature,
    FilterState, HierarchyState, ListRequest, NavLevel, Navigator, Pagination, Region,
    DISCOVERIES_ROOT_LABEL, SYSTEMS_ROOT_LABEL,
};
use haven_types::{DiscordTag, GalaxySummary, RealitySummary, RegionSummary, SystemSummary};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Systems,
    Discoveries,
}

impl BrowserKind {
    pub fn root_label(&self) -> &'static str {
        match self {
            BrowserKind::Systems => SYSTEMS_ROOT_LABEL,
            BrowserKind::Discoveries => DISCOVERIES_ROOT_LABEL,
        }
    }

    fn feature(&self) -> Feature {
        match self {
            BrowserKind::Systems => Feature::BrowseSystems,
            BrowserKind::Discoveries => Feature::BrowseDiscoveries,
        }
    }
}

/// Rows for whichever level is current.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "level", content = "rows", rename_all = "snake_case")]
pub enum Listing {
    Realities(Vec<RealitySummary>),
    Galaxies(Vec<GalaxySummary>),
    Regions(Vec<RegionSummary>),
    Systems(Vec<SystemSummary>),
}

impl Listing {
    pub fn empty_for(level: CurrentLevel) -> Self {
        match level {
            CurrentLevel::Realities => Listing::Realities(Vec::new()),
            CurrentLevel::Galaxies => Listing::Galaxies(Vec::new()),
            CurrentLevel::Regions => Listing::Regions(Vec::new()),
            CurrentLevel::Systems | CurrentLevel::ViewAllSystems => Listing::Systems(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Realities(rows) => rows.len(),
            Listing::Galaxies(rows) => rows.len(),
            Listing::Regions(rows) => rows.len(),
            Listing::Systems(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct SystemsBrowser {
    kind: BrowserKind,
    api: Arc<dyn HavenApi>,
    session: Session,
    navigator: Navigator,
    filters: FilterState,
    pagination: Pagination,
    selection: BulkSelection<String>,
    search: SearchController,
    tags: Vec<DiscordTag>,
}

impl SystemsBrowser {
    /// Create the page, seeding the drill-down position from `query`.
    pub fn mount(
        kind: BrowserKind,
        api: Arc<dyn HavenApi>,
        session: Session,
        settings: SearchSettings,
        query: &str,
    ) -> Result<Self, BrowserError> {
        require(&session, kind.feature())?;

        let navigator = Navigator::from_query(query).with_root_label(kind.root_label());
        let filters = FilterState {
            community_tag: session.default_community_tag(),
            advanced: AdvancedFilters::new(),
        };
        info!(
            kind = ?kind,
            role = %session.role,
            level = %navigator.current_level(),
            "browser mounted"
        );

        Ok(Self {
            kind,
            search: SearchController::new(Arc::clone(&api), settings),
            api,
            session,
            navigator,
            filters,
            pagination: Pagination::default(),
            selection: BulkSelection::new(),
            tags: Vec::new(),
        })
    }

    pub fn kind(&self) -> BrowserKind {
        self.kind
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &HierarchyState {
        self.navigator.state()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn tags(&self) -> &[DiscordTag] {
        &self.tags
    }

    pub fn current_level(&self) -> CurrentLevel {
        self.navigator.current_level()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.navigator.breadcrumbs(&self.filters.community_tag)
    }

    pub fn list_request(&self) -> ListRequest {
        ListRequest::new(self.navigator.state(), &self.filters)
    }

    // ── URL mirror ─────────────────────────────────────────────

    pub fn query_string(&self) -> String {
        self.navigator.query_string()
    }

    pub fn take_url_update(&mut self) -> Option<String> {
        self.navigator.take_url_update()
    }

    /// Write the current position onto `url`, if it changed since last sync.
    pub fn sync_url(&mut self, url: &mut Url) -> bool {
        if self.navigator.take_url_update().is_none() {
            return false;
        }
        haven_nav::url_state::apply_to_url(self.navigator.state(), url);
        true
    }

    // ── Hierarchy ──────────────────────────────────────────────

    pub fn select_reality(&mut self, reality: Option<String>) -> bool {
        let changed = self.navigator.select_reality(reality);
        self.after_hierarchy_change(changed)
    }

    pub fn select_galaxy(&mut self, galaxy: Option<String>) -> bool {
        let changed = self.navigator.select_galaxy(galaxy);
        self.after_hierarchy_change(changed)
    }

    pub fn select_region(&mut self, region: Region) -> bool {
        let changed = self.navigator.select_region(region);
        self.after_hierarchy_change(changed)
    }

    pub fn select_region_row(&mut self, row: &RegionSummary) -> bool {
        self.select_region(Region::from(row))
    }

    pub fn enter_view_all_systems(&mut self) -> bool {
        let changed = self.navigator.enter_view_all_systems();
        self.after_hierarchy_change(changed)
    }

    pub fn go_to_level(&mut self, level: NavLevel) -> bool {
        let changed = self.navigator.go_to_level(level);
        self.after_hierarchy_change(changed)
    }

    fn after_hierarchy_change(&mut self, changed: bool) -> bool {
        if changed {
            self.pagination.reset();
            self.selection.clear();
        }
        changed
    }

    // ── Filters ────────────────────────────────────────────────

    pub fn set_community_tag(&mut self, tag: CommunityTag) -> bool {
        if self.filters.community_tag == tag {
            return false;
        }
        debug!(tag = %tag, "community filter changed");
        self.filters.community_tag = tag;
        self.pagination.reset();
        true
    }

    pub fn set_advanced_filters(&mut self, advanced: AdvancedFilters) -> bool {
        if self.filters.advanced == advanced {
            return false;
        }
        self.filters.advanced = advanced;
        self.pagination.reset();
        true
    }

    // ── Fetching ───────────────────────────────────────────────

    pub async fn load_tags(&mut self) -> &[DiscordTag] {
        self.tags = match self.api.discord_tags().await {
            Ok(tags) => tags,
            Err(e) => {
                warn!(error = %e, "failed to load community tags");
                Vec::new()
            }
        };
        &self.tags
    }

    /// Fetch the listing for the current level with the current filters.
    pub async fn load_current_level(&mut self) -> Listing {
        let req = self.list_request();
        let level = req.level;
        debug!(level = %level, "loading listing");

        let result = match level {
            CurrentLevel::Realities => self.api.list_realities(&req).await.map(Listing::Realities),
            CurrentLevel::Galaxies => self.api.list_galaxies(&req).await.map(Listing::Galaxies),
            CurrentLevel::Regions => self.api.list_regions(&req).await.map(Listing::Regions),
            CurrentLevel::Systems | CurrentLevel::ViewAllSystems => {
                self.api.list_systems(&req).await.map(Listing::Systems)
            }
        };

        let listing = match result {
            Ok(listing) => listing,
            Err(e) => {
                warn!(level = %level, error = %e, "listing failed; showing empty view");
                Listing::empty_for(level)
            }
        };

        if let Listing::Systems(rows) = &listing {
            self.pagination.set_total(rows.len());
        }
        listing
    }

    // ── Pagination ─────────────────────────────────────────────

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn page_of_systems<'a>(&self, rows: &'a [SystemSummary]) -> &'a [SystemSummary] {
        self.pagination.slice(rows)
    }

    // ── Bulk selection ─────────────────────────────────────────

    pub fn toggle_selection(&mut self, id: &str) -> Result<bool, BrowserError> {
        require(&self.session, Feature::BulkActions)?;
        Ok(self.selection.toggle(id.to_string()))
    }

    /// Header checkbox over the visible page of `rows`.
    pub fn toggle_select_page(&mut self, rows: &[SystemSummary]) -> Result<(), BrowserError> {
        require(&self.session, Feature::BulkActions)?;
        let ids: Vec<String> = self.page_of_systems(rows).iter().map(|s| s.id.clone()).collect();
        self.selection.toggle_all(&ids);
        Ok(())
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.selected()
    }

    // ── Search ─────────────────────────────────────────────────

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn search(&mut self) -> &mut SearchController {
        &mut self.search
    }
}

fn require(session: &Session, feature: Feature) -> Result<(), BrowserError> {
    if session.allows(feature) {
        Ok(())
    } else {
        Err(BrowserError::NotPermitted {
            role: session.role,
            feature,
        })
    }
}

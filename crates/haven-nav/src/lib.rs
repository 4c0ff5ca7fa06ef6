//! Haven Navigation Engine
//!
//! Pure, synchronous state for the catalog browser. Nothing in this crate
//! performs I/O; callers feed it user events and read back derived views.
//!
//! - `hierarchy`: Reality → Galaxy → Region → Systems drill-down state machine
//! - `breadcrumb`: trail derivation from hierarchy state
//! - `url_state`: one-way query-string mirror (read once at mount)
//! - `filters`: community tag + advanced filters, composed into a `ListRequest`
//! - `pagination`: client-side page math for list views
//! - `selection`: bulk-selection toggling
//! - `role`: capability set per role
//!
//! ## Example
//!
//! ```
//! use haven_nav::{CommunityTag, CurrentLevel, Navigator};
//!
//! let mut nav = Navigator::from_query("?reality=Normal&galaxy=Euclid");
//! assert_eq!(nav.current_level(), CurrentLevel::Regions);
//!
//! nav.enter_view_all_systems();
//! let crumbs = nav.breadcrumbs(&CommunityTag::Tag("Haven".into()));
//! assert_eq!(crumbs.last().unwrap().label, "All Haven Systems");
//! ```

pub mod breadcrumb;
pub mod error;
pub mod filters;
pub mod hierarchy;
pub mod pagination;
pub mod role;
pub mod selection;
pub mod url_state;

pub use breadcrumb::Breadcrumb;
pub use error::NavError;
pub use filters::{AdvancedFilters, CommunityTag, FilterState, ListRequest};
pub use hierarchy::{CurrentLevel, HierarchyState, NavLevel, Navigator, Region};
pub use pagination::Pagination;
pub use role::{Feature, Role};
pub use selection::BulkSelection;

/// Root breadcrumb label for the systems browser.
pub const SYSTEMS_ROOT_LABEL: &str = "Systems";

/// Root breadcrumb label for the discovery browser.
pub const DISCOVERIES_ROOT_LABEL: &str = "Discoveries";

/// Rows per page when a list view does not say otherwise.
pub const DEFAULT_PER_PAGE: usize = 50;

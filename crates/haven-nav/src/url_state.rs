//! Query-string mirror of `HierarchyState`.
//!
//! Owned keys: `reality`, `galaxy`, `rx`, `ry`, `rz`, `rname`. The URL is
//! parsed once at mount; after that it is only ever written, never read back.

use crate::hierarchy::{HierarchyState, Region};
use url::form_urlencoded;
use url::Url;

pub const OWNED_KEYS: [&str; 6] = ["reality", "galaxy", "rx", "ry", "rz", "rname"];

/// Non-null fields as ordered key/value pairs.
pub fn to_query_pairs(state: &HierarchyState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Some(reality) = &state.reality {
        pairs.push(("reality".to_string(), reality.clone()));
    }
    if let Some(galaxy) = &state.galaxy {
        pairs.push(("galaxy".to_string(), galaxy.clone()));
    }
    if let Some(region) = &state.region {
        pairs.push(("rx".to_string(), region.region_x.to_string()));
        pairs.push(("ry".to_string(), region.region_y.to_string()));
        pairs.push(("rz".to_string(), region.region_z.to_string()));
        if let Some(name) = region.name() {
            pairs.push(("rname".to_string(), name.to_string()));
        }
    }
    pairs
}

/// Form-urlencoded query, without the leading `?`.
pub fn to_query_string(state: &HierarchyState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(to_query_pairs(state))
        .finish()
}

/// Rebuild state from a query string. Anything malformed is treated as absent;
/// a region needs all three of `rx`, `ry`, `rz` to parse as integers.
pub fn from_query(query: &str) -> HierarchyState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut reality = None;
    let mut galaxy = None;
    let (mut rx, mut ry, mut rz) = (None, None, None);
    let mut rname = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        if value.is_empty() {
            continue;
        }
        match &*key {
            "reality" => reality = Some(value),
            "galaxy" => galaxy = Some(value),
            "rx" => rx = Some(value),
            "ry" => ry = Some(value),
            "rz" => rz = Some(value),
            "rname" => rname = Some(value),
            _ => {}
        }
    }

    let region = match (parse_coord(rx), parse_coord(ry), parse_coord(rz)) {
        (Some(x), Some(y), Some(z)) => {
            let region = Region::new(x, y, z);
            Some(match rname {
                Some(name) => region.with_display_name(name),
                None => region,
            })
        }
        _ => None,
    };

    HierarchyState {
        reality,
        galaxy,
        region,
        view_all_systems: false,
    }
}

fn parse_coord(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Rewrite the owned keys on `url`, keeping any foreign parameters.
pub fn apply_to_url(state: &HierarchyState, url: &mut Url) {
    let foreign: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !OWNED_KEYS.contains(&&**k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let owned = to_query_pairs(state);
    if foreign.is_empty() && owned.is_empty() {
        url.set_query(None);
        return;
    }

    url.query_pairs_mut()
        .clear()
        .extend_pairs(foreign)
        .extend_pairs(owned);
}

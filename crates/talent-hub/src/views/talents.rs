use serde::Deserialize;

use super::{search_matches, Filter, ListView, Viewer};
use crate::catalog::Catalog;
use crate::domain::{Availability, TalentProfile};

const EMPTY: &str = "No talents found";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TalentQuery {
    pub search: String,
    pub availability: Filter<Availability>,
}

/// The talent pool is the same for every role; search covers name, title,
/// and skill names.
pub fn talent_profiles<'a>(
    catalog: &'a dyn Catalog,
    _viewer: Viewer<'_>,
    query: &TalentQuery,
) -> ListView<&'a TalentProfile> {
    let rows = catalog
        .talent_profiles()
        .iter()
        .filter(|talent| {
            let fields = [talent.name.as_str(), talent.title.as_str()]
                .into_iter()
                .chain(talent.skills.iter().map(|skill| skill.name.as_str()));
            search_matches(&query.search, fields)
        })
        .filter(|talent| query.availability.matches(talent.availability))
        .collect();
    ListView::new(rows, EMPTY)
}

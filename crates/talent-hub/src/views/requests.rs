use serde::Deserialize;

use super::{search_matches, Filter, ListView, Viewer};
use crate::catalog::Catalog;
use crate::domain::{RequestStatus, TalentRequest, UserRole};

const EMPTY: &str = "No talent requests found";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestQuery {
    pub search: String,
    pub status: Filter<RequestStatus>,
}

/// Clients only see their own requests; search covers title and client name.
pub fn talent_requests<'a>(
    catalog: &'a dyn Catalog,
    viewer: Viewer<'_>,
    query: &RequestQuery,
) -> ListView<&'a TalentRequest> {
    let owner = viewer.id_as(UserRole::Client);
    let rows = catalog
        .talent_requests()
        .iter()
        .filter(|request| owner.map_or(true, |id| request.client_id == id))
        .filter(|request| {
            search_matches(
                &query.search,
                [request.title.as_str(), request.client_name.as_str()],
            )
        })
        .filter(|request| query.status.matches(request.status))
        .collect();
    ListView::new(rows, EMPTY)
}

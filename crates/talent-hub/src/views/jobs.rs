use serde::Deserialize;

use super::{search_matches, Filter, ListView, Viewer};
use crate::catalog::Catalog;
use crate::domain::{Choice, JobOffer, JobStatus, UserRole};

const EMPTY: &str = "No job offers found";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobQuery {
    pub search: String,
    pub status: Filter<JobStatus>,
}

/// Clients only see their own offers; search covers title and role.
pub fn job_offers<'a>(
    catalog: &'a dyn Catalog,
    viewer: Viewer<'_>,
    query: &JobQuery,
) -> ListView<&'a JobOffer> {
    let owner = viewer.id_as(UserRole::Client);
    let rows = catalog
        .job_offers()
        .iter()
        .filter(|job| owner.map_or(true, |id| job.client_id == id))
        .filter(|job| search_matches(&query.search, [job.title.as_str(), job.role.slug()]))
        .filter(|job| query.status.matches(job.status))
        .collect();
    ListView::new(rows, EMPTY)
}

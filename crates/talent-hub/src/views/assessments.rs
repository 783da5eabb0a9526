use serde::Deserialize;

use super::{search_matches, Filter, ListView, Viewer};
use crate::catalog::Catalog;
use crate::domain::{Assessment, AssessmentStatus, AssessmentType, UserRole};

const EMPTY: &str = "No assessments found";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentQuery {
    pub search: String,
    #[serde(rename = "type")]
    pub kind: Filter<AssessmentType>,
    pub status: Filter<AssessmentStatus>,
}

/// Talents only see their own assessments; search covers the title.
pub fn assessments<'a>(
    catalog: &'a dyn Catalog,
    viewer: Viewer<'_>,
    query: &AssessmentQuery,
) -> ListView<&'a Assessment> {
    let owner = viewer.id_as(UserRole::Talent);
    let rows = catalog
        .assessments()
        .iter()
        .filter(|assessment| owner.map_or(true, |id| assessment.talent_id == id))
        .filter(|assessment| search_matches(&query.search, [assessment.title.as_str()]))
        .filter(|assessment| query.kind.matches(assessment.kind))
        .filter(|assessment| query.status.matches(assessment.status))
        .collect();
    ListView::new(rows, EMPTY)
}

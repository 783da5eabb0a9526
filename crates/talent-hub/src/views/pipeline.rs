use serde::{Deserialize, Serialize};

use super::{search_matches, ListView, Viewer};
use crate::catalog::Catalog;
use crate::display::StatusBadge;
use crate::domain::{Application, PipelineStage, UserRole};

const EMPTY: &str = "No applications in the pipeline";
const EMPTY_COLUMN: &str = "No applications";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineQuery {
    pub search: String,
}

/// Talents only see their own applications; search covers job title and
/// talent name.
pub fn pipeline<'a>(
    catalog: &'a dyn Catalog,
    viewer: Viewer<'_>,
    query: &PipelineQuery,
) -> ListView<&'a Application> {
    let owner = viewer.id_as(UserRole::Talent);
    let rows = catalog
        .applications()
        .iter()
        .filter(|application| owner.map_or(true, |id| application.talent_id == id))
        .filter(|application| {
            search_matches(
                &query.search,
                [application.job_title.as_str(), application.talent_name.as_str()],
            )
        })
        .collect();
    ListView::new(rows, EMPTY)
}

/// One kanban column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageColumn<'a> {
    pub stage: PipelineStage,
    pub label: &'static str,
    pub count: usize,
    pub applications: Vec<&'a Application>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// Read-only kanban: the seven stages in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineBoard<'a> {
    pub columns: Vec<StageColumn<'a>>,
}

impl<'a> PipelineBoard<'a> {
    /// Partition `applications` by stage. Input order is kept inside a column.
    pub fn group<I>(applications: I) -> Self
    where
        I: IntoIterator<Item = &'a Application>,
    {
        let mut buckets: [Vec<&'a Application>; 7] = Default::default();
        for application in applications {
            buckets[application.stage.index()].push(application);
        }

        let columns = PipelineStage::ordered()
            .into_iter()
            .zip(buckets)
            .map(|(stage, applications)| StageColumn {
                stage,
                label: stage.badge().label,
                count: applications.len(),
                empty_message: applications.is_empty().then_some(EMPTY_COLUMN),
                applications,
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, stage: PipelineStage) -> &StageColumn<'a> {
        &self.columns[stage.index()]
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|column| column.count).sum()
    }
}

/// Kanban board over the same rows [`pipeline`] returns.
pub fn pipeline_board<'a>(
    catalog: &'a dyn Catalog,
    viewer: Viewer<'_>,
    query: &PipelineQuery,
) -> PipelineBoard<'a> {
    PipelineBoard::group(pipeline(catalog, viewer, query).rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn talent_sees_only_own_applications() {
        let catalog = StaticCatalog::seeded();
        let talent = catalog.user_for(UserRole::Talent);
        let view = pipeline(&catalog, Viewer::from(talent), &PipelineQuery::default());
        assert_eq!(
            view.rows.iter().map(|app| app.id.as_str()).collect::<Vec<_>>(),
            vec!["app-1", "app-6", "app-8"]
        );
    }

    #[test]
    fn search_covers_talent_name() {
        let catalog = StaticCatalog::seeded();
        let query = PipelineQuery {
            search: "james".to_string(),
        };
        assert_eq!(pipeline(&catalog, Viewer::anonymous(), &query).len(), 2);

        let query = PipelineQuery {
            search: "nobody".to_string(),
        };
        let view = pipeline(&catalog, Viewer::anonymous(), &query);
        assert_eq!(view.empty_message, Some("No applications in the pipeline"));
    }

    #[test]
    fn board_columns_follow_pipeline_order_with_labels() {
        let catalog = StaticCatalog::seeded();
        let board = pipeline_board(&catalog, Viewer::anonymous(), &PipelineQuery::default());
        let labels: Vec<_> = board.columns.iter().map(|column| column.label).collect();
        assert_eq!(
            labels,
            vec!["Applied", "Screening", "Assessed", "Interview", "Results", "Accepted", "Rejected"]
        );
        assert_eq!(board.total(), catalog.applications().len());
        assert_eq!(
            board
                .column(PipelineStage::Applied)
                .applications
                .iter()
                .map(|app| app.id.as_str())
                .collect::<Vec<_>>(),
            vec!["app-6", "app-9"]
        );
    }

    #[test]
    fn empty_columns_carry_a_message() {
        let board = PipelineBoard::group(std::iter::empty());
        assert_eq!(board.total(), 0);
        assert!(board
            .columns
            .iter()
            .all(|column| column.empty_message == Some("No applications")));
    }
}

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use talent_hub::catalog::{Catalog, StaticCatalog};
use talent_hub::config::SimulationConfig;
use talent_hub::domain::CodeAssessment;
use talent_hub::integrations::{
    SimulatedExtraction, SimulatedProvisioner, SimulatedScheduler, SimulatedSubmission,
};
use talent_hub::session::Session;

/// Shared by every handler. The session is application-scoped: one signed-in
/// user per process, reset on restart.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<StaticCatalog>,
    pub(crate) session: Arc<Mutex<Session>>,
    pub(crate) simulation: SimulationConfig,
    pub(crate) extraction: Arc<SimulatedExtraction>,
    pub(crate) submission: Arc<SimulatedSubmission>,
    pub(crate) scheduler: Arc<SimulatedScheduler>,
    pub(crate) provisioner: Arc<SimulatedProvisioner>,
    pub(crate) code_assessments: Arc<Mutex<Vec<CodeAssessment>>>,
}

impl AppState {
    pub(crate) fn new(
        readiness: Arc<AtomicBool>,
        metrics: PrometheusHandle,
        simulation: SimulationConfig,
    ) -> Self {
        let catalog = StaticCatalog::seeded();
        let session = Session::from_catalog(&catalog);
        let code_assessments = catalog.code_assessments().to_vec();

        Self {
            readiness,
            metrics: Arc::new(metrics),
            session: Arc::new(Mutex::new(session)),
            code_assessments: Arc::new(Mutex::new(code_assessments)),
            catalog: Arc::new(catalog),
            simulation,
            extraction: Arc::new(SimulatedExtraction::new(simulation.extraction_tick)),
            submission: Arc::new(SimulatedSubmission::new()),
            scheduler: Arc::new(SimulatedScheduler::new()),
            provisioner: Arc::new(SimulatedProvisioner::new()),
        }
    }

    /// Handlers never panic while holding the lock, so a poisoned session is
    /// still consistent.
    pub(crate) fn session(&self) -> MutexGuard<'_, Session> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn code_assessments(&self) -> MutexGuard<'_, Vec<CodeAssessment>> {
        self.code_assessments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

//! Analysis flow: validate input, show the loading page, wait, then match.
//!
//! The wait is an injected [`AnalysisDelay`], so tests can run with
//! [`NoDelay`] while the app uses a [`FixedDelay`] from config.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use robodoc_core::catalog::CatalogError;
use robodoc_core::{AppConfig, Catalog, Matcher};

use crate::card::MedicineCard;
use crate::narrative;
use crate::session::ChatSession;

/// Analysis errors.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Please enter your primary symptoms or diagnosis first.")]
    MissingInput,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Validated form input. History and allergies are `None` when blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub symptoms: String,
    pub history: Option<String>,
    pub allergies: Option<String>,
}

impl AnalysisRequest {
    /// Trim the three form fields; symptoms must not be blank.
    pub fn new(symptoms: &str, history: &str, allergies: &str) -> AnalysisResult<Self> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(AnalysisError::MissingInput);
        }

        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Ok(Self {
            symptoms: symptoms.to_string(),
            history: non_blank(history),
            allergies: non_blank(allergies),
        })
    }
}

/// Deferred pause between submitting and showing results.
#[async_trait]
pub trait AnalysisDelay: Send + Sync {
    async fn wait(&self);
}

/// Sleep for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

#[async_trait]
impl AnalysisDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Resolve immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl AnalysisDelay for NoDelay {
    async fn wait(&self) {}
}

/// Everything the summary page renders for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub summary_condition: String,
    /// Assistant messages, in display order
    pub messages: Vec<String>,
    pub cards: Vec<MedicineCard>,
    pub safe_count: usize,
    pub unsafe_count: usize,
    pub no_results: bool,
}

impl AnalysisReport {
    /// Export as JSON.
    pub fn to_json(&self) -> AnalysisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs analyses against a fixed catalog.
pub struct Analyzer<D> {
    catalog: Catalog,
    delay: D,
}

impl<D: AnalysisDelay> Analyzer<D> {
    pub fn new(catalog: Catalog, delay: D) -> Self {
        Self { catalog, delay }
    }

    /// Build the report for a request, without any delay.
    pub fn report(&self, request: &AnalysisRequest) -> AnalysisReport {
        let recs = Matcher::new(&self.catalog).recommend(
            &request.symptoms,
            request.history.as_deref(),
            request.allergies.as_deref(),
        );

        let messages = narrative::build_narrative(
            &request.symptoms,
            request.history.as_deref(),
            request.allergies.as_deref(),
            &recs,
        );

        AnalysisReport {
            summary_condition: narrative::summary_condition(&request.symptoms),
            messages,
            safe_count: recs.safe_count(),
            unsafe_count: recs.unsafe_count(),
            no_results: recs.is_empty(),
            cards: recs.into_iter().map(MedicineCard::from).collect(),
        }
    }

    /// Full flow: loading page, delay, match, summary page.
    ///
    /// Holding `&mut ChatSession` across the delay means a second analysis
    /// on the same session cannot start until this one finishes.
    pub async fn analyze(
        &self,
        session: &mut ChatSession,
        request: &AnalysisRequest,
    ) -> AnalysisReport {
        session.begin_analysis();
        debug!(session = %session.id, "Analysis started");

        self.delay.wait().await;

        let report = self.report(request);
        session.show_report(&report);

        info!(
            session = %session.id,
            matches = report.cards.len(),
            safe = report.safe_count,
            conflicts = report.unsafe_count,
            "Analysis complete"
        );
        report
    }

    /// Validate raw form input, then run [`Analyzer::analyze`].
    ///
    /// Blank symptoms are rejected before the page changes.
    pub async fn submit(
        &self,
        session: &mut ChatSession,
        symptoms: &str,
        history: &str,
        allergies: &str,
    ) -> AnalysisResult<AnalysisReport> {
        let request = AnalysisRequest::new(symptoms, history, allergies)?;
        Ok(self.analyze(session, &request).await)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Analyzer<FixedDelay> {
    /// Analyzer using the configured catalog and delay.
    pub fn from_config(config: &AppConfig) -> AnalysisResult<Self> {
        Ok(Self::new(
            config.catalog()?,
            FixedDelay::from_millis(config.analysis.delay_ms),
        ))
    }
}

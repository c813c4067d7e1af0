// src/view/aggregator.rs
//! Job-detail view: loads a job, its company and recommendations, and keeps
//! the deadline countdown live while the view is active

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::apply::{self, ApplyError, ApplyHandoff, ApplyOutcome};
use super::model::ViewModel;
use super::recommendations::{enrich_with_companies, select_recommendations};
use super::ticker::{spawn_ticker, tick_once};
use crate::core::{JobsApi, PortalConfig};
use crate::countdown::{Clock, SystemClock, TimeLeft};
use crate::session::CallerIdentity;
use crate::types::{CompanyRecord, JobRecord, RecommendationEntry};

#[derive(Debug, Error)]
pub enum ViewError {
    /// Shown to the user as-is.
    #[error("Failed to fetch job details.")]
    JobFetch { id: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub tick_interval: Duration,
    pub recommendation_limit: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            recommendation_limit: 4,
        }
    }
}

impl From<&PortalConfig> for ViewOptions {
    fn from(config: &PortalConfig) -> Self {
        Self {
            tick_interval: config.tick_interval(),
            recommendation_limit: config.recommendation_limit,
        }
    }
}

/// Primary job plus the company that posted it, when that could be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedJob {
    pub job: JobRecord,
    pub company: Option<CompanyRecord>,
}

#[derive(Clone)]
pub struct JobDetailAggregator {
    api: Arc<dyn JobsApi>,
    clock: Arc<dyn Clock>,
    session: CallerIdentity,
    options: ViewOptions,
}

impl JobDetailAggregator {
    pub fn new(api: Arc<dyn JobsApi>, session: CallerIdentity, options: ViewOptions) -> Self {
        Self {
            api,
            clock: Arc::new(SystemClock),
            session,
            options,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn session(&self) -> &CallerIdentity {
        &self.session
    }

    /// Fetch the job, then its company for native postings. Only the job
    /// fetch can fail.
    pub async fn load_job(&self, id: &str) -> Result<LoadedJob, ViewError> {
        let job = self
            .api
            .fetch_job(id)
            .await
            .map_err(|e| ViewError::JobFetch {
                id: id.to_string(),
                reason: format!("{:#}", e),
            })?;

        let company = match job.company_ref() {
            Some(company_id) => match self.api.fetch_company(company_id).await {
                Ok(company) => Some(company),
                Err(e) => {
                    warn!(
                        "Company {} unavailable for job {}: {:#}",
                        company_id, job.id, e
                    );
                    None
                }
            },
            None => None,
        };

        Ok(LoadedJob { job, company })
    }

    /// Up to `recommendation_limit` open jobs other than `exclude_id`. Only
    /// the sampled entries are enriched with their company.
    pub async fn load_recommendations(&self, exclude_id: &str) -> Result<Vec<RecommendationEntry>> {
        let pool = self.api.fetch_job_pool().await?;
        let pool_size = pool.len();

        let picked = {
            let mut rng = rand::rng();
            select_recommendations(
                pool,
                exclude_id,
                self.clock.now(),
                self.options.recommendation_limit,
                &mut rng,
            )
        };

        info!(
            "Recommending {} of {} pooled jobs for {}",
            picked.len(),
            pool_size,
            exclude_id
        );
        Ok(enrich_with_companies(self.api.as_ref(), picked).await)
    }

    pub fn time_left(&self, job: &JobRecord) -> TimeLeft {
        TimeLeft::until(job.application_deadline, self.clock.now())
    }

    pub fn apply(
        &self,
        job: &JobRecord,
        handoff: &dyn ApplyHandoff,
    ) -> Result<ApplyOutcome, ApplyError> {
        apply::apply(job, &self.session, handoff)
    }

    /// Start the view for `id`: the job and recommendation loads run
    /// concurrently and the countdown ticks until the view is torn down.
    pub fn activate(&self, id: impl Into<String>) -> JobView {
        let id = id.into();
        let (sender, receiver) = watch::channel(ViewModel::loading());
        let state = Arc::new(sender);

        info!("Activating job view for {}", id);

        let primary = {
            let aggregator = self.clone();
            let state = Arc::clone(&state);
            let id = id.clone();
            tokio::spawn(async move {
                match aggregator.load_job(&id).await {
                    Ok(LoadedJob { job, company }) => {
                        let now = aggregator.clock.now();
                        state.send_modify(|vm| vm.show_job(job, company, now));
                    }
                    Err(e) => {
                        let ViewError::JobFetch { id, reason } = &e;
                        warn!("Job {} could not be loaded: {}", id, reason);
                        let message = e.to_string();
                        state.send_modify(|vm| vm.show_error(message));
                    }
                }
            })
        };

        let recommendations = {
            let aggregator = self.clone();
            let state = Arc::clone(&state);
            let id = id.clone();
            tokio::spawn(async move {
                let entries = match aggregator.load_recommendations(&id).await {
                    Ok(entries) => entries,
                    Err(e) => {
                        warn!("Failed to fetch recommended jobs: {:#}", e);
                        Vec::new()
                    }
                };
                state.send_modify(|vm| vm.show_recommendations(entries));
            })
        };

        let ticker = spawn_ticker(
            self.options.tick_interval,
            Arc::clone(&self.clock),
            Arc::clone(&state),
        );

        JobView {
            id,
            state,
            receiver,
            clock: Arc::clone(&self.clock),
            session: self.session.clone(),
            tasks: vec![primary, recommendations, ticker],
        }
    }
}

/// Handle to an active job view. Dropping it, or calling
/// [`JobView::deactivate`], cancels every load and the countdown.
///
/// Drop only requests cancellation: a task already running on another worker
/// may still publish one last update. Await [`JobView::deactivate`] when no
/// emission may follow teardown.
pub struct JobView {
    id: String,
    state: Arc<watch::Sender<ViewModel>>,
    receiver: watch::Receiver<ViewModel>,
    clock: Arc<dyn Clock>,
    session: CallerIdentity,
    tasks: Vec<JoinHandle<()>>,
}

impl JobView {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.state.subscribe()
    }

    pub fn current(&self) -> ViewModel {
        self.receiver.borrow().clone()
    }

    /// Wait until the primary load and the recommendation load have both
    /// finished.
    pub async fn settled(&mut self) -> ViewModel {
        let settled = self
            .receiver
            .wait_for(ViewModel::is_settled)
            .await
            .map(|vm| vm.clone());
        settled.unwrap_or_else(|_| self.receiver.borrow().clone())
    }

    /// Refresh the countdown now instead of waiting for the next period.
    pub fn tick(&self) -> bool {
        tick_once(&self.state, self.clock.as_ref())
    }

    pub fn apply(&self, handoff: &dyn ApplyHandoff) -> Result<ApplyOutcome, ApplyError> {
        let vm = self.current();
        let job = vm.job.as_ref().ok_or(ApplyError::NotReady)?;
        apply::apply(job, &self.session, handoff)
    }

    /// Cancel all work and wait for it to stop. The view's channel is closed
    /// once this returns.
    pub async fn deactivate(mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
            let _ = task.await;
        }
        info!("Deactivated job view for {}", self.id);
    }
}

impl Drop for JobView {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

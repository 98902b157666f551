use std::sync::Arc;

use contentops_config::{CorsConfig, JobQueueConfig, ServiceConfig, SessionConfig};
use contentops_jobs::JobQueueHandle;

use crate::middleware::session::{JwtSessionResolver, SessionResolver};
use crate::modules::accounts::service::AccountService;
use crate::modules::catalog::service::CatalogService;
use crate::modules::compose::service::ComposeService;
use crate::modules::listing_quality::service::ListingQualityService;
use crate::modules::reviews::service::ReviewService;
use crate::modules::translations::service::TranslationService;
use crate::modules::workflow::service::WorkflowService;
use crate::upstream::UpstreamServices;

/// Service layer implementations the handlers delegate to.
#[derive(Clone)]
pub struct Services {
    pub accounts: Arc<dyn AccountService>,
    pub catalog: Arc<dyn CatalogService>,
    pub compose: Arc<dyn ComposeService>,
    pub reviews: Arc<dyn ReviewService>,
    pub translations: Arc<dyn TranslationService>,
    pub workflow: Arc<dyn WorkflowService>,
    pub listing_quality: Arc<dyn ListingQualityService>,
}

impl Services {
    /// Every domain served by the same upstream client.
    pub fn upstream(upstream: Arc<UpstreamServices>) -> Self {
        Self {
            accounts: upstream.clone(),
            catalog: upstream.clone(),
            compose: upstream.clone(),
            reviews: upstream.clone(),
            translations: upstream.clone(),
            workflow: upstream.clone(),
            listing_quality: upstream,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session_config: SessionConfig,
    pub cors_config: CorsConfig,
    pub resolver: Arc<dyn SessionResolver>,
    pub services: Services,
    /// Process-wide job queue; constructed on first use.
    pub jobs: JobQueueHandle,
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    let session_config = SessionConfig::from_env();
    let upstream = UpstreamServices::new(&ServiceConfig::from_env())?;

    tracing::info!(base_url = %upstream.base_url(), "Service layer configured");

    Ok(AppState {
        resolver: Arc::new(JwtSessionResolver::new(session_config.clone())),
        session_config,
        cors_config: CorsConfig::from_env(),
        services: Services::upstream(Arc::new(upstream)),
        jobs: JobQueueHandle::postgres(JobQueueConfig::from_env()),
    })
}

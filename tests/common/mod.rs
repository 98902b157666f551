#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use contentops::middleware::session::JwtSessionResolver;
use contentops::modules::accounts::model::{InviteMemberDto, UpdateAccountDto};
use contentops::modules::accounts::service::AccountService;
use contentops::modules::catalog::model::ProductQuery;
use contentops::modules::catalog::service::CatalogService;
use contentops::modules::compose::model::GenerateContentDto;
use contentops::modules::compose::service::ComposeService;
use contentops::modules::listing_quality::model::ScoreListingDto;
use contentops::modules::listing_quality::service::ListingQualityService;
use contentops::modules::reviews::model::AnalyzeReviewsDto;
use contentops::modules::reviews::service::ReviewService;
use contentops::modules::translations::model::TranslatePageDto;
use contentops::modules::translations::service::TranslationService;
use contentops::modules::workflow::model::{
    CompleteItemDto, SavePageWorkflowItemDto, StopAutomationDto,
};
use contentops::modules::workflow::service::WorkflowService;
use contentops::router::init_router;
use contentops::state::{AppState, Services};
use contentops_auth::{Principal, Role, create_session_token};
use contentops_config::{CorsConfig, SessionConfig};
use contentops_core::ServiceError;
use contentops_jobs::{JobError, JobQueue, JobQueueHandle};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ORGANIZATION_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_00000000_0042);
pub const WORKFLOW_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_00000000_0007);
pub const SUGGESTION_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_00000000_0009);

pub const EVERY_ROLE: &[Role] = &Role::ALL;

/// Service layer double recording every operation it is asked to perform.
#[derive(Default)]
pub struct MockServices {
    calls: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl MockServices {
    pub fn failing() -> Self {
        let services = Self::default();
        services.fail.store(true, Ordering::SeqCst);
        services
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond<P: Serialize>(&self, operation: &str, params: P) -> Result<Value, ServiceError> {
        self.calls.lock().unwrap().push(operation.to_string());

        if self.fail.load(Ordering::SeqCst) {
            return Err(ServiceError::Upstream {
                operation: operation.to_string(),
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        Ok(json!({
            "operation": operation,
            "params": serde_json::to_value(params).unwrap(),
        }))
    }
}

#[async_trait]
impl AccountService for MockServices {
    async fn get_account(&self, _principal: &Principal) -> Result<Value, ServiceError> {
        self.respond("accounts/get-account", json!({}))
    }

    async fn update_account(
        &self,
        _principal: &Principal,
        dto: UpdateAccountDto,
    ) -> Result<Value, ServiceError> {
        self.respond("accounts/update-account", dto)
    }

    async fn get_organization(&self, principal: &Principal) -> Result<Value, ServiceError> {
        self.respond(
            "accounts/get-organization",
            json!({ "organization_id": principal.organization_id }),
        )
    }

    async fn list_members(&self, _principal: &Principal) -> Result<Value, ServiceError> {
        self.respond("accounts/list-members", json!({}))
    }

    async fn invite_member(
        &self,
        _principal: &Principal,
        dto: InviteMemberDto,
    ) -> Result<Value, ServiceError> {
        self.respond("accounts/invite-member", dto)
    }
}

#[async_trait]
impl CatalogService for MockServices {
    async fn list_products(
        &self,
        _principal: &Principal,
        query: ProductQuery,
    ) -> Result<Value, ServiceError> {
        self.respond("catalog/list-products", query)
    }

    async fn get_product(
        &self,
        _principal: &Principal,
        product_id: String,
    ) -> Result<Value, ServiceError> {
        self.respond("catalog/get-product", json!({ "product_id": product_id }))
    }
}

#[async_trait]
impl ComposeService for MockServices {
    async fn generate(
        &self,
        _principal: &Principal,
        dto: GenerateContentDto,
    ) -> Result<Value, ServiceError> {
        self.respond("compose/generate", dto)
    }

    async fn list_concepts(&self, _principal: &Principal) -> Result<Value, ServiceError> {
        self.respond("compose/list-concepts", json!({}))
    }

    async fn accept_suggestion(
        &self,
        _principal: &Principal,
        suggestion_id: Uuid,
    ) -> Result<Value, ServiceError> {
        self.respond(
            "compose/accept-suggestion",
            json!({ "suggestion_id": suggestion_id }),
        )
    }
}

#[async_trait]
impl ReviewService for MockServices {
    async fn analyze(
        &self,
        _principal: &Principal,
        dto: AnalyzeReviewsDto,
    ) -> Result<Value, ServiceError> {
        self.respond("reviews/analyze", dto)
    }

    async fn summary(
        &self,
        _principal: &Principal,
        product_id: String,
    ) -> Result<Value, ServiceError> {
        self.respond("reviews/summary", json!({ "product_id": product_id }))
    }
}

#[async_trait]
impl TranslationService for MockServices {
    async fn languages(&self, _principal: &Principal) -> Result<Value, ServiceError> {
        self.respond("translations/languages", json!({}))
    }

    async fn translate_page(
        &self,
        _principal: &Principal,
        dto: &TranslatePageDto,
    ) -> Result<Value, ServiceError> {
        self.respond("translations/translate-page", dto)
    }

    async fn page_status(
        &self,
        _principal: &Principal,
        page_id: String,
    ) -> Result<Value, ServiceError> {
        self.respond("translations/page-status", json!({ "page_id": page_id }))
    }
}

#[async_trait]
impl WorkflowService for MockServices {
    async fn stop_automation(
        &self,
        _principal: &Principal,
        dto: StopAutomationDto,
    ) -> Result<Value, ServiceError> {
        self.respond("workflow/stop-automation", dto)
    }

    async fn complete_item(
        &self,
        _principal: &Principal,
        dto: CompleteItemDto,
    ) -> Result<Value, ServiceError> {
        self.respond("workflow/complete-item", dto)
    }

    async fn save_page_workflow_item(
        &self,
        _principal: &Principal,
        dto: SavePageWorkflowItemDto,
    ) -> Result<Value, ServiceError> {
        self.respond("workflow/save-page-workflow-item", dto)
    }

    async fn list_items(
        &self,
        _principal: &Principal,
        workflow_id: Uuid,
    ) -> Result<Value, ServiceError> {
        self.respond("workflow/list-items", json!({ "workflow_id": workflow_id }))
    }
}

#[async_trait]
impl ListingQualityService for MockServices {
    async fn score(
        &self,
        _principal: &Principal,
        dto: ScoreListingDto,
    ) -> Result<Value, ServiceError> {
        self.respond("listing-quality/score", dto)
    }

    async fn report(
        &self,
        _principal: &Principal,
        product_id: String,
    ) -> Result<Value, ServiceError> {
        self.respond("listing-quality/report", json!({ "product_id": product_id }))
    }
}

/// In-memory job queue.
#[derive(Default)]
pub struct RecordingQueue {
    pub jobs: Mutex<Vec<(String, Value)>>,
}

#[async_trait]
impl JobQueue for RecordingQueue {
    async fn send(&self, name: &str, payload: Value) -> Result<Uuid, JobError> {
        self.jobs.lock().unwrap().push((name.to_string(), payload));
        Ok(Uuid::new_v4())
    }
}

pub struct TestApp {
    pub router: Router,
    pub services: Arc<MockServices>,
    pub queue: Arc<RecordingQueue>,
    pub queue_constructions: Arc<AtomicUsize>,
    pub session_config: SessionConfig,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub fn session_config() -> SessionConfig {
    SessionConfig {
        secret: TEST_SECRET.to_string(),
        ..SessionConfig::default()
    }
}

pub fn build_app() -> TestApp {
    build_app_with(MockServices::default())
}

pub fn build_app_with(services: MockServices) -> TestApp {
    let services = Arc::new(services);
    let queue = Arc::new(RecordingQueue::default());
    let queue_constructions = Arc::new(AtomicUsize::new(0));
    let session_config = session_config();

    let jobs = {
        let queue = queue.clone();
        let constructions = queue_constructions.clone();
        JobQueueHandle::new(move || {
            constructions.fetch_add(1, Ordering::SeqCst);
            Ok(queue.clone() as Arc<dyn JobQueue>)
        })
    };

    let state = AppState {
        session_config: session_config.clone(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        resolver: Arc::new(JwtSessionResolver::new(session_config.clone())),
        services: Services {
            accounts: services.clone(),
            catalog: services.clone(),
            compose: services.clone(),
            reviews: services.clone(),
            translations: services.clone(),
            workflow: services.clone(),
            listing_quality: services.clone(),
        },
        jobs,
    };

    TestApp {
        router: init_router(state),
        services,
        queue,
        queue_constructions,
        session_config,
    }
}

pub fn principal_with(roles: &[Role]) -> Principal {
    Principal {
        user_id: Uuid::new_v4(),
        organization_id: ORGANIZATION_ID,
        account_id: None,
        email: "member@shop.test".to_string(),
        roles: roles.iter().copied().collect(),
    }
}

/// `Cookie` header value carrying a session for a principal with `roles`.
pub fn session_cookie(app: &TestApp, roles: &[Role]) -> String {
    let token = create_session_token(&principal_with(roles), &app.session_config).unwrap();
    format!("{}={}", app.session_config.cookie_name, token)
}

pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// One gated endpoint with a request that passes validation.
pub struct RouteCase {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Roles of which the caller needs one; empty means any signed-in caller.
    pub roles: &'static [Role],
    pub operation: &'static str,
}

impl RouteCase {
    fn new(
        method: Method,
        path: impl Into<String>,
        body: Option<Value>,
        roles: &'static [Role],
        operation: &'static str,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            roles,
            operation,
        }
    }
}

const ADMINS: &[Role] = &[Role::Owner, Role::Admin];
const EDITORS: &[Role] = &[Role::Owner, Role::Admin, Role::Editor];
const REVIEWERS: &[Role] = &[Role::Owner, Role::Admin, Role::Reviewer];
const TRANSLATORS: &[Role] = &[Role::Owner, Role::Admin, Role::Translator];
const CONTENT: &[Role] = &[Role::Owner, Role::Admin, Role::Editor, Role::Reviewer];

pub fn gated_routes() -> Vec<RouteCase> {
    vec![
        RouteCase::new(Method::GET, "/api/account", None, &[], "accounts/get-account"),
        RouteCase::new(
            Method::PATCH,
            "/api/account",
            Some(json!({ "name": "Acme Outdoor" })),
            ADMINS,
            "accounts/update-account",
        ),
        RouteCase::new(Method::GET, "/api/organization", None, &[], "accounts/get-organization"),
        RouteCase::new(
            Method::GET,
            "/api/organization/members",
            None,
            ADMINS,
            "accounts/list-members",
        ),
        RouteCase::new(
            Method::POST,
            "/api/organization/members",
            Some(json!({ "email": "new@shop.test", "roles": ["editor"] })),
            ADMINS,
            "accounts/invite-member",
        ),
        RouteCase::new(
            Method::GET,
            "/api/products?search=boots&page=2&limit=10",
            None,
            &[],
            "catalog/list-products",
        ),
        RouteCase::new(Method::GET, "/api/products/gid-1", None, &[], "catalog/get-product"),
        RouteCase::new(
            Method::POST,
            "/api/compose",
            Some(json!({ "product_id": "gid-1", "fields": ["title", "seo_description"] })),
            EDITORS,
            "compose/generate",
        ),
        RouteCase::new(Method::GET, "/api/compose/concepts", None, &[], "compose/list-concepts"),
        RouteCase::new(
            Method::POST,
            format!("/api/compose/suggestions/{}/accept", SUGGESTION_ID),
            None,
            EDITORS,
            "compose/accept-suggestion",
        ),
        RouteCase::new(
            Method::POST,
            "/api/reviews/analyze",
            Some(json!({ "product_id": "gid-1", "min_rating": 2 })),
            &[],
            "reviews/analyze",
        ),
        RouteCase::new(Method::GET, "/api/reviews/gid-1/summary", None, &[], "reviews/summary"),
        RouteCase::new(
            Method::GET,
            "/api/translations/languages",
            None,
            &[],
            "translations/languages",
        ),
        RouteCase::new(
            Method::POST,
            "/api/translations/pages",
            Some(json!({ "page_id": "home", "languages": ["de", "fr"] })),
            TRANSLATORS,
            "translations/translate-page",
        ),
        RouteCase::new(
            Method::GET,
            "/api/translations/pages/home",
            None,
            &[],
            "translations/page-status",
        ),
        RouteCase::new(
            Method::POST,
            "/api/workflow/stop-automation",
            Some(json!({ "workflow_id": WORKFLOW_ID })),
            REVIEWERS,
            "workflow/stop-automation",
        ),
        RouteCase::new(
            Method::POST,
            "/api/workflow/complete-item",
            Some(json!({
                "workflow_id": WORKFLOW_ID,
                "item_id": Uuid::new_v4(),
                "outcome": "approved",
            })),
            REVIEWERS,
            "workflow/complete-item",
        ),
        RouteCase::new(
            Method::PUT,
            "/api/workflow/page-item",
            Some(json!({
                "workflow_id": WORKFLOW_ID,
                "page_id": "home",
                "content": { "title": "Trail boots" },
            })),
            CONTENT,
            "workflow/save-page-workflow-item",
        ),
        RouteCase::new(
            Method::GET,
            format!("/api/workflow/{}/items", WORKFLOW_ID),
            None,
            &[],
            "workflow/list-items",
        ),
        RouteCase::new(
            Method::POST,
            "/api/listing-quality/score",
            Some(json!({ "product_id": "gid-1", "marketplace": "amazon" })),
            &[],
            "listing-quality/score",
        ),
        RouteCase::new(
            Method::GET,
            "/api/listing-quality/report/gid-1",
            None,
            &[],
            "listing-quality/report",
        ),
    ]
}

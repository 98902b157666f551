use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
};
use utoipa::{Modify, OpenApi};

use contentops_auth::{Principal, Role};
use contentops_config::session::DEFAULT_COOKIE_NAME;
use contentops_core::errors::ErrorResponse;

use crate::modules::accounts::model::{InviteMemberDto, UpdateAccountDto};
use crate::modules::compose::model::{ContentField, GenerateContentDto};
use crate::modules::listing_quality::model::{ListingQualityErrorBody, ScoreListingDto};
use crate::modules::reviews::model::AnalyzeReviewsDto;
use crate::modules::translations::model::{TranslatePageDto, TranslatePageResponse};
use crate::modules::workflow::model::{
    CompleteItemDto, ItemOutcome, SavePageWorkflowItemDto, StopAutomationDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::accounts::controller::get_account,
        crate::modules::accounts::controller::update_account,
        crate::modules::accounts::controller::get_organization,
        crate::modules::accounts::controller::list_members,
        crate::modules::accounts::controller::invite_member,
        crate::modules::catalog::controller::list_products,
        crate::modules::catalog::controller::get_product,
        crate::modules::compose::controller::generate,
        crate::modules::compose::controller::list_concepts,
        crate::modules::compose::controller::accept_suggestion,
        crate::modules::reviews::controller::analyze,
        crate::modules::reviews::controller::summary,
        crate::modules::translations::controller::languages,
        crate::modules::translations::controller::translate_page,
        crate::modules::translations::controller::page_status,
        crate::modules::workflow::controller::stop_automation,
        crate::modules::workflow::controller::complete_item,
        crate::modules::workflow::controller::save_page_workflow_item,
        crate::modules::workflow::controller::list_items,
        crate::modules::listing_quality::controller::score,
        crate::modules::listing_quality::controller::report,
        crate::modules::session::controller::reset_session,
    ),
    components(
        schemas(
            ErrorResponse,
            Principal,
            Role,
            UpdateAccountDto,
            InviteMemberDto,
            ContentField,
            GenerateContentDto,
            AnalyzeReviewsDto,
            TranslatePageDto,
            TranslatePageResponse,
            StopAutomationDto,
            ItemOutcome,
            CompleteItemDto,
            SavePageWorkflowItemDto,
            ScoreListingDto,
            ListingQualityErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Account", description = "Account and organization management"),
        (name = "Catalog", description = "Product catalog browsing"),
        (name = "Compose", description = "AI-assisted content generation"),
        (name = "Reviews", description = "Customer review analysis"),
        (name = "Translations", description = "Page translation and localization"),
        (name = "Workflow", description = "Content review pipelines"),
        (name = "Listing Quality", description = "Marketplace listing scoring"),
        (name = "Session", description = "Session cookie management")
    ),
    info(
        title = "Contentops API",
        version = "0.1.0",
        description = "Content operations for e-commerce catalogs. Every operation is authorized here and carried out by the service layer.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(DEFAULT_COOKIE_NAME))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

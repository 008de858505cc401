use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::blood_groups::{dtos as blood_groups_dtos, handlers as blood_groups_handlers};
use crate::features::blood_requests::{
    dtos as blood_requests_dtos, handlers as blood_requests_handlers,
    models as blood_requests_models,
};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::donors::{
    dtos as donors_dtos, handlers as donors_handlers, models as donors_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Blood groups (public)
        blood_groups_handlers::list_blood_groups,
        // Donors
        donors_handlers::register_donor,
        donors_handlers::search_donors,
        donors_handlers::list_donors,
        donors_handlers::update_donor_availability,
        donors_handlers::delete_donor,
        // Blood requests
        blood_requests_handlers::submit_blood_request,
        blood_requests_handlers::list_blood_requests,
        blood_requests_handlers::update_blood_request_status,
        // Contact
        contact_handlers::submit_contact_message,
        contact_handlers::list_contact_messages,
        contact_handlers::mark_contact_message_read,
        contact_handlers::delete_contact_message,
        // Dashboard (admin)
        dashboard_handlers::get_dashboard_stats,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AuthUserDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            // Blood groups
            blood_groups_dtos::BloodGroupResponseDto,
            // Donors
            donors_models::Gender,
            donors_dtos::CreateDonorDto,
            donors_dtos::UpdateDonorAvailabilityDto,
            donors_dtos::DonorResponseDto,
            donors_dtos::DonorSearchResultDto,
            ApiResponse<donors_dtos::DonorResponseDto>,
            // Blood requests
            blood_requests_models::RequestStatus,
            blood_requests_models::UrgencyLevel,
            blood_requests_dtos::CreateBloodRequestDto,
            blood_requests_dtos::UpdateRequestStatusDto,
            blood_requests_dtos::BloodRequestResponseDto,
            ApiResponse<blood_requests_dtos::BloodRequestResponseDto>,
            // Contact
            contact_dtos::CreateContactMessageDto,
            contact_dtos::ContactMessageResponseDto,
            // Dashboard
            dashboard_dtos::BloodGroupCountDto,
            dashboard_dtos::DashboardStatsDto,
            ApiResponse<dashboard_dtos::DashboardStatsDto>,
        )
    ),
    tags(
        (name = "auth", description = "Administrator login"),
        (name = "blood-groups", description = "Blood group reference data (public)"),
        (name = "donors", description = "Donor registration and directory search (public)"),
        (name = "blood-requests", description = "Blood request intake (public)"),
        (name = "contact", description = "Contact form (public)"),
        (name = "admin-donors", description = "Donor management (admin)"),
        (name = "admin-blood-requests", description = "Triage queue and status changes (admin)"),
        (name = "admin-contact", description = "Contact inbox (admin)"),
        (name = "admin-dashboard", description = "Aggregated statistics (admin)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "RedConnect API",
        version = "0.1.0",
        description = "Blood donor directory and blood request triage",
    )
)]
pub struct ApiDoc;

/// Adds the Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
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

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/admin/login",
            "/api/admin/me",
            "/api/blood-groups",
            "/api/donors",
            "/api/donors/search",
            "/api/admin/donors",
            "/api/admin/donors/{id}",
            "/api/blood-requests",
            "/api/admin/blood-requests",
            "/api/admin/blood-requests/{id}",
            "/api/contact",
            "/api/admin/contact-messages",
            "/api/admin/contact-messages/{id}/read",
            "/api/admin/contact-messages/{id}",
            "/api/admin/dashboard",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}

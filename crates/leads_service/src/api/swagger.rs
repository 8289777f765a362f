use models_content::{
    Branding, ContentBundle, HeroAsset, HeroAssetKind, Highlight, Package, Villa, VillaCategory,
};
use models_leads::{InquiryDraft, LeadRecord, LeadSource, LeadStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Inquiry funnel
        crate::api::inquiries::create::create_inquiry,
        crate::api::inquiries::validate::validate_step,
        crate::api::calendar::month::month_view,
        // Lead review table
        crate::api::leads::list::list_leads,
        crate::api::leads::update_status::update_lead_status,
        crate::api::leads::delete_lead::delete_lead,
        // Content document
        crate::api::content::get_content::get_content,
        crate::api::content::update::update_content,
        crate::api::content::reset::reset_content,
        // Concierge
        crate::api::concierge::ask::ask_concierge,
    ),
    components(
        schemas(
            InquiryDraft,
            LeadRecord,
            LeadStatus,
            LeadSource,
            ContentBundle,
            HeroAsset,
            HeroAssetKind,
            Highlight,
            Villa,
            VillaCategory,
            Package,
            Branding,
            crate::api::ErrorResponse,
            crate::api::inquiries::validate::ValidateStepRequest,
            crate::api::calendar::month::CalendarDay,
            crate::api::calendar::month::CalendarMonth,
            crate::api::leads::update_status::UpdateStatusRequest,
            crate::api::concierge::ask::AskRequest,
            crate::api::concierge::ask::AskResponse,
            leads_service::domain::wizard::WizardStep,
        )
    ),
    tags(
        (name = "leads service", description = "Resort lead capture and content service")
    )
)]
pub struct ApiDoc;

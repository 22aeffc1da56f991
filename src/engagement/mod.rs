//! Stakeholder engagement planning: static catalogs plus a session-scoped
//! register of stakeholder records.

pub mod register;

pub use register::StakeholderRegister;

/// Stakeholder categories offered to the caller's selection UI.
pub fn categories() -> &'static [&'static str] {
    &[
        "Government agencies",
        "Local communities",
        "NGOs and civil society organizations",
        "Donors and funders",
        "Private sector companies",
        "Academic institutions",
        "Media",
        "Beneficiaries",
        "Project team members",
        "Other",
    ]
}

/// Engagement strategies offered to the caller's selection UI.
pub fn strategies() -> &'static [&'static str] {
    &[
        "Regular meetings",
        "Workshops and seminars",
        "Surveys and feedback forms",
        "Newsletters and reports",
        "Social media engagement",
        "Community events",
        "Focus group discussions",
        "Advisory committees",
        "Partnerships and collaborations",
        "Other",
    ]
}

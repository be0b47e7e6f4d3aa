//! # Submission Pipeline
//!
//! A valid application is persisted through the backend first and mailed second. The
//! mail step only runs once the backend has accepted the application, and a failure at
//! either step fails the whole submission.

use chrono::{DateTime, Local};
use tourbook_common::booking::form::Application;
use tourbook_common::booking::tour::{self, Tour};
use tourbook_common::error::GatewayError;
use tracing::{debug, info};

use crate::ports::{BookingBackend, Mailer, TemplateParams};

pub const NOT_SPECIFIED: &str = "Не указано";
pub const NO_EXCURSIONS: &str = "Не выбраны";
const DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Where a submission stands.
///
/// `Idle -> Validating -> (Invalid | Submitting)`, `Submitting -> (Success | Failed)`,
/// and every terminal phase drops back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Success,
    Failed,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing left the process.
    Invalid,
    /// A submission was already in flight.
    Busy,
    Sent,
    Failed(GatewayError),
}

/// Flat key/value payload for the mail template.
pub fn template_params(
    application: &Application,
    tours: &[Tour],
    excursion_names: &[&str],
    submitted_at: DateTime<Local>,
) -> TemplateParams {
    let message: &str = if application.message.is_empty() {
        NOT_SPECIFIED
    } else {
        &application.message
    };
    let excursions: String = if excursion_names.is_empty() {
        NO_EXCURSIONS.to_string()
    } else {
        excursion_names.join(", ")
    };
    let tourists: String = application
        .tourists
        .iter()
        .map(|tourist| tourist.display_name())
        .collect::<Vec<String>>()
        .join(", ");

    [
        ("user_name", application.name.clone()),
        ("user_email", application.email.clone()),
        ("user_phone", application.phone.clone()),
        ("user_message", message.to_string()),
        ("tour_name", tour::tour_name(tours, &application.tour_id).to_string()),
        ("excursions", excursions),
        ("tourists", tourists),
        ("date", submitted_at.format(DATE_FORMAT).to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

/// Persists `application`, then mails `params`.
pub async fn dispatch(
    backend: &dyn BookingBackend,
    mailer: &dyn Mailer,
    application: &Application,
    params: &TemplateParams,
) -> Result<(), GatewayError> {
    backend.submit_application(application).await?;
    info!("Application for {} stored", application.email);

    debug!("Mail template params: {params:?}");
    mailer.send(params).await?;
    info!("Confirmation mail sent");
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use std::sync::Arc;

use anyhow::Context;
use colored::*;
use tourbook_common::booking::form::Field;
use tourbook_common::booking::tour::Tour;
use tourbook_common::booking::tourist::{TouristField, TouristId};
use tourbook_common::config::Config;
use tourbook_core::form::FormEvent;
use tourbook_core::ports::TemplateParams;
use tourbook_core::session::BookingSession;
use tourbook_core::submission::SubmitOutcome;
use tourbook_protocols::backend::RestBackend;
use tourbook_protocols::emailjs::EmailJsMailer;
use tracing::{info, warn};

use crate::commands::ApplyArgs;
use crate::terminal::{colors, format, print, spinner};

pub async fn apply(args: ApplyArgs, config: &Config) -> anyhow::Result<()> {
    let backend: Arc<RestBackend> = Arc::new(RestBackend::new(&config.api).context("building backend client")?);
    let mailer: EmailJsMailer =
        EmailJsMailer::new(config.mail.clone(), config.api.timeout).context("building mail client")?;
    let mut session: BookingSession = BookingSession::new(backend, Arc::new(mailer), config);

    spinner::spin("Loading tours...", session.load_reference_data()).await;
    if let Some(notification) = session.notification() {
        warn!("{}", notification.message);
    }

    fill_form(&mut session, &args)?;

    if args.dry_run {
        print::header("dry run");
        if !session.preflight() {
            report_errors(&session);
            anyhow::bail!("the application is not valid");
        }
        print_params(&session.template_params());
        info!("Application is valid; nothing was sent");
        return Ok(());
    }

    print::header("submitting");
    let outcome: SubmitOutcome = spinner::spin("Sending application...", session.submit()).await;
    if let Some(notification) = session.notification() {
        print::print_status(format::notification(notification).to_string());
    }
    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Invalid => {
            report_errors(&session);
            anyhow::bail!("the application is not valid")
        }
        SubmitOutcome::Busy => anyhow::bail!("a submission is already in progress"),
        SubmitOutcome::Failed(err) => Err(err.into()),
    }
}

fn fill_form(session: &mut BookingSession, args: &ApplyArgs) -> anyhow::Result<()> {
    for (field, value) in [
        (Field::Email, &args.email),
        (Field::Name, &args.name),
        (Field::Phone, &args.phone),
        (Field::Message, &args.message),
    ] {
        session.apply(FormEvent::Input { field, value: value.clone() })?;
    }

    if let Some(tour) = &args.tour {
        let tour_id: String = resolve_tour(session.catalog().tour_list(), tour);
        session.apply(FormEvent::SelectTour(tour_id))?;
    }

    for excursion in &args.excursions {
        if let Err(err) = session.apply(FormEvent::ToggleExcursion(excursion.clone())) {
            warn!("{err}");
        }
    }

    for (idx, raw) in args.tourists.iter().enumerate() {
        if idx > 0 {
            session.apply(FormEvent::AddTourist)?;
        }
        let id: TouristId = match session.form().tourists().ids().last() {
            Some(id) => *id,
            None => anyhow::bail!("the tourist list is empty"),
        };
        let (last_name, first_name) = split_tourist(raw);
        for (field, value) in [(TouristField::LastName, last_name), (TouristField::FirstName, first_name)] {
            session.apply(FormEvent::TouristInput { id, field, value })?;
        }
    }
    Ok(())
}

/// Accepts a tour id or an exact tour name; anything else is passed through as an id.
fn resolve_tour(tours: &[Tour], wanted: &str) -> String {
    tours
        .iter()
        .find(|tour| tour.id == wanted || tour.name == wanted)
        .map(|tour| tour.id.clone())
        .unwrap_or_else(|| wanted.to_string())
}

/// `"Петров Иван"` becomes `("Петров", "Иван")`; a single word is a last name only.
fn split_tourist(raw: &str) -> (String, String) {
    let mut parts = raw.split_whitespace();
    let last: String = parts.next().unwrap_or_default().to_string();
    let first: String = parts.collect::<Vec<&str>>().join(" ");
    (last, first)
}

fn report_errors(session: &BookingSession) {
    let form = session.form();
    for field in Field::ALL {
        if let Some(message) = form.visible_error(field) {
            print::aligned_line(field.key(), message.color(colors::ERROR));
        }
    }
    for (idx, tourist) in form.tourists().iter().enumerate() {
        for field in TouristField::ALL {
            if let Some(message) = form.tourists().visible_error(tourist.id, field, form.show_errors()) {
                let key: String = match field {
                    TouristField::FirstName => format!("tourist {} first", idx + 1),
                    TouristField::LastName => format!("tourist {} last", idx + 1),
                };
                print::aligned_line(&key, message.color(colors::ERROR));
            }
        }
    }
}

fn print_params(params: &TemplateParams) {
    print::set_key_width(params.keys().map(String::len).max().unwrap_or(0));
    for (key, value) in params {
        print::aligned_line(key, value.as_str());
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

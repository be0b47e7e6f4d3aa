//! # Booking Session
//!
//! Wires the form store to the outbound ports: loads reference data, drives the
//! submission lifecycle and reports every outcome through the [`Notifier`].

use std::sync::Arc;

use chrono::Local;
use tourbook_common::booking::form::Application;
use tourbook_common::booking::notification::{self, Notification};
use tourbook_common::booking::tour::Excursion;
use tourbook_common::config::Config;
use tourbook_common::error::FormError;
use tracing::{debug, error, warn};

use crate::catalog::Catalog;
use crate::form::{FormEvent, FormState};
use crate::notifier::Notifier;
use crate::ports::{BookingBackend, Mailer, TemplateParams};
use crate::submission::{self, SubmissionPhase, SubmitOutcome};

pub struct BookingSession {
    form: FormState,
    catalog: Catalog,
    backend: Arc<dyn BookingBackend>,
    mailer: Arc<dyn Mailer>,
    notifier: Notifier,
    phase: SubmissionPhase,
}

impl BookingSession {
    pub fn new(backend: Arc<dyn BookingBackend>, mailer: Arc<dyn Mailer>, config: &Config) -> Self {
        Self {
            form: FormState::new(),
            catalog: Catalog::new(backend.clone(), config.query),
            backend,
            mailer,
            notifier: Notifier::new(config.notification_lifetime),
            phase: SubmissionPhase::Idle,
        }
    }

    /// Loads tours and excursions and hands the excursion list to the form.
    ///
    /// Load failures are shown as error notifications; the form stays usable.
    pub async fn load_reference_data(&mut self) {
        self.catalog.load().await;
        self.sync_catalog();
    }

    /// Window focus. Reloads stale reference data when the query policy asks for it.
    pub async fn on_focus(&mut self) {
        self.catalog.on_focus().await;
        self.sync_catalog();
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        self.form.apply(event)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase != SubmissionPhase::Submitting
    }

    /// Mail template parameters for the current form contents.
    pub fn template_params(&self) -> TemplateParams {
        submission::template_params(
            &self.form.application(),
            self.catalog.tour_list(),
            &self.form.excursions().selected_names(),
            Local::now(),
        )
    }

    /// Validates and, when valid, persists and mails the application.
    ///
    /// Success resets the form. Any failure keeps every entered value so the user can
    /// retry; a retry repeats both steps.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Busy;
        }

        self.transition(SubmissionPhase::Validating);
        if !self.preflight() {
            self.transition(SubmissionPhase::Invalid);
            warn!("Submission blocked: {} invalid fields", self.form.errors().len());
            self.notifier.show(Notification::error(notification::VALIDATION_FAILED));
            self.transition(SubmissionPhase::Idle);
            return SubmitOutcome::Invalid;
        }

        self.transition(SubmissionPhase::Submitting);
        let application: Application = self.form.application();
        let params: TemplateParams = self.template_params();

        let result = {
            let mut in_flight: InFlight<'_> = InFlight::new(&mut self.phase);
            let result = submission::dispatch(
                self.backend.as_ref(),
                self.mailer.as_ref(),
                &application,
                &params,
            )
            .await;
            in_flight.settle();
            result
        };

        let outcome: SubmitOutcome = match result {
            Ok(()) => {
                self.transition(SubmissionPhase::Success);
                self.notifier.show(Notification::success(notification::SUBMIT_SUCCESS));
                self.form.reset();
                SubmitOutcome::Sent
            }
            Err(err) => {
                self.transition(SubmissionPhase::Failed);
                error!("Submission failed: {err}");
                self.notifier.show(Notification::error(notification::SUBMIT_FAILED));
                SubmitOutcome::Failed(err)
            }
        };
        self.transition(SubmissionPhase::Idle);
        outcome
    }

    /// Touches every required field, reveals all errors and validates.
    ///
    /// This is the validation half of [`submit`](Self::submit); nothing is sent.
    pub fn preflight(&mut self) -> bool {
        self.form.touch_all_required();
        self.form.reveal_errors();
        self.form.validate_all()
    }

    fn transition(&mut self, next: SubmissionPhase) {
        debug!("Submission: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    fn sync_catalog(&mut self) {
        if let Some(message) = self.catalog.tours().error() {
            warn!("Tours unavailable: {message}");
            self.notifier.show(Notification::error(notification::TOURS_LOAD_FAILED));
        }
        match self.catalog.excursions().data() {
            Some(excursions) => {
                if excursions.as_slice() != self.form.excursions().catalog() {
                    let excursions: Vec<Excursion> = excursions.clone();
                    self.form.load_excursions(excursions);
                }
            }
            None => {
                if let Some(message) = self.catalog.excursions().error() {
                    warn!("Excursions unavailable: {message}");
                    self.notifier.show(Notification::error(notification::EXCURSIONS_LOAD_FAILED));
                }
            }
        }
    }
}

/// Returns the session to `Idle` if a submit future is dropped mid-flight.
///
/// Whatever the abandoned backend or mail call eventually does is ignored.
struct InFlight<'a> {
    phase: &'a mut SubmissionPhase,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(phase: &'a mut SubmissionPhase) -> Self {
        Self { phase, settled: false }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Submission abandoned while in flight");
            *self.phase = SubmissionPhase::Idle;
        }
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

//! In-memory port implementations shared by the integration tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tourbook_common::booking::form::Application;
use tourbook_common::booking::tour::{Excursion, Tour};
use tourbook_common::config::{Config, QueryPolicy};
use tourbook_common::error::GatewayError;
use tourbook_core::ports::{BookingBackend, Mailer, TemplateParams};
use tourbook_core::session::BookingSession;

#[derive(Default)]
pub struct RecordingBackend {
    pub applications: Mutex<Vec<Application>>,
    pub reads: Mutex<Vec<&'static str>>,
    pub offline: AtomicBool,
}

impl RecordingBackend {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn submitted(&self) -> Vec<Application> {
        self.applications.lock().unwrap().clone()
    }
}

pub fn tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "t1".into(),
            name: "Золотое кольцо Китая".into(),
            description: String::new(),
        },
        Tour {
            id: "t2".into(),
            name: "Северный Китай".into(),
            description: String::new(),
        },
    ]
}

pub fn excursions() -> Vec<Excursion> {
    vec![
        Excursion {
            id: "wall".into(),
            name: "Великая Китайская стена".into(),
            description: String::new(),
            tour_ids: ["t1".to_string(), "t2".to_string()].into(),
        },
        Excursion {
            id: "army".into(),
            name: "Терракотовая армия".into(),
            description: String::new(),
            tour_ids: ["t1".to_string()].into(),
        },
    ]
}

#[async_trait]
impl BookingBackend for RecordingBackend {
    async fn fetch_tours(&self) -> Result<Vec<Tour>, GatewayError> {
        self.reads.lock().unwrap().push("tours");
        Ok(tours())
    }

    async fn fetch_excursions(&self) -> Result<Vec<Excursion>, GatewayError> {
        self.reads.lock().unwrap().push("excursions");
        Ok(excursions())
    }

    async fn submit_application(&self, application: &Application) -> Result<(), GatewayError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(GatewayError::Connection("network unreachable".into()));
        }
        self.applications.lock().unwrap().push(application.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<TemplateParams>>,
    pub failing: AtomicBool,
}

impl RecordingMailer {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, params: &TemplateParams) -> Result<(), GatewayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Status {
                code: 400,
                body: "The template ID is invalid".into(),
            });
        }
        self.sent.lock().unwrap().push(params.clone());
        Ok(())
    }
}

pub fn config() -> Config {
    Config {
        query: QueryPolicy {
            stale_time: Duration::from_secs(600),
            retry: 0,
            refetch_on_focus: false,
        },
        ..Config::default()
    }
}

pub struct Harness {
    pub backend: Arc<RecordingBackend>,
    pub mailer: Arc<RecordingMailer>,
    pub session: BookingSession,
}

impl Harness {
    pub fn new() -> Self {
        let backend: Arc<RecordingBackend> = Arc::new(RecordingBackend::default());
        let mailer: Arc<RecordingMailer> = Arc::new(RecordingMailer::default());
        let session: BookingSession = BookingSession::new(backend.clone(), mailer.clone(), &config());
        Self {
            backend,
            mailer,
            session,
        }
    }

    /// Backend writes plus mail sends observed so far.
    pub fn network_calls(&self) -> usize {
        self.backend.submitted().len() + self.mailer.sent().len()
    }
}

//! # Notification Presenter
//!
//! At most one banner is active. Showing a new one replaces the old one and restarts
//! the dismissal timer; there is no queue.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tourbook_common::booking::notification::Notification;

#[derive(Debug, Clone)]
struct Active {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    lifetime: Duration,
    active: Option<Active>,
}

impl Notifier {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            active: None,
        }
    }

    pub fn show(&mut self, notification: Notification) {
        self.active = Some(Active {
            notification,
            expires_at: Instant::now() + self.lifetime,
        });
    }

    /// The active notification, unless its lifetime has run out.
    pub fn current(&self) -> Option<&Notification> {
        self.active
            .as_ref()
            .filter(|active| Instant::now() < active.expires_at)
            .map(|active| &active.notification)
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.active.as_ref().map(|active| active.expires_at)
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// Sleeps until the active notification expires, then clears it.
    ///
    /// Returns immediately when nothing is shown.
    pub async fn dismissed(&mut self) {
        if let Some(deadline) = self.expires_at() {
            sleep_until(deadline).await;
            self.dismiss();
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

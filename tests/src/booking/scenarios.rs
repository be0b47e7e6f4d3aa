use tourbook_common::booking::form::Field;
use tourbook_common::booking::notification::{self, NotificationKind};
use tourbook_common::booking::tourist::{TouristField, TouristId};
use tourbook_common::error::GatewayError;
use tourbook_common::validation::{EMAIL_INVALID, NAME_UPPERCASE, PHONE_DIGIT_COUNT, TOUR_REQUIRED};
use tourbook_core::form::FormEvent;
use tourbook_core::submission::{SubmissionPhase, SubmitOutcome};

use crate::support::Harness;

fn input(harness: &mut Harness, field: Field, value: &str) {
    harness
        .session
        .apply(FormEvent::Input {
            field,
            value: value.to_string(),
        })
        .unwrap();
}

fn tourist(harness: &mut Harness, id: TouristId, first: &str, last: &str) {
    for (field, value) in [(TouristField::FirstName, first), (TouristField::LastName, last)] {
        harness
            .session
            .apply(FormEvent::TouristInput {
                id,
                field,
                value: value.to_string(),
            })
            .unwrap();
    }
}

fn fill_valid(harness: &mut Harness) {
    input(harness, Field::Email, "a@b.com");
    input(harness, Field::Name, "Ivan");
    input(harness, Field::Phone, "+7 (900) 123-45-67");
    harness.session.apply(FormEvent::SelectTour("t1".into())).unwrap();
    let id: TouristId = harness.session.form().tourists().ids()[0];
    tourist(harness, id, "Ivan", "Petrov");
}

#[tokio::test]
async fn invalid_submission_reports_errors_without_network() {
    let mut harness: Harness = Harness::new();
    input(&mut harness, Field::Email, "bad");
    input(&mut harness, Field::Name, "john");
    input(&mut harness, Field::Phone, "123");

    let outcome: SubmitOutcome = harness.session.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    let form = harness.session.form();
    assert_eq!(form.visible_error(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(form.visible_error(Field::Name), Some(NAME_UPPERCASE));
    assert_eq!(form.visible_error(Field::Phone), Some(PHONE_DIGIT_COUNT));
    // No tour was picked either.
    assert_eq!(form.visible_error(Field::Tour), Some(TOUR_REQUIRED));
    assert_eq!(form.visible_error(Field::Message), None);
    assert_eq!(harness.network_calls(), 0);
}

#[tokio::test]
async fn valid_submission_posts_filtered_tourists_then_resets() {
    let mut harness: Harness = Harness::new();
    harness.session.load_reference_data().await;
    fill_valid(&mut harness);
    harness.session.apply(FormEvent::AddTourist).unwrap();

    let outcome: SubmitOutcome = harness.session.submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    let submitted = harness.backend.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].tourists.len(), 1);
    assert_eq!(submitted[0].phone, "+7 (900) 123-45-67");

    let mail = harness.mailer.sent();
    assert_eq!(mail.len(), 1);
    assert_eq!(mail[0]["tour_name"], "Золотое кольцо Китая");
    assert_eq!(mail[0]["tourists"], "Petrov Ivan");

    let form = harness.session.form();
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
    }
    assert_eq!(form.tourists().len(), 1);
    assert!(form.tourists().iter().all(|t| t.is_blank()));
    assert!(form.touched().is_empty());

    let shown = harness.session.notification().unwrap();
    assert_eq!(shown.kind, NotificationKind::Success);
    assert_eq!(shown.message, notification::SUBMIT_SUCCESS);
    assert_eq!(harness.session.phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn failed_submission_keeps_values_and_can_be_retried() {
    let mut harness: Harness = Harness::new();
    fill_valid(&mut harness);
    harness.backend.set_offline(true);

    let outcome: SubmitOutcome = harness.session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(harness.mailer.sent().is_empty());
    let shown = harness.session.notification().unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.message, notification::SUBMIT_FAILED);
    assert_eq!(harness.session.form().value(Field::Email), "a@b.com");
    assert_eq!(harness.session.form().value(Field::Tour), "t1");
    assert!(harness.session.can_submit());

    harness.backend.set_offline(false);
    assert_eq!(harness.session.submit().await, SubmitOutcome::Sent);
    assert_eq!(harness.backend.submitted().len(), 1);
    assert_eq!(harness.mailer.sent().len(), 1);
}

#[tokio::test]
async fn mail_failure_after_save_keeps_values_and_retry_posts_again() {
    let mut harness: Harness = Harness::new();
    fill_valid(&mut harness);
    harness.mailer.set_failing(true);

    let outcome: SubmitOutcome = harness.session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(GatewayError::Status { code: 400, .. })));
    assert_eq!(harness.backend.submitted().len(), 1);
    assert!(harness.mailer.sent().is_empty());
    let shown = harness.session.notification().unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.message, notification::SUBMIT_FAILED);
    assert_eq!(harness.session.form().value(Field::Email), "a@b.com");
    assert_eq!(harness.session.form().value(Field::Phone), "+7 (900) 123-45-67");
    assert_eq!(harness.session.form().value(Field::Tour), "t1");
    assert_eq!(harness.session.phase(), SubmissionPhase::Idle);

    harness.mailer.set_failing(false);
    assert_eq!(harness.session.submit().await, SubmitOutcome::Sent);
    assert_eq!(harness.backend.submitted().len(), 2);
    assert_eq!(harness.mailer.sent().len(), 1);
}

#[tokio::test]
async fn stale_errors_do_not_block_a_corrected_form() {
    let mut harness: Harness = Harness::new();
    input(&mut harness, Field::Email, "bad");
    assert_eq!(harness.session.submit().await, SubmitOutcome::Invalid);

    fill_valid(&mut harness);

    assert!(harness.session.form().is_valid());
    assert_eq!(harness.session.submit().await, SubmitOutcome::Sent);
}

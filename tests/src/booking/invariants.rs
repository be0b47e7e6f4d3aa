use std::collections::BTreeSet;

use tourbook_common::booking::form::Field;
use tourbook_common::booking::tourist::{TouristField, TouristId};
use tourbook_common::error::FormError;
use tourbook_core::form::{FormEvent, FormState};

use crate::support::{self, Harness};

#[test]
fn touch_all_required_is_idempotent() {
    let mut once: FormState = FormState::new();
    once.touch_all_required();

    let mut twice: FormState = FormState::new();
    twice.touch_all_required();
    twice.touch_all_required();

    assert_eq!(once.touched(), twice.touched());
    let expected: BTreeSet<Field> = Field::REQUIRED.into_iter().collect();
    assert_eq!(twice.touched(), &expected);
}

#[test]
fn last_tourist_survives_removal() {
    let mut form: FormState = FormState::new();
    let id: TouristId = form.tourists().ids()[0];

    assert_eq!(form.apply(FormEvent::RemoveTourist(id)), Err(FormError::LastTourist));
    assert_eq!(form.tourists().ids(), vec![id]);
}

#[test]
fn tourist_errors_stay_with_their_record() {
    let mut form: FormState = FormState::new();
    let first: TouristId = form.tourists().ids()[0];
    let second: TouristId = form.add_tourist();

    form.apply(FormEvent::TouristInput {
        id: second,
        field: TouristField::LastName,
        value: "x".into(),
    })
    .unwrap();
    form.apply(FormEvent::TouristBlur {
        id: second,
        field: TouristField::LastName,
    })
    .unwrap();
    form.apply(FormEvent::RemoveTourist(first)).unwrap();

    assert!(form.tourists().error(second, TouristField::LastName).is_some());
    assert!(form.tourists().error(second, TouristField::FirstName).is_none());
}

#[tokio::test]
async fn switching_tours_clears_excursions() {
    let mut harness: Harness = Harness::new();
    harness.session.load_reference_data().await;

    harness.session.apply(FormEvent::SelectTour("t1".into())).unwrap();
    harness.session.apply(FormEvent::ToggleExcursion("wall".into())).unwrap();
    assert_eq!(harness.session.form().excursions().selected().len(), 1);

    // "wall" is offered under both tours; the selection is dropped anyway.
    harness.session.apply(FormEvent::SelectTour("t2".into())).unwrap();

    let form = harness.session.form();
    assert!(form.excursions().selected().is_empty());
    assert!(form.excursions().is_available("wall"));
    assert!(!form.excursions().is_available("army"));
}

#[tokio::test]
async fn reference_data_is_cached_between_loads() {
    let mut harness: Harness = Harness::new();

    harness.session.load_reference_data().await;
    harness.session.load_reference_data().await;

    let mut reads: Vec<&str> = harness.backend.reads.lock().unwrap().clone();
    reads.sort_unstable();
    assert_eq!(reads, vec!["excursions", "tours"]);
    assert_eq!(harness.session.catalog().tour_list(), support::tours().as_slice());
}

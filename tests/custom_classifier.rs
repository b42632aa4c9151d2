//! The process-wide classifier table is installed once, before first use.
//!
//! Lives in its own test binary so the `OnceLock` freeze does not interfere
//! with other tests.

use evcore::codes::NumericNames;
use evcore::event::{InputEvent, RelEvent, TypedEvent};
use evcore::{classify, init_classifier, Classifier, Error};

const EV_VENDOR: u16 = 0x42;

#[test]
fn installed_table_wins_over_the_default() {
    let mut table = Classifier::default();
    table.register(EV_VENDOR, |ev, _| TypedEvent::Rel(RelEvent::new(ev)));
    init_classifier(table).expect("first initialization succeeds");

    let typed = classify(InputEvent::new(0, 0, EV_VENDOR, 1, 1), &NumericNames).unwrap();
    assert!(matches!(typed, TypedEvent::Rel(_)));

    // The table is frozen after installation.
    assert!(init_classifier(Classifier::empty()).is_err());

    assert_eq!(
        classify(InputEvent::new(0, 0, 0x1f, 0, 0), &NumericNames),
        Err(Error::Unclassified(0x1f))
    );
}

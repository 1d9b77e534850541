//! End-to-end walk through the field's lifetime: construction, focus and
//! text events, and a clear tap, with all three observers attached.

use std::cell::RefCell;
use std::rc::Rc;

use field_core::{ClearableField, FieldGeometry};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Text(String, usize, usize, usize),
    Focus(bool),
    Cleared(String),
}

#[test]
fn full_lifecycle_scenario() {
    let log: Rc<RefCell<Vec<Event>>> = Rc::new(RefCell::new(Vec::new()));

    let mut field = ClearableField::default();

    let sink = log.clone();
    field.set_text_change_observer(Some(Box::new(
        move |text: &str, start: usize, before: usize, after: usize| {
            sink.borrow_mut()
                .push(Event::Text(text.to_owned(), start, before, after));
        },
    )));

    let sink = log.clone();
    field.set_focus_observer(Some(Box::new(
        move |_: &ClearableField, has_focus: bool| {
            sink.borrow_mut().push(Event::Focus(has_focus));
        },
    )));

    let sink = log.clone();
    field.set_clear_observer(Some(Box::new(move |field: &ClearableField| {
        sink.borrow_mut()
            .push(Event::Cleared(field.text().to_owned()));
    })));

    let geometry = FieldGeometry::new(200.0, 40.0);

    // Constructed with no configuration: icon hidden.
    assert!(!field.icon_visible());

    // Gain focus with empty text: stays hidden.
    field.handle_focus_change(true);
    assert!(!field.icon_visible());

    // Type "a": becomes visible, observer receives ("a", 0, 0, 1).
    field.set_text("a");
    assert!(field.icon_visible());

    // Lose focus: hidden again.
    field.handle_focus_change(false);
    assert!(!field.icon_visible());

    // Regain focus: visible again, text still "a".
    field.handle_focus_change(true);
    assert!(field.icon_visible());
    assert_eq!(field.text(), "a");

    // Tap inside the icon band: text emptied, clear observer fired,
    // icon hidden by the recompute that the clear itself triggers.
    let cleared = field.handle_pointer_up(180.0, 20.0, geometry);
    assert!(cleared);
    assert_eq!(field.text(), "");
    assert!(!field.icon_visible());

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Focus(true),
            Event::Text("a".to_owned(), 0, 0, 1),
            Event::Focus(false),
            Event::Focus(true),
            Event::Text(String::new(), 0, 1, 0),
            Event::Cleared(String::new()),
        ]
    );
}

#[test]
fn tap_after_clear_is_inert() {
    let mut field = ClearableField::default();
    let geometry = FieldGeometry::new(200.0, 40.0);

    field.handle_focus_change(true);
    field.set_text("abc");
    assert!(field.handle_pointer_up(180.0, 20.0, geometry));

    // Icon is hidden now; a second tap at the same spot does nothing.
    assert!(!field.handle_pointer_up(180.0, 20.0, geometry));
    assert_eq!(field.text(), "");
}

//! Property tests for the visibility state machine.

use field_core::{ClearableField, FieldGeometry};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Event {
    Focus(bool),
    Text(String),
    PointerUp(f32, f32),
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        any::<bool>().prop_map(Event::Focus),
        "[a-z€ ]{0,8}".prop_map(Event::Text),
        (0.0f32..220.0, 0.0f32..50.0).prop_map(|(x, y)| Event::PointerUp(x, y)),
    ]
}

proptest! {
    /// After every event, the icon is visible iff the field is focused and
    /// non-empty. (While unfocused the field skips the recompute, but the
    /// equation still holds because visibility was forced to hidden on
    /// focus loss.)
    #[test]
    fn visibility_matches_focus_and_text(events in prop::collection::vec(event(), 0..64)) {
        let mut field = ClearableField::default();
        let geometry = FieldGeometry::new(200.0, 40.0);

        for ev in events {
            match ev {
                Event::Focus(has_focus) => field.handle_focus_change(has_focus),
                Event::Text(text) => field.set_text(text),
                Event::PointerUp(x, y) => {
                    field.handle_pointer_up(x, y, geometry);
                }
            }

            prop_assert_eq!(
                field.icon_visible(),
                field.is_focused() && !field.text().is_empty()
            );
        }
    }

    /// A clear can only ever happen while the icon was visible, and always
    /// leaves the text empty.
    #[test]
    fn clear_requires_visible_icon(events in prop::collection::vec(event(), 0..64)) {
        let mut field = ClearableField::default();
        let geometry = FieldGeometry::new(200.0, 40.0);

        for ev in events {
            match ev {
                Event::Focus(has_focus) => field.handle_focus_change(has_focus),
                Event::Text(text) => field.set_text(text),
                Event::PointerUp(x, y) => {
                    let was_visible = field.icon_visible();
                    let cleared = field.handle_pointer_up(x, y, geometry);
                    if cleared {
                        prop_assert!(was_visible);
                        prop_assert_eq!(field.text(), "");
                    }
                }
            }
        }
    }
}

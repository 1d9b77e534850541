//! Replays arbitrary focus/text/pointer event sequences through a
//! `ClearableField` and checks the visibility invariant after each step.

#![no_main]

use field_core::{ClearableField, FieldGeometry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut field = ClearableField::default();
    let geometry = FieldGeometry::new(200.0, 40.0);

    let mut bytes = data.iter().copied();
    while let Some(op) = bytes.next() {
        match op % 4 {
            0 => field.handle_focus_change(op & 0x04 != 0),
            1 => {
                let len = bytes.next().unwrap_or(0) as usize % 16;
                let text: String = (&mut bytes).take(len).map(|b| (b % 26 + b'a') as char).collect();
                field.set_text(text);
            }
            _ => {
                let x = bytes.next().unwrap_or(0) as f32;
                let y = bytes.next().unwrap_or(0) as f32 / 4.0;
                let was_visible = field.icon_visible();
                let cleared = field.handle_pointer_up(x, y, geometry);
                if cleared {
                    assert!(was_visible);
                    assert!(field.text().is_empty());
                }
            }
        }

        assert_eq!(
            field.icon_visible(),
            field.is_focused() && !field.text().is_empty()
        );
    }
});

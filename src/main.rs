//! Demo app: two clearable fields plus an on-screen event log fed by the
//! fields' observers over an mpsc channel.

use std::sync::mpsc;

use clear_edit::ClearableEdit;
use egui::{CentralPanel, Context, ScrollArea};
use field_core::{ClearableField, FieldConfig};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug)]
enum DemoEvent {
    TextChanged {
        field: &'static str,
        text: String,
        start: usize,
        length_before: usize,
        length_after: usize,
    },
    FocusChanged {
        field: &'static str,
        has_focus: bool,
    },
    Cleared {
        field: &'static str,
    },
}

struct DemoApp {
    name: ClearableEdit,
    search: ClearableEdit,
    events: Vec<String>,
    event_rx: mpsc::Receiver<DemoEvent>,
}

impl DemoApp {
    fn new() -> Self {
        let (tx, event_rx) = mpsc::channel();

        let mut name = ClearableEdit::new().hint_text("Your name");
        attach_observers(name.field_mut(), "name", &tx);

        let mut search = ClearableEdit::with_config(FieldConfig::with_icon_size(22.0))
            .hint_text("Search…");
        attach_observers(search.field_mut(), "search", &tx);

        Self {
            name,
            search,
            events: Vec::new(),
            event_rx,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            let line = match event {
                DemoEvent::TextChanged {
                    field,
                    text,
                    start,
                    length_before,
                    length_after,
                } => format!(
                    "[{field}] text {text:?} (start {start}, -{length_before}, +{length_after})"
                ),
                DemoEvent::FocusChanged { field, has_focus } => {
                    format!("[{field}] focus {has_focus}")
                }
                DemoEvent::Cleared { field } => {
                    info!(field, "field cleared");
                    format!("[{field}] cleared")
                }
            };
            self.events.push(line);
        }
    }

    fn ui(&mut self, ctx: &Context) {
        self.drain_events();

        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Clearable fields");
            ui.add_space(8.0);

            self.name.show(ui);
            ui.add_space(4.0);
            self.search.show(ui);

            ui.add_space(12.0);
            ui.separator();
            ui.label("Observer events:");

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for line in self.events.iter().rev() {
                    ui.monospace(line);
                }
            });
        });
    }
}

fn attach_observers(
    field: &mut ClearableField,
    tag: &'static str,
    tx: &mpsc::Sender<DemoEvent>,
) {
    let sink = tx.clone();
    field.set_text_change_observer(Some(Box::new(
        move |text: &str, start: usize, length_before: usize, length_after: usize| {
            let _ = sink.send(DemoEvent::TextChanged {
                field: tag,
                text: text.to_owned(),
                start,
                length_before,
                length_after,
            });
        },
    )));

    let sink = tx.clone();
    field.set_focus_observer(Some(Box::new(
        move |_: &ClearableField, has_focus: bool| {
            let _ = sink.send(DemoEvent::FocusChanged {
                field: tag,
                has_focus,
            });
        },
    )));

    let sink = tx.clone();
    field.set_clear_observer(Some(Box::new(move |_: &ClearableField| {
        let _ = sink.send(DemoEvent::Cleared { field: tag });
    })));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut app = DemoApp::new();
    platform::run("clearfield demo", Box::new(move |ctx| app.ui(ctx)));
}

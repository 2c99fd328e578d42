//! Integration-style engine tests exercising the mutation pipeline, the
//! debounce flow, persistence, and the mode machine against test doubles.

mod presentation_mode;

use super::*;
use crate::clock::ManualClock;
use crate::frontend::{EditSurfaces, FormattingLayer, PlatformShell, RenderBoundary};
use slidedeck_core::{EditorError, MemoryStore, Slide, SlideField, SlideListEntry};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Everything the doubles recorded, for assertions.
#[derive(Default)]
struct RenderLog {
    /// Each list render: (number, title) rows plus the selected id.
    lists: Vec<(Vec<(usize, String)>, Option<String>)>,
    /// Each canvas render: the rendered slide id, or `None` for the
    /// placeholder.
    canvases: Vec<Option<String>>,
}

#[derive(Clone, Default)]
struct RecordingRender {
    log: Arc<Mutex<RenderLog>>,
}

impl RenderBoundary for RecordingRender {
    fn render_list(&mut self, entries: &[SlideListEntry<'_>], selected_id: Option<&str>) {
        let rows = entries
            .iter()
            .map(|entry| (entry.number, entry.slide.title.clone()))
            .collect();
        self.log
            .lock()
            .unwrap()
            .lists
            .push((rows, selected_id.map(str::to_string)));
    }

    fn render_canvas(&mut self, slide: Option<&Slide>) {
        self.log
            .lock()
            .unwrap()
            .canvases
            .push(slide.map(|slide| slide.id.clone()));
    }
}

/// Surface double: the test scripts what "is on screen" per field.
#[derive(Clone, Default)]
struct ScriptedSurfaces {
    values: Arc<Mutex<HashMap<SlideField, String>>>,
}

impl ScriptedSurfaces {
    fn set(&self, field: SlideField, value: &str) {
        self.values.lock().unwrap().insert(field, value.to_string());
    }

    fn clear(&self) {
        self.values.lock().unwrap().clear();
    }
}

impl EditSurfaces for ScriptedSurfaces {
    fn current_value(&self, field: SlideField) -> Option<String> {
        self.values.lock().unwrap().get(&field).cloned()
    }
}

#[derive(Default)]
struct PlatformState {
    fullscreen: bool,
    keys_installed: bool,
    refuse_fullscreen: bool,
    enter_calls: usize,
    exit_calls: usize,
}

#[derive(Clone, Default)]
struct FakePlatform {
    state: Arc<Mutex<PlatformState>>,
}

impl PlatformShell for FakePlatform {
    fn enter_fullscreen(&mut self) -> Result<(), String> {
        let mut state = self.state.lock().unwrap();
        state.enter_calls += 1;
        if state.refuse_fullscreen {
            return Err("fullscreen denied by platform".to_string());
        }
        state.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), String> {
        let mut state = self.state.lock().unwrap();
        state.exit_calls += 1;
        state.fullscreen = false;
        Ok(())
    }

    fn install_presentation_keys(&mut self) {
        self.state.lock().unwrap().keys_installed = true;
    }

    fn remove_presentation_keys(&mut self) {
        self.state.lock().unwrap().keys_installed = false;
    }
}

#[derive(Clone)]
struct FakeFormatting {
    succeed: Arc<AtomicBool>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeFormatting {
    fn default() -> Self {
        Self {
            succeed: Arc::new(AtomicBool::new(true)),
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FormattingLayer for FakeFormatting {
    fn exec_command(&mut self, command: &str, _value: Option<&str>) -> bool {
        self.executed.lock().unwrap().push(command.to_string());
        self.succeed.load(Ordering::SeqCst)
    }
}

struct TestHarness {
    editor: SlideEditor,
    clock: ManualClock,
    store: MemoryStore,
    render: RecordingRender,
    surfaces: ScriptedSurfaces,
    platform: FakePlatform,
    formatting: FakeFormatting,
}

impl TestHarness {
    fn lists(&self) -> Vec<(Vec<(usize, String)>, Option<String>)> {
        self.render.log.lock().unwrap().lists.clone()
    }

    fn canvases(&self) -> Vec<Option<String>> {
        self.render.log.lock().unwrap().canvases.clone()
    }

    fn list_render_count(&self) -> usize {
        self.render.log.lock().unwrap().lists.len()
    }

    fn selected_id(&self) -> String {
        self.editor
            .state()
            .selected_slide_id
            .clone()
            .expect("a slide is selected")
    }

    /// Step past the field-edit debounce window and flush.
    fn flush_debounce(&mut self) {
        self.clock.advance(Duration::from_millis(301));
        self.editor.tick();
    }
}

fn make_editor() -> TestHarness {
    make_editor_with_store(MemoryStore::new())
}

fn make_editor_with_store(store: MemoryStore) -> TestHarness {
    let clock = ManualClock::new();
    let render = RecordingRender::default();
    let surfaces = ScriptedSurfaces::default();
    let platform = FakePlatform::default();
    let formatting = FakeFormatting::default();
    let config = Config::default();
    let mut editor = SlideEditor::new(
        config,
        Box::new(store.clone()),
        Frontend {
            render: Box::new(render.clone()),
            surfaces: Box::new(surfaces.clone()),
            platform: Box::new(platform.clone()),
            formatting: Box::new(formatting.clone()),
        },
        Box::new(clock.clone()),
    );
    editor.init();
    TestHarness {
        editor,
        clock,
        store,
        render,
        surfaces,
        platform,
        formatting,
    }
}

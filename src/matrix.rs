//! Matrix controller - the surface a rendering layer drives.
//!
//! One controller exists per mounted matrix. It owns the selection engine,
//! the hit-test index for the current layout and a release subscription,
//! and applies every mutation straight to the range passed in by the
//! caller. Dropping the controller (unmounting) removes its release
//! listener, so a stale drag can never leak into another instance.

use crate::action::{ActionButton, CellStyle, resolve_style};
use crate::constants::GRID_SIZE;
use crate::hand::{HandClass, HandGrid};
use crate::input::{
    CellIndex, CellLayout, HandMutation, PointerEvent, ReleaseHub, ReleaseSubscription,
    SelectionContext, SelectionEngine,
};
use crate::store::Range;
use parking_lot::Mutex;
use std::sync::Arc;

/// Styles of all 169 cells in grid order.
pub type StyleGrid = [[CellStyle; GRID_SIZE]; GRID_SIZE];

pub struct MatrixController {
    engine: Arc<Mutex<SelectionEngine>>,
    grid: &'static HandGrid,
    layout: CellLayout,
    index: CellIndex,
    read_only: bool,
    disabled: bool,
    _release: ReleaseSubscription,
}

impl MatrixController {
    /// Mount a matrix drawn with `layout`, listening for releases on `hub`.
    pub fn mount(hub: &ReleaseHub, layout: CellLayout) -> Self {
        let engine = Arc::new(Mutex::new(SelectionEngine::new()));
        let listener = Arc::clone(&engine);
        let release = hub.subscribe(move || listener.lock().release());
        let grid = HandGrid::standard();

        Self {
            engine,
            grid,
            layout,
            index: CellIndex::build(grid, &layout),
            read_only: false,
            disabled: false,
            _release: release,
        }
    }

    pub fn grid(&self) -> &'static HandGrid {
        self.grid
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// Re-layout after a zoom change or window resize.
    pub fn set_layout(&mut self, layout: CellLayout) {
        self.layout = layout;
        self.index = CellIndex::build(self.grid, &layout);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.engine.lock().cancel();
        }
    }

    /// Disabled matrices (background previews) drop any drag in progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.engine.lock().cancel();
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.lock().is_dragging()
    }

    pub fn mouse_down(&self, hand: HandClass, range: &mut Range, active_action: &str) -> Option<HandMutation> {
        self.dispatch(PointerEvent::Press(hand), range, active_action)
    }

    pub fn mouse_enter(&self, hand: HandClass, range: &mut Range, active_action: &str) -> Option<HandMutation> {
        self.dispatch(PointerEvent::Enter(hand), range, active_action)
    }

    /// Touch move at screen coordinates; resolved to a cell by hit testing.
    pub fn touch_move(&self, x: f32, y: f32, range: &mut Range, active_action: &str) -> Option<HandMutation> {
        let hand = self.index.hit(x, y)?;
        self.dispatch(PointerEvent::Enter(hand), range, active_action)
    }

    pub fn click(&self, hand: HandClass, range: &mut Range, active_action: &str) -> Option<HandMutation> {
        self.dispatch(PointerEvent::Click(hand), range, active_action)
    }

    /// Local release, for shells that route releases directly instead of
    /// through the hub.
    pub fn release(&self) {
        self.engine.lock().release();
    }

    fn dispatch(&self, event: PointerEvent, range: &mut Range, active_action: &str) -> Option<HandMutation> {
        let mutation = {
            let ctx = SelectionContext::new(active_action, &range.hands)
                .read_only(self.read_only)
                .disabled(self.disabled);
            self.engine.lock().handle(event, &ctx)
        }?;
        range.apply(&mutation, active_action);
        Some(mutation)
    }

    pub fn style_of(&self, hand: HandClass, range: &Range, actions: &[ActionButton]) -> CellStyle {
        resolve_style(hand, &range.hands, actions)
    }

    pub fn styles(&self, range: &Range, actions: &[ActionButton]) -> StyleGrid {
        let rows = self.grid.rows();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| resolve_style(rows[row][col], &range.hands, actions))
        })
    }
}

use egui::{PointerButton, Pos2};

use super::{CanvasTransform, PointerEvent};
use crate::command::{ActionQueue, Dispatch, Store};
use crate::error::Result;
use crate::picture::GridPos;
use crate::tools::{Continuation, ToolRegistry};

struct ActiveGesture {
    /// Last cell reported to the tool
    last: GridPos,
    on_move: Continuation,
}

/// Drives one pointer gesture (down, drag, up) through the active tool.
///
/// Actions a tool dispatches are collected while it reads the state and then
/// replayed through the store, so every call sees the state left by the
/// previous one.
#[derive(Default)]
pub struct GestureSession {
    active: Option<ActiveGesture>,
}

impl std::fmt::Debug for GestureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureSession")
            .field("last", &self.active.as_ref().map(|gesture| gesture.last))
            .finish()
    }
}

fn flush(mut queue: ActionQueue, store: &mut Store) {
    for action in queue.drain() {
        store.dispatch(action);
    }
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a tool is following the pointer
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a gesture at `pos` with the tool named in the current state
    pub fn begin(&mut self, pos: GridPos, tools: &ToolRegistry, store: &mut Store) -> Result<()> {
        self.active = None;
        let tool = tools.get(&store.state().tool)?;

        let mut queue = ActionQueue::new();
        let on_move = tool(pos, store.state(), &mut queue)?;
        flush(queue, store);

        if let Some(on_move) = on_move {
            self.active = Some(ActiveGesture { last: pos, on_move });
        }
        Ok(())
    }

    /// Continue the gesture. Repeated reports of the same cell are dropped.
    /// A position the tool rejects is not remembered as the last cell.
    pub fn drag(&mut self, pos: GridPos, store: &mut Store) -> Result<()> {
        let Some(gesture) = self.active.as_mut() else {
            return Ok(());
        };
        if gesture.last == pos {
            return Ok(());
        }

        let mut queue = ActionQueue::new();
        (gesture.on_move)(pos, store.state(), &mut queue)?;
        gesture.last = pos;
        flush(queue, store);
        Ok(())
    }

    /// Finish the gesture. Edits already made stay in place.
    pub fn end(&mut self) {
        self.active = None;
    }

    fn grid_pos(&self, position: Pos2, transform: &CanvasTransform, store: &Store) -> Option<GridPos> {
        let pos = transform.to_grid(position);
        if store.state().picture.contains(pos) {
            Some(pos)
        } else {
            log::debug!("Ignoring pointer outside the grid at ({}, {})", pos.x, pos.y);
            None
        }
    }

    /// Translate a screen-space pointer event into gesture calls
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        transform: &CanvasTransform,
        tools: &ToolRegistry,
        store: &mut Store,
    ) -> Result<()> {
        match event {
            PointerEvent::Pressed { position, button } => {
                if *button != PointerButton::Primary {
                    return Ok(());
                }
                match self.grid_pos(*position, transform, store) {
                    Some(pos) => self.begin(pos, tools, store),
                    None => Ok(()),
                }
            }
            PointerEvent::Moved {
                position,
                primary_down,
            } => {
                if !*primary_down {
                    self.end();
                    return Ok(());
                }
                match self.grid_pos(*position, transform, store) {
                    Some(pos) => self.drag(pos, store),
                    None => Ok(()),
                }
            }
            PointerEvent::Released { button } => {
                if *button == PointerButton::Primary {
                    self.end();
                }
                Ok(())
            }
            PointerEvent::TouchStart { touches } => {
                let first = touches.first().and_then(|first| self.grid_pos(*first, transform, store));
                match first {
                    Some(pos) => self.begin(pos, tools, store),
                    None => Ok(()),
                }
            }
            PointerEvent::TouchMove { touches } => {
                let first = touches.first().and_then(|first| self.grid_pos(*first, transform, store));
                match first {
                    Some(pos) => self.drag(pos, store),
                    None => Ok(()),
                }
            }
            PointerEvent::TouchEnd => {
                self.end();
                Ok(())
            }
        }
    }
}

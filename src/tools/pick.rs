use super::Continuation;
use crate::command::{Action, Dispatch};
use crate::error::Result;
use crate::picture::GridPos;
use crate::state::AppState;

/// Color picker: makes the color under the pointer the current color
pub fn pick(pos: GridPos, state: &AppState, dispatch: &mut dyn Dispatch) -> Result<Option<Continuation>> {
    let color = state.picture.pixel_at(pos)?;
    log::debug!("Picked {} at ({}, {})", color, pos.x, pos.y);
    dispatch.dispatch(Action::set_color(color));
    Ok(None)
}

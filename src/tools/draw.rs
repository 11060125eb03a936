use super::Continuation;
use crate::command::{Action, Dispatch};
use crate::error::Result;
use crate::picture::{Edit, GridPos};
use crate::state::AppState;

fn draw_pixel(pos: GridPos, state: &AppState, dispatch: &mut dyn Dispatch) -> Result<()> {
    let mut edit = Edit::with_capacity(1);
    edit.push(pos, state.color);
    dispatch.dispatch(Action::set_picture(state.picture.draw(&edit)?));
    Ok(())
}

/// Freehand drawing.
///
/// Paints the cell under the pointer, then every cell the drag reports.
/// Cells skipped between two samples of a fast drag stay untouched.
pub fn draw(pos: GridPos, state: &AppState, dispatch: &mut dyn Dispatch) -> Result<Option<Continuation>> {
    draw_pixel(pos, state, dispatch)?;
    Ok(Some(Box::new(draw_pixel)))
}

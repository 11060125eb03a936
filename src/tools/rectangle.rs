use super::Continuation;
use crate::color::Color;
use crate::command::{Action, Dispatch};
use crate::error::Result;
use crate::picture::{Edit, GridPos};
use crate::state::AppState;

/// Every cell of the inclusive rectangle spanned by `start` and `pos`.
///
/// The edit holds one write per cell, so callers keep both corners on the grid.
pub fn rectangle_edit(start: GridPos, pos: GridPos, color: Color) -> Edit {
    let (x_start, x_end) = (start.x.min(pos.x), start.x.max(pos.x));
    let (y_start, y_end) = (start.y.min(pos.y), start.y.max(pos.y));

    let span = |from: i32, to: i32| usize::try_from(i64::from(to) - i64::from(from) + 1).ok();
    let cells = span(x_start, x_end)
        .zip(span(y_start, y_end))
        .and_then(|(w, h)| w.checked_mul(h))
        .unwrap_or(0);
    let mut edit = Edit::with_capacity(cells);
    for y in y_start..=y_end {
        for x in x_start..=x_end {
            edit.push(GridPos::new(x, y), color);
        }
    }
    edit
}

/// Filled rectangle anchored at the gesture start.
///
/// Each drag step redraws the whole rectangle from the anchor to the pointer
/// over the picture as it was when the gesture began, so a new step replaces
/// the previous preview instead of adding to it.
pub fn rectangle(
    start: GridPos,
    state: &AppState,
    dispatch: &mut dyn Dispatch,
) -> Result<Option<Continuation>> {
    let base = state.picture.clone();
    let draw_rectangle = move |pos: GridPos, state: &AppState, dispatch: &mut dyn Dispatch| -> Result<()> {
        // Both corners must be on the grid before the edit is sized
        base.pixel_at(pos)?;
        let edit = rectangle_edit(start, pos, state.color);
        dispatch.dispatch(Action::set_picture(base.draw(&edit)?));
        Ok(())
    };
    draw_rectangle(start, state, dispatch)?;
    Ok(Some(Box::new(draw_rectangle)))
}

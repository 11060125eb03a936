use std::collections::VecDeque;

use super::Continuation;
use crate::command::{Action, Dispatch};
use crate::error::Result;
use crate::picture::{Edit, GridPos, Picture};
use crate::state::AppState;

const AROUND: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cells 4-connected to `start` that share its color, in breadth-first order.
///
/// The target color is read once from `start`. Every cell is admitted at most
/// once, so the result never exceeds `width * height` cells.
pub fn flood_region(picture: &Picture, start: GridPos) -> Result<Vec<GridPos>> {
    let target = picture.pixel_at(start)?;
    let width = picture.width();
    let mut visited = vec![false; width * picture.height()];
    let index = |pos: GridPos| pos.x as usize + pos.y as usize * width;

    visited[index(start)] = true;
    let mut region = vec![start];
    let mut frontier = VecDeque::from([start]);

    while let Some(pos) = frontier.pop_front() {
        for (dx, dy) in AROUND {
            let next = GridPos::new(pos.x + dx, pos.y + dy);
            if !picture.contains(next) || visited[index(next)] {
                continue;
            }
            if picture.pixel_at(next)? == target {
                visited[index(next)] = true;
                region.push(next);
                frontier.push_back(next);
            }
        }
    }
    Ok(region)
}

/// Flood fill. Recolors the whole region in one edit and ignores the drag.
pub fn fill(start: GridPos, state: &AppState, dispatch: &mut dyn Dispatch) -> Result<Option<Continuation>> {
    let region = flood_region(&state.picture, start)?;
    let mut edit = Edit::with_capacity(region.len());
    for pos in region {
        edit.push(pos, state.color);
    }
    log::debug!("Flood fill from ({}, {}) covers {} cells", start.x, start.y, edit.len());
    dispatch.dispatch(Action::set_picture(state.picture.draw(&edit)?));
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_region_stops_at_other_colors() {
        // A vertical wall at x == 2 splits the grid in two
        let mut wall = Edit::new();
        for y in 0..4 {
            wall.push(GridPos::new(2, y), Color::BLACK);
        }
        let picture = Picture::empty(5, 4, Color::WHITE).unwrap().draw(&wall).unwrap();

        let region = flood_region(&picture, GridPos::new(0, 0)).unwrap();
        assert_eq!(region.len(), 8);
        assert!(region.iter().all(|pos| pos.x < 2));
    }

    #[test]
    fn test_region_ignores_diagonals() {
        let mut edit = Edit::new();
        edit.push(GridPos::new(0, 0), Color::BLACK);
        edit.push(GridPos::new(1, 1), Color::BLACK);
        let picture = Picture::empty(3, 3, Color::WHITE).unwrap().draw(&edit).unwrap();

        let region = flood_region(&picture, GridPos::new(0, 0)).unwrap();
        assert_eq!(region, vec![GridPos::new(0, 0)]);
    }

    #[test]
    fn test_region_on_uniform_grid_visits_each_cell_once() {
        let picture = Picture::empty(30, 20, Color::WHITE).unwrap();
        let region = flood_region(&picture, GridPos::new(15, 10)).unwrap();
        assert_eq!(region.len(), 600);
        assert_eq!(region[0], GridPos::new(15, 10));
    }

    #[test]
    fn test_region_rejects_out_of_bounds_start() {
        let picture = Picture::empty(3, 3, Color::WHITE).unwrap();
        assert!(flood_region(&picture, GridPos::new(3, 0)).is_err());
    }
}

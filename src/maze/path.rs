use std::collections::{HashMap, HashSet, LinkedList};

use crate::{Direction, Position};

use super::Grid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    moves: Vec<Direction>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn encode(&self) -> String {
        self.moves.iter().map(|dir| dir.step_char()).collect()
    }
}

pub fn shortest_path(grid: &Grid, from: &Position, to: &Position) -> Option<Path> {
    if !grid.cell(from).is_some_and(|cell| cell.can_pass())
        || !grid.cell(to).is_some_and(|cell| cell.can_pass())
    {
        return None;
    }

    let mut search_positions = LinkedList::from([from.clone()]);
    let mut move_to_reach: HashMap<Position, Option<(Position, Direction)>> =
        HashMap::from([(from.clone(), None)]);
    while let Some(cur_pos) = search_positions.pop_front() {
        if cur_pos == *to {
            return Some(backtrack(&move_to_reach, from, to));
        }

        for dir in Direction::all_dirs() {
            if let Some(next_pos) = cur_pos.neighbor(*dir) {
                if grid.cell(&next_pos).is_some_and(|cell| cell.can_pass())
                    && !move_to_reach.contains_key(&next_pos)
                {
                    move_to_reach.insert(next_pos.clone(), Some((cur_pos.clone(), *dir)));
                    search_positions.push_back(next_pos);
                }
            }
        }
    }

    None
}

pub fn reachable_cell_count(grid: &Grid, from: &Position) -> usize {
    if !grid.cell(from).is_some_and(|cell| cell.can_pass()) {
        return 0;
    }

    let mut search_positions = LinkedList::from([from.clone()]);
    let mut searched_positions = HashSet::from([from.clone()]);
    while let Some(cur_pos) = search_positions.pop_front() {
        for dir in Direction::all_dirs() {
            if let Some(next_pos) = cur_pos.neighbor(*dir) {
                if grid.cell(&next_pos).is_some_and(|cell| cell.can_pass())
                    && searched_positions.insert(next_pos.clone())
                {
                    search_positions.push_back(next_pos);
                }
            }
        }
    }

    searched_positions.len()
}

fn backtrack(
    move_to_reach: &HashMap<Position, Option<(Position, Direction)>>,
    from: &Position,
    to: &Position,
) -> Path {
    let mut moves = Vec::new();
    let mut cur_pos = to.clone();
    while cur_pos != *from {
        if let Some(Some((prev_pos, dir))) = move_to_reach.get(&cur_pos) {
            moves.push(*dir);
            cur_pos = prev_pos.clone();
        } else {
            break;
        }
    }

    moves.reverse();
    Path { moves }
}

// This file is part of WordGrid.
//
// WordGrid is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGrid is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGrid. If
// not, see <https://www.gnu.org/licenses/>.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::grid::{Coord, Direction, Grid, VisitedMask};
use crate::trie::PrefixIndex;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

// Both ends one-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundWord {
    pub word: String,
    pub start: Coord,
    pub end: Coord,
}

impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{} {} -> {}", self.word, self.start, self.end);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub min_word_length: usize,
    pub ignore: HashSet<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        return Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            ignore: HashSet::new(),
        };
    }
}

impl SearchOptions {
    pub fn new(min_word_length: usize, ignore: HashSet<String>) -> Self {
        return Self { min_word_length, ignore };
    }

    fn accepts(&self, word: &str) -> bool {
        return word.chars().count() >= self.min_word_length && !self.ignore.contains(word);
    }
}

/// Finds every word from `index` that reads in a straight line somewhere in `grid`.
///
/// Start cells are tried in row-major order and, from each one, the directions in
/// [`Direction::ALL`] order. A word found along several paths is reported once, at the first
/// path in that order. Words shorter than `min_word_length` or in `ignore` are left out.
pub fn search_words(
    grid: &Grid,
    index: &PrefixIndex,
    ignore: &HashSet<String>,
    min_word_length: usize,
) -> Vec<FoundWord> {
    let options = SearchOptions::new(min_word_length, ignore.clone());
    return search(grid, index, &options);
}

pub fn search(grid: &Grid, index: &PrefixIndex, options: &SearchOptions) -> Vec<FoundWord> {
    if grid.is_empty() {
        debug!("Empty grid; nothing to search");
        return Vec::new();
    }

    let mut found = HashSet::new();
    let mut visited = VisitedMask::for_grid(grid);
    let mut results = Vec::new();

    for start in grid.coords() {
        search_from(grid, index, options, start, &mut visited, &mut found, &mut results);
    }

    info!("Found {} words in a {}x{} grid", results.len(), grid.rows(), grid.cols());
    return results;
}

// Same results in the same order as search(), one rayon task per row.
pub fn search_parallel(grid: &Grid, index: &PrefixIndex, options: &SearchOptions) -> Vec<FoundWord> {
    if grid.is_empty() {
        debug!("Empty grid; nothing to search");
        return Vec::new();
    }

    let per_row: Vec<Vec<FoundWord>> = (0..grid.rows())
        .into_par_iter()
        .map(|row| {
            let mut found = HashSet::new();
            let mut visited = VisitedMask::for_grid(grid);
            let mut results = Vec::new();
            for start in grid.row_coords(row) {
                search_from(grid, index, options, start, &mut visited, &mut found, &mut results);
            }
            results
        })
        .collect();

    // Rows only de-duplicate against themselves, so the first row to find a word wins here.
    let mut found = HashSet::new();
    let results: Vec<FoundWord> = per_row
        .into_iter()
        .flatten()
        .filter(|hit| found.insert(hit.word.clone()))
        .collect();

    info!("Found {} words in a {}x{} grid", results.len(), grid.rows(), grid.cols());
    return results;
}

pub fn search_words_parallel(
    grid: &Grid,
    index: &PrefixIndex,
    ignore: &HashSet<String>,
    min_word_length: usize,
) -> Vec<FoundWord> {
    let options = SearchOptions::new(min_word_length, ignore.clone());
    return search_parallel(grid, index, &options);
}

fn search_from(
    grid: &Grid,
    index: &PrefixIndex,
    options: &SearchOptions,
    start: Coord,
    visited: &mut VisitedMask,
    found: &mut HashSet<String>,
    results: &mut Vec<FoundWord>,
) {
    for direction in Direction::ALL {
        walk(grid, index, options, start, direction, visited, found, results);
        visited.reset();
    }
}

#[allow(clippy::too_many_arguments)]
fn walk(
    grid: &Grid,
    index: &PrefixIndex,
    options: &SearchOptions,
    start: Coord,
    direction: Direction,
    visited: &mut VisitedMask,
    found: &mut HashSet<String>,
    results: &mut Vec<FoundWord>,
) {
    let mut node = index.root();
    let mut word = String::new();
    let mut cursor = Some(start);

    while let Some(cell) = cursor {
        if visited.is_marked(cell) { return; }
        let Some(letter) = grid.get(cell) else { return; };
        let Some(next) = index.child(node, letter) else { return; };

        visited.mark(cell);
        word.push(letter.to_ascii_uppercase());
        node = next;

        if index.is_terminal(node) && options.accepts(&word) && !found.contains(&word) {
            trace!("{} from {} to {} going {:?}", word, start, cell, direction);
            found.insert(word.clone());
            results.push(FoundWord {
                word: word.clone(),
                start: start.one_based(),
                end: cell.one_based(),
            });
        }

        cursor = cell.step(direction);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn index(words: &[&str]) -> PrefixIndex {
        return words.iter().copied().collect();
    }

    fn ignore(words: &[&str]) -> HashSet<String> {
        return words.iter().map(|w| w.to_string()).collect();
    }

    fn hit(word: &str, start: (usize, usize), end: (usize, usize)) -> FoundWord {
        return FoundWord {
            word: word.to_string(),
            start: Coord::new(start.0, start.1),
            end: Coord::new(end.0, end.1),
        };
    }

    fn cat_dog() -> Grid {
        return Grid::from_lines(["C A T", "X X X", "D O G"]);
    }

    #[test]
    fn finds_rows_left_to_right() {
        let results = search_words(&cat_dog(), &index(&["CAT", "DOG"]), &ignore(&[]), 3);
        assert_eq!(results, vec![hit("CAT", (1, 1), (1, 3)), hit("DOG", (3, 1), (3, 3))]);
    }

    #[test]
    fn ignored_words_are_dropped() {
        let results = search_words(&cat_dog(), &index(&["CAT", "DOG"]), &ignore(&["DOG"]), 3);
        assert_eq!(results, vec![hit("CAT", (1, 1), (1, 3))]);
    }

    #[test]
    fn short_words_are_dropped_at_emission() {
        let results = search_words(&cat_dog(), &index(&["AT"]), &ignore(&[]), 3);
        assert!(results.is_empty());

        let results = search_words(&cat_dog(), &index(&["AT", "ATX"]), &ignore(&[]), 3);
        assert!(results.is_empty());

        let results = search_words(&cat_dog(), &index(&["AT", "AXO"]), &ignore(&[]), 3);
        assert_eq!(results, vec![hit("AXO", (1, 2), (3, 2))]);

        let results = search_words(&cat_dog(), &index(&["AT"]), &ignore(&[]), 2);
        assert_eq!(results, vec![hit("AT", (1, 2), (1, 3))]);
    }

    #[test]
    fn prefix_shorter_than_minimum_still_leads_to_longer_words() {
        let grid = Grid::from_lines(["CATS"]);
        let results = search_words(&grid, &index(&["CA", "CATS"]), &ignore(&[]), 4);
        assert_eq!(results, vec![hit("CATS", (1, 1), (1, 4))]);
    }

    #[test]
    fn every_direction_is_searched() {
        let grid = Grid::from_lines(["ABC", "DEF", "GHI"]);
        let words = ["EA", "EB", "EC", "EF", "EI", "EH", "EG", "ED"];
        let results = search_words(&grid, &index(&words), &ignore(&[]), 2);

        assert_eq!(
            results,
            vec![
                hit("EA", (2, 2), (1, 1)),
                hit("EB", (2, 2), (1, 2)),
                hit("EC", (2, 2), (1, 3)),
                hit("EF", (2, 2), (2, 3)),
                hit("EI", (2, 2), (3, 3)),
                hit("EH", (2, 2), (3, 2)),
                hit("EG", (2, 2), (3, 1)),
                hit("ED", (2, 2), (2, 1)),
            ]
        );
    }

    #[test]
    fn repeated_words_are_reported_once() {
        let grid = Grid::from_lines(["TOT", "OXO", "TOT"]);
        let results = search_words(&grid, &index(&["TOT"]), &ignore(&[]), 3);
        assert_eq!(results, vec![hit("TOT", (1, 1), (1, 3))]);
    }

    #[test]
    fn palindromes_are_reported_from_the_first_start_cell() {
        let grid = Grid::from_lines(["XBOBX"]);
        let results = search_words(&grid, &index(&["BOB"]), &ignore(&[]), 3);
        assert_eq!(results, vec![hit("BOB", (1, 2), (1, 4))]);
    }

    #[test]
    fn nested_words_are_all_reported() {
        let grid = Grid::from_lines(["CATSUP"]);
        let results = search_words(&grid, &index(&["CAT", "CATS", "CATSUP", "SUP"]), &ignore(&[]), 3);
        assert_eq!(
            results,
            vec![
                hit("CAT", (1, 1), (1, 3)),
                hit("CATS", (1, 1), (1, 4)),
                hit("CATSUP", (1, 1), (1, 6)),
                hit("SUP", (1, 4), (1, 6)),
            ]
        );
    }

    #[test]
    fn empty_grids_yield_nothing() {
        let words = index(&["CAT"]);
        assert!(search_words(&Grid::default(), &words, &ignore(&[]), 3).is_empty());
        assert!(search_words(&Grid::new(vec![vec![]]), &words, &ignore(&[]), 3).is_empty());
        assert!(search_parallel(&Grid::default(), &words, &SearchOptions::default()).is_empty());
    }

    #[test]
    fn single_cell_word_starts_and_ends_in_place() {
        let grid = Grid::from_lines(["A"]);
        let results = search_words(&grid, &index(&["A"]), &ignore(&[]), 1);
        assert_eq!(results, vec![hit("A", (1, 1), (1, 1))]);

        let results = search_words(&grid, &index(&["A"]), &ignore(&[]), 0);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn non_letter_cells_end_the_walk() {
        let grid = Grid::new(vec![vec!['C', '#', 'T'], vec!['C', 'A', 'T']]);
        let results = search_words(&grid, &index(&["CAT", "C#T"]), &ignore(&[]), 3);
        assert_eq!(results, vec![hit("CAT", (2, 1), (2, 3))]);
    }

    #[test]
    fn lowercase_cells_match_uppercase_words() {
        let grid = Grid::new(vec![vec!['c', 'a', 't']]);
        let results = search_words(&grid, &index(&["CAT"]), &ignore(&[]), 3);
        assert_eq!(results, vec![hit("CAT", (1, 1), (1, 3))]);
    }

    #[test]
    fn ragged_grids_are_searched_without_panicking() {
        let grid = Grid::new(vec![vec!['D', 'O', 'G'], vec!['O'], vec!['G', 'O', 'D']]);
        let results = search_words(&grid, &index(&["DOG", "GOD"]), &ignore(&[]), 3);
        assert_eq!(
            results,
            vec![
                hit("DOG", (1, 1), (1, 3)),
                hit("GOD", (1, 3), (1, 1)),
            ]
        );
    }

    #[test]
    fn parallel_search_matches_sequential() {
        let grid = Grid::from_lines([
            "TOTEM",
            "OXOXE",
            "TOTEM",
            "MEMOX",
            "STOAT",
        ]);
        let words = index(&["TOT", "TOTE", "TOTEM", "MEM", "OAT", "STOAT", "MOT", "EMO", "TOE"]);
        let options = SearchOptions::new(3, ignore(&["MOT"]));

        let sequential = search(&grid, &words, &options);
        let parallel = search_parallel(&grid, &words, &options);
        assert!(!sequential.is_empty());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn found_word_display() {
        assert_eq!(hit("CAT", (1, 1), (1, 3)).to_string(), "CAT (1,1) -> (1,3)");
    }
}

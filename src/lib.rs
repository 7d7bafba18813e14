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

//! Word search puzzle solver: finds dictionary words written in straight lines, in any of the
//! eight directions, in a grid of letters.

pub mod grid;
pub mod ingest;
pub mod search;
pub mod trie;

pub use grid::{Coord, Direction, Grid, VisitedMask};
pub use ingest::IngestError;
pub use search::{
    search, search_parallel, search_words, search_words_parallel, FoundWord, SearchOptions,
    DEFAULT_MIN_WORD_LENGTH,
};
pub use trie::{NodeId, PrefixIndex};

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

// Word and ignore lists come from hand edits and spreadsheet exports, so blank fields, stray
// whitespace, NaN placeholders and fields that are not UTF-8 are dropped without complaint.
// A grid that is empty or ragged is an error.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, warn};
use thiserror::Error;

use crate::grid::Grid;
use crate::trie::PrefixIndex;

pub const MIN_VOCABULARY_WORD_LENGTH: usize = 3;

// What spreadsheets write for an empty cell.
pub const MISSING_VALUE_MARKER: &str = "NaN";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} contains no grid cells", .path.display())]
    EmptyGrid { path: PathBuf },

    #[error("{}: row {row} has {found} cells, expected {expected}", .path.display())]
    RaggedGrid {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },
}

fn reader<R: io::Read>(source: R) -> csv::Reader<R> {
    return ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);
}

// Raw bytes so that one badly encoded field cannot sink the whole file; each caller decides
// what to do with such fields.
fn records<R: io::Read>(source: R, path: &Path) -> Result<Vec<ByteRecord>, IngestError> {
    return reader(source)
        .byte_records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| IngestError::Csv { path: path.to_owned(), source });
}

fn open(path: &Path) -> Result<File, IngestError> {
    return File::open(path).map_err(|source| IngestError::Open { path: path.to_owned(), source });
}

fn words<'a>(record: &'a ByteRecord, path: &'a Path) -> impl Iterator<Item = String> + 'a {
    return record.iter()
        .filter_map(move |field| match std::str::from_utf8(field) {
            Ok(text) => Some(text),
            Err(_) => {
                warn!("Skipping field that is not UTF-8 in {}: {:?}", path.display(), field);
                None
            }
        })
        .filter_map(normalize_word);
}

pub fn normalize_word(field: &str) -> Option<String> {
    let word: String = field.chars().filter(|c| !c.is_whitespace()).collect();
    if word.is_empty() || word == MISSING_VALUE_MARKER { return None; }
    return Some(word.to_uppercase());
}

// Blank fields and lines are skipped; the first character of any other field is the cell.
// `path` is only for error messages.
pub fn read_grid<R: io::Read>(source: R, path: &Path) -> Result<Grid, IngestError> {
    let cells: Vec<Vec<char>> = records(source, path)?
        .iter()
        .map(|record| {
            // A badly encoded cell still takes up its place in the row; it just never matches.
            record.iter()
                .map(String::from_utf8_lossy)
                .filter_map(|field| field.chars().next())
                .map(|c| c.to_ascii_uppercase())
                .collect::<Vec<char>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    let Some(expected) = cells.first().map(Vec::len) else {
        return Err(IngestError::EmptyGrid { path: path.to_owned() });
    };
    if let Some((row, found)) = cells.iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(IngestError::RaggedGrid {
            path: path.to_owned(),
            row: row + 1,
            expected,
            found,
        });
    }

    let grid = Grid::new(cells);
    debug!("Loaded {}x{} grid from {}", grid.rows(), grid.cols(), path.display());
    return Ok(grid);
}

// Returns how many fields were inserted, duplicates included.
pub fn read_vocabulary<R: io::Read>(
    source: R,
    path: &Path,
    index: &mut PrefixIndex,
) -> Result<usize, IngestError> {
    let mut inserted = 0;
    for record in records(source, path)? {
        for word in words(&record, path) {
            if word.chars().count() < MIN_VOCABULARY_WORD_LENGTH { continue; }
            index.insert(&word);
            inserted += 1;
        }
    }

    debug!("Read {} words from {} ({} distinct)", inserted, path.display(), index.len());
    return Ok(inserted);
}

// Same clean-up as the vocabulary, without the length limit.
pub fn read_ignore_list<R: io::Read>(source: R, path: &Path) -> Result<HashSet<String>, IngestError> {
    let ignore: HashSet<String> = records(source, path)?
        .iter()
        .flat_map(|record| words(record, path))
        .collect();

    debug!("Read {} ignored words from {}", ignore.len(), path.display());
    return Ok(ignore);
}

pub fn load_grid(path: &Path) -> Result<Grid, IngestError> {
    return read_grid(open(path)?, path);
}

pub fn load_vocabulary(path: &Path) -> Result<PrefixIndex, IngestError> {
    let mut index = PrefixIndex::new();
    read_vocabulary(open(path)?, path, &mut index)?;
    return Ok(index);
}

pub fn load_ignore_list(path: &Path) -> Result<HashSet<String>, IngestError> {
    return read_ignore_list(open(path)?, path);
}

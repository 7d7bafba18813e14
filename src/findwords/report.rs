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

use std::io::{self, Write};

use wordgrid::FoundWord;

pub fn write_report<W: Write>(out: &mut W, found: &[FoundWord]) -> io::Result<()> {
    if found.is_empty() {
        writeln!(out, "No words found.")?;
        return Ok(());
    }

    writeln!(out, "Found words and their locations:")?;
    for hit in found {
        writeln!(out, "{}", hit)?;
    }
    return Ok(());
}

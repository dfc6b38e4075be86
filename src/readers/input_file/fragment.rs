//! Reader for one `fragment` block of the input file.
//!
//! ```text
//! fragment h2o
//! 0.0 0.0 0.0 0.0 0.0 0.0
//! velocity
//! 0.1 0.0 0.0 0.0 0.0 0.0
//! ```
//!
//! The shape of the coordinate block depends on the `coord` option, the velocity block is optional.
use std::io::BufRead;

use tracing::debug;

use crate::{
    errors::{EfpError, Result},
    readers::{
        cursor::Cursor,
        line_reader::LineReader,
        scalars::{parse_double, parse_string},
        simulation_context::{CoordType, Fragment},
    },
};

pub const FRAGMENT_KEYWORD: &str = "fragment";
pub const VELOCITY_KEYWORD: &str = "velocity";

/// Reads the fragment name that follows the `fragment` keyword on the same line.
pub fn parse_fragment_name(cursor: &mut Cursor<'_>, line: usize) -> Result<String> {
    parse_string(cursor)
        .filter(|name| !name.is_empty())
        .ok_or(EfpError::FragmentName { line })
}

/// Reads the coordinate block and the optional velocity block of a fragment.
///
/// Starts right after the name line. Returns with the reader on the first line after the block,
/// which has not been looked at except for the velocity keyword.
pub fn parse_fragment<R: BufRead>(
    lines: &mut LineReader<R>,
    name: String,
    coord_type: CoordType,
) -> Result<Fragment> {
    let mut frag = Fragment::new(name);
    let (n_rows, n_cols) = coord_type.block_shape();

    for row in frag.coord[..n_rows * n_cols].chunks_mut(n_cols) {
        read_row(lines, row, |line| EfpError::FragmentCoordinates { line })?;
    }

    let has_velocity = match lines.next_line()? {
        Some(line) => {
            let mut cursor = line.cursor();
            cursor.skip_space();
            cursor.eat_keyword(VELOCITY_KEYWORD)
        }
        None => false,
    };
    if has_velocity {
        read_row(lines, &mut frag.vel, |line| EfpError::FragmentVelocities { line })?;
        lines.next_line()?;
    }

    debug!(name = %frag.name, velocity = has_velocity, "fragment read");
    Ok(frag)
}

/// Advances to the next line and fills `values` from it.
fn read_row<R: BufRead>(
    lines: &mut LineReader<R>,
    values: &mut [f64],
    error: impl Fn(usize) -> EfpError,
) -> Result<()> {
    let missing_line = lines.line_number() + 1;
    let line = lines.next_line()?.ok_or_else(|| error(missing_line))?;
    let mut cursor = line.cursor();

    for value in values.iter_mut() {
        *value = parse_double(&mut cursor).ok_or_else(|| error(line.number))?;
    }
    Ok(())
}

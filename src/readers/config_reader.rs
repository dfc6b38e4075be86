//! Loads a whole input file into a [`Config`].
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use tracing::info;

use crate::{
    constants::FS_TO_AU,
    errors::{EfpError, Result},
    readers::{
        input_file::{
            fragment::{parse_fragment, parse_fragment_name, FRAGMENT_KEYWORD},
            options::{parse_field, set_defaults},
        },
        line_reader::LineReader,
        simulation_context::Config,
    },
};

/// Reads the input file at `path`.
pub fn parse_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EfpError::InputFileError {
        path: path.display().to_string(),
        source: e,
    })?;
    Config::from_reader(BufReader::new(file))
}

impl Config {
    /// Reads an input file from `reader`.
    ///
    /// Every option starts from its default. Options and fragment blocks may come in any order,
    /// but once a fragment is read the `coord` option can no longer change. The returned record
    /// is in atomic units.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut config = Config::default();
        let mut lines = LineReader::new(reader);

        lines.next_line()?;
        while let Some(line) = lines.current() {
            let number = line.number;
            let mut cursor = line.cursor();
            cursor.skip_space();

            if cursor.is_at_end() || cursor.starts_with("#") {
                lines.next_line()?;
                continue;
            }

            if cursor.eat_keyword(FRAGMENT_KEYWORD) {
                let name = parse_fragment_name(&mut cursor, number)?;
                let frag = parse_fragment(&mut lines, name, config.coord_type)?;
                config.frags.push(frag);
                // the fragment reader already moved to the next unread line
                continue;
            }

            let coord_type = config.coord_type;
            parse_field(&mut cursor, &mut config, number)?;
            if !config.frags.is_empty() && config.coord_type != coord_type {
                return Err(EfpError::CoordTypeChanged { line: number });
            }
            lines.next_line()?;
        }

        if config.frags.is_empty() {
            return Err(EfpError::NoFragments);
        }
        config.convert_units();

        info!(
            n_frags = config.frags.len(),
            run_type = %config.run_type,
            coord = %config.coord_type,
            "input file loaded"
        );
        Ok(config)
    }

    /// Takes lengths to bohr and times from femtoseconds to atomic units.
    fn convert_units(&mut self) {
        self.time_step *= FS_TO_AU;
        self.thermostat_tau *= FS_TO_AU;

        let n_convert = self.coord_type.length_values();
        for frag in &mut self.frags {
            for value in &mut frag.coord[..n_convert] {
                *value *= self.units_factor;
            }
        }
    }
}

impl Default for Config {
    /// The record an empty input file would give, before unit conversion and without fragments.
    fn default() -> Self {
        let mut config = Config::blank();
        set_defaults(&mut config);
        config
    }
}

impl FromStr for Config {
    type Err = EfpError;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_reader(s.as_bytes())
    }
}

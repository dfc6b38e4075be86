//! The table of every run option that can appear in the input file.
//!
//! Each entry binds an option name to its default text, the parser for its value, an optional
//! range check and the field of [`Config`] it fills. Defaults are produced by running the same
//! parser over the default text.
use tracing::debug;

use crate::{
    constants::FRAGLIB_DATA_DIR,
    errors::{EfpError, Result},
    readers::{
        cursor::Cursor,
        scalars::{
            parse_coord, parse_disp_damp, parse_double, parse_elec_damp, parse_ensemble,
            parse_int, parse_pol_damp, parse_run_type, parse_string, parse_terms, parse_units,
        },
        simulation_context::Config,
    },
};

/// Why an option value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    Incorrect,
    OutOfRange,
}

/// The parser needed to fill one field of the configuration.
pub trait Setting: Sync {
    /// Parses a value from the cursor and stores it in the field.
    fn parse(&self, cursor: &mut Cursor<'_>, config: &mut Config) -> bool;
    /// Checks the value currently stored in the field.
    fn check(&self, config: &Config) -> bool;
}

/// A typed field of [`Config`] together with its parser and range check.
pub struct Field<T> {
    pub parse: fn(&mut Cursor<'_>) -> Option<T>,
    pub check: Option<fn(&T) -> bool>,
    pub get: fn(&Config) -> &T,
    pub get_mut: fn(&mut Config) -> &mut T,
}

impl<T> Setting for Field<T> {
    fn parse(&self, cursor: &mut Cursor<'_>, config: &mut Config) -> bool {
        match (self.parse)(cursor) {
            Some(value) => {
                *(self.get_mut)(config) = value;
                true
            }
            None => false,
        }
    }

    fn check(&self, config: &Config) -> bool {
        match self.check {
            Some(check) => check((self.get)(config)),
            None => true,
        }
    }
}

pub struct OptionSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub setting: &'static dyn Setting,
}

impl OptionSpec {
    /// Parses the option value from `cursor` into `config` and checks its range.
    pub fn apply(
        &self,
        cursor: &mut Cursor<'_>,
        config: &mut Config,
    ) -> std::result::Result<(), ValueError> {
        if !self.setting.parse(cursor, config) {
            return Err(ValueError::Incorrect);
        }
        if !self.setting.check(config) {
            return Err(ValueError::OutOfRange);
        }
        Ok(())
    }

    /// Stores the parsed default value. Defaults are not range checked.
    pub fn apply_default(&self, config: &mut Config) -> bool {
        let mut cursor = Cursor::new(self.default);
        self.setting.parse(&mut cursor, config)
    }
}

fn int_gt_zero(value: &i32) -> bool {
    *value > 0
}

fn double_gt_zero(value: &f64) -> bool {
    *value > 0.0
}

macro_rules! field {
    ($field:ident, $parse:expr) => {
        &Field {
            parse: $parse,
            check: None,
            get: |config| &config.$field,
            get_mut: |config| &mut config.$field,
        }
    };
    ($field:ident, $parse:expr, $check:expr) => {
        &Field {
            parse: $parse,
            check: Some($check),
            get: |config| &config.$field,
            get_mut: |config| &mut config.$field,
        }
    };
}

/// Every option of the input file.
///
/// No name may be a prefix of another one, since names are matched as a prefix of the line.
#[rustfmt::skip]
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec { name: "run_type", default: "sp", setting: field!(run_type, parse_run_type) },
    OptionSpec { name: "coord", default: "xyzabc", setting: field!(coord_type, parse_coord) },
    OptionSpec { name: "units", default: "angs", setting: field!(units_factor, parse_units) },
    OptionSpec { name: "terms", default: "elec pol disp xr", setting: field!(terms, parse_terms) },
    OptionSpec { name: "elec_damp", default: "screen", setting: field!(elec_damp, parse_elec_damp) },
    OptionSpec { name: "disp_damp", default: "tt", setting: field!(disp_damp, parse_disp_damp) },
    OptionSpec { name: "pol_damp", default: "tt", setting: field!(pol_damp, parse_pol_damp) },
    OptionSpec { name: "hess_delta", default: "0.001", setting: field!(hess_delta, parse_double, double_gt_zero) },
    OptionSpec { name: "max_steps", default: "100", setting: field!(max_steps, parse_int, int_gt_zero) },
    OptionSpec { name: "print_step", default: "1", setting: field!(print_step, parse_int, int_gt_zero) },
    OptionSpec { name: "temperature", default: "300.0", setting: field!(target_temperature, parse_double, double_gt_zero) },
    OptionSpec { name: "time_step", default: "1.0", setting: field!(time_step, parse_double, double_gt_zero) },
    OptionSpec { name: "ensemble", default: "nve", setting: field!(ensemble_type, parse_ensemble) },
    OptionSpec { name: "thermostat_tau", default: "1.0e3", setting: field!(thermostat_tau, parse_double, double_gt_zero) },
    OptionSpec { name: "opt_tol", default: "1.0e-4", setting: field!(opt_tol, parse_double, double_gt_zero) },
    OptionSpec { name: "fraglib_path", default: FRAGLIB_DATA_DIR, setting: field!(fraglib_path, parse_string) },
    OptionSpec { name: "userlib_path", default: ".", setting: field!(userlib_path, parse_string) },
];

/// Fills every field of `config` from the default text of its option.
pub fn set_defaults(config: &mut Config) {
    for option in OPTIONS {
        let parsed = option.apply_default(config);
        debug_assert!(parsed, "default value of option {} does not parse", option.name);
    }
}

/// Sets the option named at the start of `cursor`.
///
/// The whole line has to be consumed: exactly one option per line.
pub fn parse_field(cursor: &mut Cursor<'_>, config: &mut Config, line: usize) -> Result<()> {
    let option = OPTIONS
        .iter()
        .find(|option| cursor.starts_with(option.name))
        .ok_or(EfpError::UnknownOption { line })?;

    cursor.advance(option.name.len());
    cursor.skip_space();
    let value_text = cursor.rest();

    option.apply(cursor, config).map_err(|e| match e {
        ValueError::Incorrect => EfpError::IncorrectValue {
            option: option.name,
            line,
        },
        ValueError::OutOfRange => EfpError::OutOfRange {
            option: option.name,
            line,
        },
    })?;

    cursor.skip_space();
    if !cursor.is_at_end() {
        return Err(EfpError::TrailingInput { line });
    }
    debug!(option = option.name, value = value_text.trim_end(), line, "option set");
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        constants::BOHR_RADIUS,
        readers::simulation_context::{CoordType, EnsembleType, RunType, Term},
    };

    fn set(line: &str, config: &mut Config) -> Result<()> {
        let mut cursor = Cursor::new(line);
        parse_field(&mut cursor, config, 1)
    }

    #[test]
    fn every_default_parses_and_passes_its_check() {
        let mut config = Config::blank();
        for option in OPTIONS {
            assert!(option.apply_default(&mut config), "{}", option.name);
            assert!(option.setting.check(&config), "{}", option.name);
        }
    }

    #[test]
    fn option_names_are_prefix_disjoint() {
        for a in OPTIONS {
            for b in OPTIONS {
                assert!(
                    std::ptr::eq(a, b) || !b.name.starts_with(a.name),
                    "{} is a prefix of {}",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn defaults() {
        let mut config = Config::blank();
        set_defaults(&mut config);

        assert_eq!(config.run_type, RunType::Sp);
        assert_eq!(config.coord_type, CoordType::XyzAbc);
        assert_relative_eq!(config.units_factor, 1.0 / BOHR_RADIUS);
        assert!(Term::ALL.iter().all(|term| config.terms.contains(*term)));
        assert_relative_eq!(config.hess_delta, 0.001);
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.print_step, 1);
        assert_relative_eq!(config.target_temperature, 300.0);
        assert_relative_eq!(config.time_step, 1.0);
        assert_eq!(config.ensemble_type, EnsembleType::Nve);
        assert_relative_eq!(config.thermostat_tau, 1000.0);
        assert_relative_eq!(config.opt_tol, 1.0e-4);
        assert_eq!(config.fraglib_path, FRAGLIB_DATA_DIR);
        assert_eq!(config.userlib_path, ".");
    }

    #[test]
    fn sets_typed_fields() {
        let mut config = Config::blank();
        set("run_type md", &mut config).unwrap();
        set("ensemble nvt", &mut config).unwrap();
        set("max_steps 250  ", &mut config).unwrap();
        set("userlib_path \"/data/my frags\"", &mut config).unwrap();

        assert_eq!(config.run_type, RunType::Md);
        assert_eq!(config.ensemble_type, EnsembleType::Nvt);
        assert_eq!(config.max_steps, 250);
        assert_eq!(config.userlib_path, "/data/my frags");
    }

    #[test]
    fn unknown_option() {
        let mut config = Config::blank();
        let err = set("cutoff 10.0", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::UnknownOption { line: 1 }));
    }

    #[test]
    fn incorrect_value() {
        let mut config = Config::blank();
        let err = set("run_type dynamics", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::IncorrectValue { option: "run_type", .. }));

        let err = set("hess_delta", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::IncorrectValue { option: "hess_delta", .. }));
    }

    #[test]
    fn out_of_range_value() {
        let mut config = Config::blank();
        let err = set("max_steps 0", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::OutOfRange { option: "max_steps", .. }));

        let err = set("temperature -5", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::OutOfRange { option: "temperature", .. }));
    }

    #[test]
    fn one_option_per_line() {
        let mut config = Config::blank();
        let err = set("time_step 1.0 max_steps 10", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::TrailingInput { line: 1 }));

        let err = set("coord pointsx", &mut config).unwrap_err();
        assert!(matches!(err, EfpError::TrailingInput { .. }));
    }
}

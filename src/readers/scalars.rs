//! Parsers for the values that follow an option name or make up a coordinate row.
//!
//! Every parser returns `None` without moving the cursor when the text does not start with a
//! value it understands, so callers can probe for optional input.
use crate::readers::{
    cursor::Cursor,
    simulation_context::{
        CoordType, DispDamp, ElecDamp, EnsembleType, PolDamp, RunType, Term, Terms,
    },
};

/// Name to value table for a closed set of keywords.
pub type EnumTable<T> = &'static [(&'static str, T)];

pub const RUN_TYPES: EnumTable<RunType> = &[
    ("sp", RunType::Sp),
    ("grad", RunType::Grad),
    ("hess", RunType::Hess),
    ("opt", RunType::Opt),
    ("md", RunType::Md),
];

pub const COORD_TYPES: EnumTable<CoordType> = &[
    ("points", CoordType::Points),
    ("xyzabc", CoordType::XyzAbc),
    ("rotmat", CoordType::RotMat),
];

pub const UNITS: EnumTable<f64> = &[
    ("bohr", 1.0),
    ("angs", 1.0 / crate::constants::BOHR_RADIUS),
];

pub const ELEC_DAMPS: EnumTable<ElecDamp> = &[
    ("screen", ElecDamp::Screen),
    ("overlap", ElecDamp::Overlap),
    ("off", ElecDamp::Off),
];

pub const DISP_DAMPS: EnumTable<DispDamp> = &[
    ("tt", DispDamp::Tt),
    ("overlap", DispDamp::Overlap),
    ("off", DispDamp::Off),
];

pub const POL_DAMPS: EnumTable<PolDamp> = &[("tt", PolDamp::Tt), ("off", PolDamp::Off)];

pub const ENSEMBLES: EnumTable<EnsembleType> =
    &[("nve", EnsembleType::Nve), ("nvt", EnsembleType::Nvt)];

pub const TERMS: EnumTable<Term> = &[
    ("elec", Term::Elec),
    ("pol", Term::Pol),
    ("disp", Term::Disp),
    ("xr", Term::Xr),
];

/// Reads a double quoted string or a bare run of non-space characters.
pub fn parse_string(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut probe = *cursor;
    probe.skip_space();
    let rest = probe.rest();

    let (value, consumed) = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        (&quoted[..end], end + 2)
    } else {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        (&rest[..end], end)
    };
    if consumed == 0 {
        return None;
    }

    probe.advance(consumed);
    *cursor = probe;
    Some(value.to_string())
}

pub fn parse_int(cursor: &mut Cursor<'_>) -> Option<i32> {
    let mut probe = *cursor;
    probe.skip_space();
    let rest = probe.rest();
    let bytes = rest.as_bytes();

    let mut len = sign_len(bytes);
    let n_digits = digits_len(&bytes[len..]);
    if n_digits == 0 {
        return None;
    }
    len += n_digits;

    let value = rest[..len].parse().ok()?;
    probe.advance(len);
    *cursor = probe;
    Some(value)
}

pub fn parse_double(cursor: &mut Cursor<'_>) -> Option<f64> {
    let mut probe = *cursor;
    probe.skip_space();
    let rest = probe.rest();

    let len = float_literal_len(rest.as_bytes());
    if len == 0 {
        return None;
    }

    let value = rest[..len].parse().ok()?;
    probe.advance(len);
    *cursor = probe;
    Some(value)
}

/// Matches the longest name of `table` that starts the remaining text and returns its value.
///
/// Only the name is consumed; whatever follows it is left for the caller to judge.
pub fn parse_enum<T: Copy>(cursor: &mut Cursor<'_>, table: EnumTable<T>) -> Option<T> {
    let (name, value) = table
        .iter()
        .filter(|(name, _)| cursor.starts_with(name))
        .max_by_key(|(name, _)| name.len())?;
    cursor.advance(name.len());
    Some(*value)
}

/// Reads the remainder of the line as a list of whitespace separated interaction terms.
pub fn parse_terms(cursor: &mut Cursor<'_>) -> Option<Terms> {
    let mut probe = *cursor;
    let mut terms = Terms::empty();

    while !probe.is_at_end() {
        let term = parse_enum(&mut probe, TERMS)?;
        if !probe.peek().map_or(true, char::is_whitespace) {
            return None;
        }
        terms.insert(term);
        probe.skip_space();
    }
    if terms.is_empty() {
        return None;
    }

    *cursor = probe;
    Some(terms)
}

pub fn parse_run_type(cursor: &mut Cursor<'_>) -> Option<RunType> {
    parse_enum(cursor, RUN_TYPES)
}

pub fn parse_coord(cursor: &mut Cursor<'_>) -> Option<CoordType> {
    parse_enum(cursor, COORD_TYPES)
}

pub fn parse_units(cursor: &mut Cursor<'_>) -> Option<f64> {
    parse_enum(cursor, UNITS)
}

pub fn parse_elec_damp(cursor: &mut Cursor<'_>) -> Option<ElecDamp> {
    parse_enum(cursor, ELEC_DAMPS)
}

pub fn parse_disp_damp(cursor: &mut Cursor<'_>) -> Option<DispDamp> {
    parse_enum(cursor, DISP_DAMPS)
}

pub fn parse_pol_damp(cursor: &mut Cursor<'_>) -> Option<PolDamp> {
    parse_enum(cursor, POL_DAMPS)
}

pub fn parse_ensemble(cursor: &mut Cursor<'_>) -> Option<EnsembleType> {
    parse_enum(cursor, ENSEMBLES)
}

fn sign_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
fn float_literal_len(bytes: &[u8]) -> usize {
    let mut len = sign_len(bytes);

    let int_digits = digits_len(&bytes[len..]);
    len += int_digits;

    let mut frac_digits = 0;
    if bytes.get(len) == Some(&b'.') {
        frac_digits = digits_len(&bytes[len + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(len), Some(b'e') | Some(b'E')) {
        let exp_start = len + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digits_len(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            len = exp_start + exp_sign + exp_digits;
        }
    }
    len
}

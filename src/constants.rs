/// Bohr radius in angstrom
pub const BOHR_RADIUS: f64 = 0.52917721092;

/// Multiplier taking a time in femtoseconds to atomic units of time
pub const FS_TO_AU: f64 = 1.0 / 2.41888432650212e-2;

/// Directory of the built-in fragment library.
pub const FRAGLIB_DATA_DIR: &str = match option_env!("EFPMD_DATA_DIR") {
    Some(dir) => dir,
    None => "/usr/local/share/efp/fraglib",
};

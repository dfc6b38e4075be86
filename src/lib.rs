//! Reader for the input files of effective fragment potential simulations.
//!
//! An input file sets run options, one per line, and declares the fragments of the system:
//!
//! ```text
//! run_type md
//! units angs
//! terms elec pol disp
//!
//! fragment h2o
//! 0.0 0.0 0.0 0.0 0.0 0.0
//! velocity
//! 0.001 0.0 0.0 0.0 0.0 0.0
//! ```
//!
//! [`parse_config`] turns such a file into a [`Config`] with lengths in bohr and times in atomic
//! units, ready to hand over to the simulation.
extern crate nalgebra as na;

pub mod constants;
pub mod errors;
pub mod readers;

pub use errors::{EfpError, Result};
pub use readers::config_reader::parse_config;
pub use readers::simulation_context::{
    Config, CoordType, DispDamp, ElecDamp, EnsembleType, Fragment, PolDamp, Pose, RunType, Term,
    Terms,
};

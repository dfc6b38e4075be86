use std::io::Write;

use approx::assert_relative_eq;
use efpmd::{
    constants::{BOHR_RADIUS, FS_TO_AU},
    parse_config, Config, CoordType, EfpError, EnsembleType, Pose, RunType, Term,
};
use nalgebra::Vector3;

const MD_INPUT: &str = "\
# water dimer dynamics
run_type md
coord rotmat
units angs
terms elec pol disp
elec_damp overlap
disp_damp off
pol_damp off
max_steps 5000
print_step 10
temperature 298.15
time_step 0.5
ensemble nvt
thermostat_tau 500
userlib_path \"./My Fragments\"

fragment h2o_l
0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 1.0
velocity
0.001 0.0 0.0 0.0 0.0 0.01

fragment H2O_L
2.9 0.0 0.0
1.0 0.0 0.0
0.0 0.0 -1.0
0.0 1.0 0.0
";

fn write_input(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn loads_a_dynamics_run_from_disk() {
    let file = write_input(MD_INPUT);
    let config = parse_config(file.path()).unwrap();

    assert_eq!(config.run_type, RunType::Md);
    assert_eq!(config.coord_type, CoordType::RotMat);
    assert_eq!(config.ensemble_type, EnsembleType::Nvt);
    assert_eq!(config.max_steps, 5000);
    assert_eq!(config.print_step, 10);
    assert_relative_eq!(config.target_temperature, 298.15);
    assert_relative_eq!(config.time_step, 0.5 * FS_TO_AU);
    assert_relative_eq!(config.thermostat_tau, 500.0 * FS_TO_AU);
    assert!(!config.terms.contains(Term::Xr));
    assert_eq!(config.terms.to_string(), "elec pol disp");
    // the whole line is lower-cased, quoted text included
    assert_eq!(config.userlib_path, "./my fragments");

    assert_eq!(config.frags.len(), 2);
    assert_eq!(config.frags[0].name, "h2o_l");
    assert_eq!(config.frags[1].name, "h2o_l");

    let (linear, angular) = config.frags[0].velocity();
    assert_eq!(linear, Vector3::new(0.001, 0.0, 0.0));
    assert_eq!(angular, Vector3::new(0.0, 0.0, 0.01));

    match config.frags[1].pose(config.coord_type) {
        Pose::RotMat { origin, rotation } => {
            assert_relative_eq!(origin.x, 2.9 / BOHR_RADIUS);
            assert_relative_eq!(rotation.determinant(), 1.0);
            assert_relative_eq!((rotation * rotation.transpose()).trace(), 3.0);
        }
        other => panic!("unexpected pose {:?}", other),
    }
}

#[test]
fn summary_lists_options_and_fragments() {
    let config: Config = "units bohr\nfragment a\n1 2 3 0 0 0\n".parse().unwrap();
    let summary = config.to_string();

    assert!(summary.contains("run_type sp"));
    assert!(summary.contains("coord xyzabc"));
    assert!(summary.contains("terms elec pol disp xr"));
    assert!(summary.contains("fragment a"));
    assert!(!summary.contains("velocity"));
}

#[test]
fn malformed_file_gives_no_config() {
    let file = write_input("run_type md\nfragment a\n1 2 3\n");
    let err = parse_config(file.path()).unwrap_err();
    assert!(matches!(err, EfpError::FragmentCoordinates { line: 3 }));
    assert_eq!(err.to_string(), "Incorrect fragment coordinates format on line 3");
}

#[test]
fn unreadable_path() {
    let err = parse_config("/nonexistent/dir/input.efp").unwrap_err();
    assert!(matches!(err, EfpError::InputFileError { .. }));
}

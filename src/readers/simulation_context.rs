use std::fmt;

use na::{Matrix3, Point3, Vector3};

/// Kind of calculation requested by the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunType {
    /// Single point energy
    Sp,
    /// Energy gradient
    Grad,
    /// Numerical hessian
    Hess,
    /// Geometry optimization
    Opt,
    /// Molecular dynamics
    Md,
}

/// How the pose of every fragment is written in the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordType {
    /// Three points in space, one row each
    Points,
    /// Center of mass followed by three Euler angles on one row
    XyzAbc,
    /// Origin row followed by the three rows of a rotation matrix
    RotMat,
}

impl CoordType {
    /// Rows and columns of the coordinate block of one fragment.
    pub fn block_shape(self) -> (usize, usize) {
        match self {
            CoordType::XyzAbc => (1, 6),
            CoordType::Points => (3, 3),
            CoordType::RotMat => (4, 3),
        }
    }

    /// Number of leading coordinate values that carry a length.
    pub fn length_values(self) -> usize {
        match self {
            CoordType::XyzAbc => 3,
            CoordType::Points => 9,
            CoordType::RotMat => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElecDamp {
    Screen,
    Overlap,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispDamp {
    Tt,
    Overlap,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolDamp {
    Tt,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsembleType {
    Nve,
    Nvt,
}

macro_rules! keyword_names {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_names!(RunType { Sp => "sp", Grad => "grad", Hess => "hess", Opt => "opt", Md => "md" });
keyword_names!(CoordType { Points => "points", XyzAbc => "xyzabc", RotMat => "rotmat" });
keyword_names!(ElecDamp { Screen => "screen", Overlap => "overlap", Off => "off" });
keyword_names!(DispDamp { Tt => "tt", Overlap => "overlap", Off => "off" });
keyword_names!(PolDamp { Tt => "tt", Off => "off" });
keyword_names!(EnsembleType { Nve => "nve", Nvt => "nvt" });

/// One additive interaction term of the fragment potential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Elec,
    Pol,
    Disp,
    Xr,
}

impl Term {
    pub const ALL: [Term; 4] = [Term::Elec, Term::Pol, Term::Disp, Term::Xr];

    fn bit(self) -> u8 {
        match self {
            Term::Elec => 1 << 0,
            Term::Pol => 1 << 1,
            Term::Disp => 1 << 2,
            Term::Xr => 1 << 3,
        }
    }
}

keyword_names!(Term { Elec => "elec", Pol => "pol", Disp => "disp", Xr => "xr" });

/// Set of the enabled [`Term`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terms(u8);

impl Terms {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, term: Term) {
        self.0 |= term.bit();
    }

    pub fn contains(&self, term: Term) -> bool {
        self.0 & term.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Term> + '_ {
        Term::ALL.into_iter().filter(|term| self.contains(*term))
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Term::as_str).collect();
        f.write_str(&names.join(" "))
    }
}

/// A rigid molecular fragment read from the input file.
///
/// `coord` holds the raw coordinate block row by row. How many values are used and what they mean
/// depends on the [`CoordType`] of the run, see [`Fragment::pose`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub name: String,
    pub coord: [f64; 12],
    pub vel: [f64; 6],
}

/// Typed view of a fragment coordinate block
#[derive(Debug, Clone, PartialEq)]
pub enum Pose {
    Points([Point3<f64>; 3]),
    XyzAbc {
        position: Vector3<f64>,
        euler: Vector3<f64>,
    },
    RotMat {
        origin: Vector3<f64>,
        rotation: Matrix3<f64>,
    },
}

impl Fragment {
    pub fn new(name: String) -> Self {
        Self {
            name,
            coord: [0.0; 12],
            vel: [0.0; 6],
        }
    }

    pub fn pose(&self, coord_type: CoordType) -> Pose {
        let c = &self.coord;
        match coord_type {
            CoordType::Points => Pose::Points([
                Point3::new(c[0], c[1], c[2]),
                Point3::new(c[3], c[4], c[5]),
                Point3::new(c[6], c[7], c[8]),
            ]),
            CoordType::XyzAbc => Pose::XyzAbc {
                position: Vector3::new(c[0], c[1], c[2]),
                euler: Vector3::new(c[3], c[4], c[5]),
            },
            CoordType::RotMat => Pose::RotMat {
                origin: Vector3::new(c[0], c[1], c[2]),
                rotation: Matrix3::from_row_slice(&c[3..12]),
            },
        }
    }

    /// Linear and angular velocity of the fragment
    pub fn velocity(&self) -> (Vector3<f64>, Vector3<f64>) {
        let v = &self.vel;
        (
            Vector3::new(v[0], v[1], v[2]),
            Vector3::new(v[3], v[4], v[5]),
        )
    }
}

/// Everything read from the input file that the simulation needs to run.
///
/// Lengths are in bohr and times in atomic units once the record leaves the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub run_type: RunType,
    pub coord_type: CoordType,
    pub units_factor: f64,
    pub terms: Terms,
    pub elec_damp: ElecDamp,
    pub disp_damp: DispDamp,
    pub pol_damp: PolDamp,
    pub hess_delta: f64,
    pub max_steps: i32,
    pub print_step: i32,
    pub target_temperature: f64,
    pub time_step: f64,
    pub ensemble_type: EnsembleType,
    pub thermostat_tau: f64,
    pub opt_tol: f64,
    pub fraglib_path: String,
    pub userlib_path: String,
    pub frags: Vec<Fragment>,
}

impl Config {
    /// A record with every slot zeroed, before any default is parsed into it.
    pub(crate) fn blank() -> Self {
        Self {
            run_type: RunType::Sp,
            coord_type: CoordType::XyzAbc,
            units_factor: 0.0,
            terms: Terms::empty(),
            elec_damp: ElecDamp::Screen,
            disp_damp: DispDamp::Tt,
            pol_damp: PolDamp::Tt,
            hess_delta: 0.0,
            max_steps: 0,
            print_step: 0,
            target_temperature: 0.0,
            time_step: 0.0,
            ensemble_type: EnsembleType::Nve,
            thermostat_tau: 0.0,
            opt_tol: 0.0,
            fraglib_path: String::new(),
            userlib_path: String::new(),
            frags: Vec::new(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "run_type {}", self.run_type)?;
        writeln!(f, "coord {}", self.coord_type)?;
        writeln!(f, "units_factor {}", self.units_factor)?;
        writeln!(f, "terms {}", self.terms)?;
        writeln!(f, "elec_damp {}", self.elec_damp)?;
        writeln!(f, "disp_damp {}", self.disp_damp)?;
        writeln!(f, "pol_damp {}", self.pol_damp)?;
        writeln!(f, "hess_delta {}", self.hess_delta)?;
        writeln!(f, "max_steps {}", self.max_steps)?;
        writeln!(f, "print_step {}", self.print_step)?;
        writeln!(f, "temperature {}", self.target_temperature)?;
        writeln!(f, "time_step {}", self.time_step)?;
        writeln!(f, "ensemble {}", self.ensemble_type)?;
        writeln!(f, "thermostat_tau {}", self.thermostat_tau)?;
        writeln!(f, "opt_tol {}", self.opt_tol)?;
        writeln!(f, "fraglib_path {}", self.fraglib_path)?;
        writeln!(f, "userlib_path {}", self.userlib_path)?;

        let (n_rows, n_cols) = self.coord_type.block_shape();
        for frag in &self.frags {
            writeln!(f, "\nfragment {}", frag.name)?;
            for row in frag.coord[..n_rows * n_cols].chunks(n_cols) {
                let row: Vec<String> = row.iter().map(|x| format!("{:12.6}", x)).collect();
                writeln!(f, "{}", row.join(" "))?;
            }
            if frag.vel.iter().any(|v| *v != 0.0) {
                let vel: Vec<String> = frag.vel.iter().map(|x| format!("{:12.6}", x)).collect();
                writeln!(f, "velocity\n{}", vel.join(" "))?;
            }
        }
        Ok(())
    }
}

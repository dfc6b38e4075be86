pub mod fragment;
pub mod options;

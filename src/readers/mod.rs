pub mod config_reader;
pub mod cursor;
pub mod input_file;
pub mod line_reader;
pub mod scalars;
pub mod simulation_context;

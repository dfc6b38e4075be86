use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Input file describing the run
    #[arg(default_value_t = String::from("input.efp"))]
    pub infile: String,

    /// Log every option and fragment as it is read
    #[arg(short, long)]
    pub verbose: bool,
}

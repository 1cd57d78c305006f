use std::path::PathBuf;

use clap::Parser;

/// Sign a volunteer up for a job and a random pick of its shifts.
#[derive(Debug, Parser)]
#[command(name = "volunteer_signup", version, about)]
pub struct Cli {
    /// JSON roster with shifts, jobs and volunteers. The built-in weekend event is used when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Volunteer to sign up; registered first if the roster does not know them yet.
    #[arg(short, long, default_value = "JohnJoe Jones")]
    pub volunteer: String,

    /// Job to sign up for. Defaults to the first job of the roster.
    #[arg(short, long)]
    pub job: Option<String>,

    /// Number of shifts to pick.
    #[arg(short, long, default_value_t = 3)]
    pub shifts: usize,

    /// Seed for the shift pick, for repeatable runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use volunteer_signup::cli::Cli;
use volunteer_signup::domain::roster::Roster;
use volunteer_signup::error::Result;
use volunteer_signup::{generate_roster, logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut roster = match &cli.roster {
        Some(path) => {
            log::info!("Loading roster from '{}'...", path.display());
            generate_roster(path)?
        }
        None => {
            log::info!("No roster given, using the demo event.");
            Roster::demo()
        }
    };

    println!("Here are the available volunteer jobs.");
    for job in roster.jobs() {
        println!("{}", job);
    }
    println!();

    let job = match &cli.job {
        Some(job) => job.clone(),
        None => roster.first_job()?.name().to_string(),
    };

    if roster.volunteer(&cli.volunteer).is_none() {
        roster.add_volunteer(&cli.volunteer)?;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    roster.sign_up_sampled(&cli.volunteer, &job, cli.shifts, &mut rng)?;

    for volunteer in roster.volunteers().iter().filter(|volunteer| volunteer.is_signed_up()) {
        println!("{}", volunteer.summary()?);
    }

    roster.print_summary();
    Ok(())
}

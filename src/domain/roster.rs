use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use rand::Rng;

use crate::api::roster_dto::{JobDto, RosterDto};
use crate::domain::factory::{JobDescriptor, JobFactory, ShiftFactory};
use crate::domain::job::Job;
use crate::domain::shift::Shift;
use crate::domain::volunteer::{Volunteer, volunteers_created};
use crate::error::{Error, Result};

/// Shifts of the demo event, in display order.
pub const DEMO_SHIFTS: [&str; 6] = [
    "Saturday morning",
    "Saturday afternoon",
    "Saturday night",
    "Sunday morning",
    "Sunday afternoon",
    "Sunday night",
];

/// Jobs of the demo event; each one offers every demo shift.
pub const DEMO_JOBS: [&str; 4] = ["Childcare", "Bartending", "Wristband Checking", "Parking Lot"];

/// All shifts, jobs and volunteers of one event.
///
/// Jobs and volunteers keep the order in which they were added, and job names
/// and volunteer names are unique within a roster.
#[derive(Debug, Default)]
pub struct Roster {
    shifts: Vec<Arc<Shift>>,
    jobs: Vec<Arc<Job>>,
    volunteers: Vec<Volunteer>,
}

impl Roster {
    pub fn new(shifts: Vec<Arc<Shift>>, jobs: Vec<Arc<Job>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.name().as_str()) {
                return Err(Error::DuplicateJob(job.name().to_string()));
            }
        }

        Ok(Roster { shifts, jobs, volunteers: Vec::new() })
    }

    /// The weekend event: six shifts and four jobs that all share them.
    pub fn demo() -> Self {
        let shifts = ShiftFactory::create(&DEMO_SHIFTS);
        let descriptors = DEMO_JOBS.iter().map(|name| JobDescriptor::new(*name, shifts.clone())).collect();
        let jobs = JobFactory::create(descriptors);

        Roster { shifts, jobs, volunteers: Vec::new() }
    }

    pub fn shifts(&self) -> &[Arc<Shift>] {
        &self.shifts
    }

    pub fn jobs(&self) -> &[Arc<Job>] {
        &self.jobs
    }

    pub fn job(&self, name: &str) -> Option<&Arc<Job>> {
        self.jobs.iter().find(|job| job.name() == name)
    }

    /// The job listed first, which the demo driver signs volunteers up for.
    pub fn first_job(&self) -> Result<&Arc<Job>> {
        self.jobs.first().ok_or(Error::NoJobs)
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn volunteer(&self, name: &str) -> Option<&Volunteer> {
        self.volunteers.iter().find(|volunteer| volunteer.name() == name)
    }

    pub fn add_volunteer(&mut self, name: &str) -> Result<()> {
        if self.volunteer(name).is_some() {
            return Err(Error::DuplicateVolunteer(name.to_string()));
        }

        debug!("Registering volunteer '{}'.", name);
        self.volunteers.push(Volunteer::new(name));
        Ok(())
    }

    /// Signs `volunteer` up for `job` on the shifts labelled `times`.
    ///
    /// Labels are looked up among the job's own shifts, so a label the job
    /// does not offer fails with `Error::ShiftNotOffered`.
    pub fn sign_up<S: AsRef<str>>(&mut self, volunteer: &str, job: &str, times: &[S]) -> Result<()> {
        let job = self.find_job(job)?;
        let shifts = times
            .iter()
            .map(|time| {
                job.shift_by_time(time.as_ref()).cloned().ok_or_else(|| Error::ShiftNotOffered {
                    job: job.name().to_string(),
                    shift: time.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.volunteer_mut(volunteer)?.sign_up(job, shifts)
    }

    /// Signs `volunteer` up for `job` on `amount` randomly picked shifts of that job.
    pub fn sign_up_sampled<R: Rng + ?Sized>(&mut self, volunteer: &str, job: &str, amount: usize, rng: &mut R) -> Result<()> {
        let job = self.find_job(job)?;
        let shifts = job.sample_shifts(rng, amount);
        if shifts.len() < amount {
            warn!("Job '{}' offers only {} shifts, {} were requested.", job.name(), shifts.len(), amount);
        }

        self.volunteer_mut(volunteer)?.sign_up(job, shifts)
    }

    /// Number of volunteers currently signed up for the job named `job`.
    pub fn headcount(&self, job: &str) -> usize {
        self.volunteers_for(job).count()
    }

    pub fn volunteers_for<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a Volunteer> + 'a {
        self.volunteers.iter().filter(move |volunteer| volunteer.job().is_some_and(|assigned| assigned.name() == job))
    }

    /// Logs the current state of the roster.
    pub fn print_summary(&self) {
        info!("--- Roster Summary ---");
        info!("Shifts: {}, jobs: {}, volunteers: {}", self.shifts.len(), self.jobs.len(), self.volunteers.len());

        for job in &self.jobs {
            info!("  - Job: {} ({} shifts, {} volunteers)", job.name(), job.shifts().len(), self.headcount(job.name().as_str()));

            for volunteer in self.volunteers_for(job.name().as_str()) {
                debug!("      * {} on {} shifts", volunteer.name(), volunteer.shifts().len());
            }
        }

        let unassigned = self.volunteers.iter().filter(|volunteer| !volunteer.is_signed_up()).count();
        if unassigned > 0 {
            info!("Volunteers without a job: {}", unassigned);
        }
        info!("Volunteers created this run: {}", volunteers_created());
        info!("----------------------");
    }

    fn find_job(&self, name: &str) -> Result<Arc<Job>> {
        self.job(name).cloned().ok_or_else(|| Error::UnknownJob(name.to_string()))
    }

    fn volunteer_mut(&mut self, name: &str) -> Result<&mut Volunteer> {
        self.volunteers
            .iter_mut()
            .find(|volunteer| volunteer.name() == name)
            .ok_or_else(|| Error::UnknownVolunteer(name.to_string()))
    }
}

// Jobs in a roster file name their shifts by label; the first shift with a
// matching label wins.
fn resolve_shift(shifts: &[Arc<Shift>], time: &str) -> Result<Arc<Shift>> {
    shifts
        .iter()
        .find(|shift| shift.time() == time)
        .cloned()
        .ok_or_else(|| Error::UnknownShift(time.to_string()))
}

// A label may appear only once per job, otherwise the job would offer the same
// shift twice.
fn resolve_job_shifts(shifts: &[Arc<Shift>], job_dto: &JobDto) -> Result<Vec<Arc<Shift>>> {
    let mut seen = HashSet::new();
    job_dto
        .shifts
        .iter()
        .map(|time| {
            if !seen.insert(time.as_str()) {
                return Err(Error::RepeatedShift { job: job_dto.name.clone(), shift: time.clone() });
            }
            resolve_shift(shifts, time)
        })
        .collect()
}

/// Builds a roster from its file representation.
///
/// Phase 1 creates the shifts, phase 2 the jobs on top of those shared shifts,
/// phase 3 registers the volunteers and signs up those that name a job.
impl TryFrom<RosterDto> for Roster {
    type Error = Error;

    fn try_from(dto: RosterDto) -> Result<Self> {
        let shifts = ShiftFactory::create(&dto.shifts);

        let mut descriptors = Vec::with_capacity(dto.jobs.len());
        for job_dto in dto.jobs {
            let job_shifts = resolve_job_shifts(&shifts, &job_dto)?;
            descriptors.push(JobDescriptor::new(job_dto.name, job_shifts));
        }
        let jobs = JobFactory::create(descriptors);

        let mut roster = Roster::new(shifts, jobs)?;

        for volunteer_dto in dto.volunteers {
            roster.add_volunteer(&volunteer_dto.name)?;

            match &volunteer_dto.job {
                Some(job) => roster.sign_up(&volunteer_dto.name, job, &volunteer_dto.shifts)?,
                None if !volunteer_dto.shifts.is_empty() => {
                    warn!("Volunteer '{}' lists shifts but no job; the shifts are ignored.", volunteer_dto.name);
                }
                None => {}
            }
        }

        debug!(
            "Roster built with {} shifts, {} jobs and {} volunteers.",
            roster.shifts.len(),
            roster.jobs.len(),
            roster.volunteers.len()
        );
        Ok(roster)
    }
}

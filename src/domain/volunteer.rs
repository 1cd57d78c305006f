use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::job::Job;
use crate::domain::shift::{Shift, join_labels};
use crate::domain::utils::id::VolunteerId;
use crate::error::{Error, Result};

// Number of volunteers created since process start. Starts at zero and is only
// ever incremented, from `Volunteer::new`.
static VOLUNTEERS_CREATED: AtomicUsize = AtomicUsize::new(0);

/// Returns how many volunteers this process has created so far.
pub fn volunteers_created() -> usize {
    VOLUNTEERS_CREATED.load(Ordering::Relaxed)
}

/// The job and shifts a volunteer currently holds.
#[derive(Debug, Clone)]
struct Assignment {
    job: Arc<Job>,
    shifts: Vec<Arc<Shift>>,
}

#[derive(Debug, Clone)]
pub struct Volunteer {
    name: VolunteerId,
    assignment: Option<Assignment>,
}

impl Volunteer {
    pub fn new(name: impl Into<String>) -> Self {
        VOLUNTEERS_CREATED.fetch_add(1, Ordering::Relaxed);
        Volunteer { name: VolunteerId::new(name), assignment: None }
    }

    pub fn name(&self) -> &VolunteerId {
        &self.name
    }

    pub fn job(&self) -> Option<&Arc<Job>> {
        self.assignment.as_ref().map(|assignment| &assignment.job)
    }

    /// Empty until the volunteer signs up.
    pub fn shifts(&self) -> &[Arc<Shift>] {
        self.assignment.as_ref().map(|assignment| assignment.shifts.as_slice()).unwrap_or_default()
    }

    pub fn is_signed_up(&self) -> bool {
        self.assignment.is_some()
    }

    /// Signs the volunteer up for `job` on the given `shifts`.
    ///
    /// Any earlier assignment is replaced as a whole. Every shift has to be one
    /// the job offers; otherwise `Error::ShiftNotOffered` is returned and the
    /// previous assignment stays in place.
    pub fn sign_up(&mut self, job: Arc<Job>, shifts: Vec<Arc<Shift>>) -> Result<()> {
        if let Some(stray) = shifts.iter().find(|shift| !job.offers(shift)) {
            return Err(Error::ShiftNotOffered {
                job: job.name().to_string(),
                shift: stray.time().to_string(),
            });
        }

        if let Some(previous) = &self.assignment {
            log::debug!("Volunteer '{}' leaves job '{}'.", self.name, previous.job.name());
        }

        tracing::info!(
            volunteer = %self.name,
            job = %job.name(),
            shifts = shifts.len(),
            "volunteer signed up"
        );

        self.assignment = Some(Assignment { job, shifts });
        Ok(())
    }

    /// Renders `"{name} is signed up for {job} on {shift, shift}"`.
    pub fn summary(&self) -> Result<String> {
        let assignment = self.assignment.as_ref().ok_or_else(|| Error::NotSignedUp(self.name.to_string()))?;

        Ok(format!(
            "{} is signed up for {} on {}",
            self.name,
            assignment.job.name(),
            join_labels(&assignment.shifts)
        ))
    }
}

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::domain::shift::{Shift, join_labels};
use crate::domain::utils::id::JobId;

/// A named role that volunteers can sign up for, together with the shifts it offers.
///
/// Shifts are shared, not owned: several jobs may offer the very same
/// `Arc<Shift>`. A job never changes after construction.
#[derive(Debug, Clone)]
pub struct Job {
    name: JobId,
    shifts: Vec<Arc<Shift>>,
}

impl Job {
    pub fn new(name: impl Into<String>, shifts: Vec<Arc<Shift>>) -> Self {
        Job { name: JobId::new(name), shifts }
    }

    pub fn name(&self) -> &JobId {
        &self.name
    }

    pub fn shifts(&self) -> &[Arc<Shift>] {
        &self.shifts
    }

    /// Returns `true` if this exact shift (by identity, not by label) is offered by the job.
    pub fn offers(&self, shift: &Arc<Shift>) -> bool {
        self.shifts.iter().any(|offered| Arc::ptr_eq(offered, shift))
    }

    /// Finds the first offered shift carrying `time` as its label.
    pub fn shift_by_time(&self, time: &str) -> Option<&Arc<Shift>> {
        self.shifts.iter().find(|shift| shift.time() == time)
    }

    /// Picks up to `amount` distinct positions of this job's shift list at random.
    ///
    /// The picked shifts keep the order in which the job lists them. Asking for
    /// more shifts than the job offers returns all of them.
    pub fn sample_shifts<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> Vec<Arc<Shift>> {
        let amount = amount.min(self.shifts.len());
        let mut picked = rand::seq::index::sample(rng, self.shifts.len(), amount).into_vec();
        picked.sort_unstable();

        picked.into_iter().map(|index| Arc::clone(&self.shifts[index])).collect()
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n------------------\n {} \n------------------\n Shifts: {}",
            self.name,
            join_labels(&self.shifts)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn weekend() -> Vec<Arc<Shift>> {
        ["Saturday morning", "Saturday afternoon", "Saturday night", "Sunday morning", "Sunday afternoon"]
            .iter()
            .map(|time| Arc::new(Shift::new(*time)))
            .collect()
    }

    #[test]
    fn test_display_renders_banner() {
        let job = Job::new("Childcare", vec![Arc::new(Shift::new("Saturday morning")), Arc::new(Shift::new("Saturday night"))]);

        assert_eq!(
            job.to_string(),
            "\n------------------\n Childcare \n------------------\n Shifts: Saturday morning, Saturday night"
        );
    }

    #[test]
    fn test_offers_checks_identity() {
        let shifts = weekend();
        let job = Job::new("Bartending", shifts.clone());
        let lookalike = Arc::new(Shift::new("Saturday morning"));

        assert!(job.offers(&shifts[0]));
        assert!(!job.offers(&lookalike));
    }

    #[test]
    fn test_shift_by_time() {
        let shifts = weekend();
        let job = Job::new("Parking Lot", shifts.clone());

        let found = job.shift_by_time("Sunday morning").expect("shift should be offered");
        assert!(Arc::ptr_eq(found, &shifts[3]));
        assert!(job.shift_by_time("Monday").is_none());
    }

    #[test]
    fn test_sample_shifts_picks_distinct_offered_shifts_in_job_order() {
        let job = Job::new("Wristband Checking", weekend());
        let mut rng = StdRng::seed_from_u64(42);

        let picked = job.sample_shifts(&mut rng, 3);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|shift| job.offers(shift)));

        let positions: Vec<usize> = picked
            .iter()
            .map(|shift| job.shifts().iter().position(|s| Arc::ptr_eq(s, shift)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "positions {:?} not increasing", positions);
    }

    #[test]
    fn test_sample_more_than_offered_returns_everything() {
        let job = Job::new("Childcare", weekend());
        let mut rng = StdRng::seed_from_u64(1);

        let picked = job.sample_shifts(&mut rng, 10);
        assert_eq!(picked.len(), job.shifts().len());
        assert!(picked.iter().zip(job.shifts()).all(|(a, b)| Arc::ptr_eq(a, b)));
    }
}

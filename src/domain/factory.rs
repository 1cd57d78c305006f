use std::sync::Arc;

use crate::domain::job::Job;
use crate::domain::shift::Shift;

/// Builds shifts in bulk from their time labels.
pub struct ShiftFactory;

impl ShiftFactory {
    /// Creates one new shift per label, in input order. Labels are neither
    /// deduplicated nor validated.
    pub fn create<S: AsRef<str>>(times: &[S]) -> Vec<Arc<Shift>> {
        times.iter().map(|time| Arc::new(Shift::new(time.as_ref()))).collect()
    }
}

/// Everything needed to build one [`Job`].
#[derive(Debug, Clone)]
pub struct JobDescriptor {
    pub name: String,
    pub shifts: Vec<Arc<Shift>>,
}

impl JobDescriptor {
    pub fn new(name: impl Into<String>, shifts: Vec<Arc<Shift>>) -> Self {
        JobDescriptor { name: name.into(), shifts }
    }
}

/// Builds jobs in bulk from descriptors.
pub struct JobFactory;

impl JobFactory {
    /// Creates one job per descriptor, in input order. The descriptors' shift
    /// handles are moved into the jobs, so the jobs share the very same shifts.
    pub fn create(jobs: Vec<JobDescriptor>) -> Vec<Arc<Job>> {
        jobs.into_iter().map(|descriptor| Arc::new(Job::new(descriptor.name, descriptor.shifts))).collect()
    }
}

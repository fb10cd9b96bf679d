// ============================================================================
// Frame Job Queue
// ============================================================================
//
// Stands in for the host's once-per-refresh callback. Work the engine wants
// done on the next frame is pushed as a job tagged with the generation of the
// transition that asked for it; the engine drains the queue on every tick and
// drops jobs whose generation has been superseded.

use std::collections::HashSet;

/// Job types for frame-driven work
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobType {
    /// Start a deferred transition once its delay has elapsed
    Start,
    /// Advance the running transition by one frame
    Frame,
}

/// A unit of work scheduled for the next frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Job {
    pub generation: u64,
    pub job_type: JobType,
}

/// Pending jobs of one display instance.
#[derive(Debug, Default)]
pub struct FrameQueue {
    /// Deduplicated: each (generation, job_type) pair is queued at most once
    pending: HashSet<Job>,
    frame_requested: bool,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a job to the queue and request a frame.
    /// Duplicate jobs are ignored.
    pub fn push_job(&mut self, generation: u64, job_type: JobType) {
        self.pending.insert(Job {
            generation,
            job_type,
        });
        self.frame_requested = true;
    }

    /// Drain all pending jobs, `Start` jobs first
    pub fn drain_pending_jobs(&mut self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.pending.drain().collect();
        jobs.sort_by_key(|job| (job.job_type != JobType::Start, job.generation));
        jobs
    }

    pub fn has_pending_jobs(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Check if a frame has been requested and clear the flag
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_deduplicates() {
        let mut queue = FrameQueue::new();
        queue.push_job(1, JobType::Frame);
        queue.push_job(1, JobType::Frame);
        queue.push_job(2, JobType::Frame);

        assert!(queue.has_pending_jobs());
        assert_eq!(queue.drain_pending_jobs().len(), 2);
        assert!(!queue.has_pending_jobs());
    }

    #[test]
    fn test_drain_orders_start_first() {
        let mut queue = FrameQueue::new();
        queue.push_job(3, JobType::Frame);
        queue.push_job(1, JobType::Start);

        let jobs = queue.drain_pending_jobs();
        assert_eq!(jobs[0].job_type, JobType::Start);
        assert_eq!(jobs[1].job_type, JobType::Frame);
    }

    #[test]
    fn test_frame_request_flag() {
        let mut queue = FrameQueue::new();
        assert!(!queue.take_frame_request());
        queue.push_job(0, JobType::Frame);
        assert!(queue.take_frame_request());
        assert!(!queue.take_frame_request());
    }
}

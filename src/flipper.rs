//! The transition engine.
//!
//! A [`Flipper`] owns a row of wheels on a [`Surface`] and rolls them from
//! the value it currently shows to a new one. The host drives it by calling
//! [`Flipper::tick`] once per display refresh; every tick reads the live
//! instance state, so a newer transition request simply takes over.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use numflip::prelude::*;
//!
//! let mut surface = MemorySurface::default();
//! let root = surface.create_root();
//! let mut flipper = Flipper::new(surface, root, FlipperConfig::new().from(19)).unwrap();
//!
//! let start = Instant::now();
//! flipper.transition_to_at(TransitionRequest::to(20), start);
//! while flipper.tick_at(start + Duration::from_secs(1)) {}
//!
//! assert_eq!(flipper.from(), 20);
//! assert_eq!(flipper.surface().visible_text(root), "20");
//! ```

use std::time::{Duration, Instant};

use crate::animation::{TimingFunction, Transition};
use crate::config::FlipperConfig;
use crate::digits::{checked_value, digit_count, max_number_length, reversed_padded_digits};
use crate::error::{FlipError, Result};
use crate::jobs::{FrameQueue, JobType};
use crate::layout::{prepare_root, DigitLayout};
use crate::surface::Surface;

/// A request to roll the display to a new value.
#[derive(Clone, Debug)]
pub struct TransitionRequest {
    pub to: u64,
    /// Overrides the configured duration; zero falls back to it as well
    pub duration: Option<Duration>,
    pub timing: Option<TimingFunction>,
    pub direct_animation: Option<bool>,
    /// Match the wheel count to the target exactly, shrinking if needed
    pub adaptive_length: bool,
}

impl TransitionRequest {
    pub fn to(value: u64) -> Self {
        Self {
            to: value,
            duration: None,
            timing: None,
            direct_animation: None,
            adaptive_length: false,
        }
    }

    /// Build a request from floating point input, truncating fractions.
    ///
    /// Negative and non-finite values are rejected.
    pub fn try_to(value: f64) -> Result<Self> {
        checked_value(value).map(Self::to)
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn direct_animation(mut self, direct: bool) -> Self {
        self.direct_animation = Some(direct);
        self
    }

    pub fn adaptive_length(mut self, adaptive: bool) -> Self {
        self.adaptive_length = adaptive;
        self
    }
}

/// Whether a transition is currently being animated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
}

/// The transition being animated
struct Run {
    started_at: Instant,
    duration: Duration,
    target: u64,
    timing: TimingFunction,
    direct_animation: bool,
    /// Raw progress of the last rendered frame
    progress: f64,
}

/// A transition waiting for its start delay
struct PendingStart {
    at: Instant,
    request: TransitionRequest,
}

/// Animated flip display rendering onto a [`Surface`].
pub struct Flipper<S: Surface> {
    surface: S,
    root: S::Element,
    config: FlipperConfig,
    layout: DigitLayout<S::Element>,
    /// Last value fully settled on
    from: u64,
    initial_digits: Vec<u32>,
    target_digits: Vec<u32>,
    /// Offset of each wheel in slots, as last rendered
    offsets: Vec<f64>,
    run: Option<Run>,
    pending_start: Option<PendingStart>,
    /// Bumped by every request; jobs from older generations are dropped
    generation: u64,
    jobs: FrameQueue,
}

impl<S: Surface> Flipper<S> {
    /// Build the display under `root` showing `config.from`.
    ///
    /// If `config.to` is set the display starts rolling towards it, after
    /// `config.transition.delay` when one is configured.
    pub fn new(surface: S, root: S::Element, config: FlipperConfig) -> Result<Self> {
        Self::new_at(surface, root, config, Instant::now())
    }

    /// Like [`Flipper::new`] with an explicit construction time
    pub fn new_at(
        mut surface: S,
        root: S::Element,
        config: FlipperConfig,
        now: Instant,
    ) -> Result<Self> {
        config.validate()?;
        if !surface.contains(root) {
            return Err(FlipError::MissingTarget);
        }

        let radix = config.radix();
        let width = max_number_length(config.from, config.to.unwrap_or(0), radix);
        prepare_root(&mut surface, root);
        let layout = DigitLayout::build(&mut surface, root, width, &config);
        let wheels = layout.len();
        let digits = reversed_padded_digits(config.from, wheels, radix);

        let mut flipper = Self {
            surface,
            root,
            from: config.from,
            initial_digits: digits.clone(),
            target_digits: digits,
            offsets: vec![0.0; wheels],
            layout,
            config,
            run: None,
            pending_start: None,
            generation: 0,
            jobs: FrameQueue::new(),
        };
        flipper.render_static();
        flipper.set_select(flipper.from);

        if let Some(to) = flipper.config.to {
            let delay = flipper.config.transition.delay;
            if delay.is_zero() {
                flipper.transition_to_at(TransitionRequest::to(to), now);
            } else {
                log::debug!("deferring initial transition to {} by {:?}", to, delay);
                flipper.pending_start = Some(PendingStart {
                    at: now + delay,
                    request: TransitionRequest::to(to),
                });
                flipper.jobs.push_job(flipper.generation, JobType::Start);
            }
        }

        Ok(flipper)
    }

    /// Start rolling towards `request.to`, superseding any running transition
    pub fn transition_to(&mut self, request: TransitionRequest) {
        self.transition_to_at(request, Instant::now());
    }

    /// Like [`Flipper::transition_to`] with an explicit start time
    pub fn transition_to_at(&mut self, request: TransitionRequest, now: Instant) {
        self.generation += 1;
        self.pending_start = None;

        let radix = self.config.radix();
        let current_len = self.layout.len();
        let target_len = digit_count(request.to, radix);
        let rebuild = if request.adaptive_length {
            target_len != current_len
        } else {
            target_len > current_len
        };
        if rebuild {
            self.rebuild(target_len);
        }

        let wheels = self.layout.len();
        self.initial_digits = reversed_padded_digits(self.from, wheels, radix);
        self.target_digits = reversed_padded_digits(request.to, wheels, radix);
        self.set_select(request.to);

        let duration = request
            .duration
            .filter(|d| !d.is_zero())
            .unwrap_or(self.config.transition.duration);
        log::debug!(
            "transition {} -> {} over {:?} (generation {})",
            self.from,
            request.to,
            duration,
            self.generation
        );
        self.run = Some(Run {
            started_at: now,
            duration,
            target: request.to,
            timing: request
                .timing
                .unwrap_or_else(|| self.config.transition.timing.clone()),
            direct_animation: request
                .direct_animation
                .unwrap_or(self.config.direct_animation),
            progress: 0.0,
        });
        self.jobs.push_job(self.generation, JobType::Frame);
    }

    /// Show `value` immediately, cancelling any running or deferred transition
    pub fn set_displayed_value(&mut self, value: u64) {
        self.generation += 1;
        self.pending_start = None;
        self.run = None;

        let radix = self.config.radix();
        if digit_count(value, radix) > self.layout.len() {
            self.rebuild(digit_count(value, radix));
        }

        self.from = value;
        let digits = reversed_padded_digits(value, self.layout.len(), radix);
        self.initial_digits = digits.clone();
        self.target_digits = digits;
        self.render_static();
        self.set_select(value);
    }

    /// Recompute geometry after an external layout change and redraw
    pub fn resize(&mut self) {
        self.layout
            .update_dimensions(&mut self.surface, self.root, self.config.alphabet.len());
        self.render_current();
    }

    /// Process the frame jobs due at the current wall-clock time
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Process the frame jobs due at `now`.
    ///
    /// Returns whether further frames are requested.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        for job in self.jobs.drain_pending_jobs() {
            if job.generation != self.generation {
                log::trace!(
                    "dropping stale {:?} job of generation {} (current {})",
                    job.job_type,
                    job.generation,
                    self.generation
                );
                continue;
            }
            match job.job_type {
                JobType::Start => self.handle_start(now),
                JobType::Frame => self.advance(now),
            }
        }
        self.jobs.has_pending_jobs()
    }

    fn handle_start(&mut self, now: Instant) {
        match self.pending_start.take() {
            Some(pending) if pending.at <= now => self.transition_to_at(pending.request, now),
            Some(pending) => {
                self.pending_start = Some(pending);
                self.jobs.push_job(self.generation, JobType::Start);
            }
            None => {}
        }
    }

    fn advance(&mut self, now: Instant) {
        let Some(run) = &self.run else {
            return;
        };
        let elapsed = now.saturating_duration_since(run.started_at);
        if elapsed < run.duration {
            let progress = Transition::progress(run.duration, elapsed);
            self.render_frame(progress);
            self.jobs.push_job(self.generation, JobType::Frame);
        } else {
            self.complete();
        }
    }

    fn complete(&mut self) {
        let Some(run) = self.run.take() else {
            return;
        };
        self.from = run.target;
        self.initial_digits = self.target_digits.clone();
        self.render_static();
        log::debug!("transition settled on {}", self.from);
    }

    /// Position every wheel for raw transition progress `raw_progress`.
    ///
    /// Wheels are visited most-significant first. In cumulative mode the
    /// delta of each wheel carries into the less significant ones, so the
    /// display rolls like a single odometer.
    pub fn render_frame(&mut self, raw_progress: f64) {
        let (timing, direct) = match &mut self.run {
            Some(run) => {
                run.progress = raw_progress;
                (&run.timing, run.direct_animation)
            }
            None => (&self.config.transition.timing, self.config.direct_animation),
        };
        let eased = timing.evaluate(raw_progress);
        let radix = self.config.radix() as i128;

        self.layout
            .refresh_height(&self.surface, self.config.alphabet.len());

        let mut carry: i128 = 0;
        for d in (0..self.layout.len()).rev() {
            let initial = self.initial_digits[d] as i128;
            let delta = self.target_digits[d] as i128 - initial;
            carry += delta;
            let applied = if direct { delta } else { carry };
            let offset = (eased * applied as f64 + initial as f64).rem_euclid(radix as f64);
            self.offsets[d] = offset;
            self.layout.place_wheel(&mut self.surface, d, offset);
            carry *= radix;
        }
    }

    /// Render the settled value with every wheel exactly on its digit
    fn render_static(&mut self) {
        self.layout
            .refresh_height(&self.surface, self.config.alphabet.len());
        let digits = reversed_padded_digits(self.from, self.layout.len(), self.config.radix());
        for (d, digit) in digits.into_iter().enumerate() {
            self.offsets[d] = digit as f64;
            self.layout.place_wheel(&mut self.surface, d, digit as f64);
        }
    }

    fn render_current(&mut self) {
        match self.run.as_ref().map(|run| run.progress) {
            Some(progress) => self.render_frame(progress),
            None => self.render_static(),
        }
    }

    /// Replace all wheels with `width` fresh ones; the display restarts at zero
    fn rebuild(&mut self, width: usize) {
        log::debug!("rebuilding display: {} -> {} wheels", self.layout.len(), width);
        self.run = None;
        self.from = 0;
        self.layout.teardown(&mut self.surface);
        self.layout = DigitLayout::build(&mut self.surface, self.root, width, &self.config);

        let wheels = self.layout.len();
        self.initial_digits = vec![0; wheels];
        self.target_digits = vec![0; wheels];
        self.offsets = vec![0.0; wheels];
        self.render_static();
    }

    /// Mark the slot showing each digit of `value` as the selectable one
    fn set_select(&mut self, value: u64) {
        let digits = reversed_padded_digits(value, self.layout.len(), self.config.radix());
        self.layout.mark_selected(&mut self.surface, &digits);
    }

    pub fn state(&self) -> EngineState {
        if self.run.is_some() {
            EngineState::Running
        } else {
            EngineState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Last value the display fully settled on
    pub fn from(&self) -> u64 {
        self.from
    }

    /// Value the running transition heads for, or the settled value
    pub fn target(&self) -> u64 {
        self.run.as_ref().map_or(self.from, |run| run.target)
    }

    pub fn wheel_count(&self) -> usize {
        self.layout.len()
    }

    /// Offset of each wheel in slots, least-significant first
    pub fn wheel_offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn initial_digits(&self) -> &[u32] {
        &self.initial_digits
    }

    pub fn target_digits(&self) -> &[u32] {
        &self.target_digits
    }

    /// Height of one symbol slot in pixels
    pub fn slot_height(&self) -> f32 {
        self.layout.height()
    }

    pub fn layout(&self) -> &DigitLayout<S::Element> {
        &self.layout
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether work was queued since the last call; hosts that sleep
    /// between frames use this to decide when to wake up
    pub fn take_frame_request(&mut self) -> bool {
        self.jobs.take_frame_request()
    }

    pub fn config(&self) -> &FlipperConfig {
        &self.config
    }

    pub fn root(&self) -> S::Element {
        self.root
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to change fonts before [`Flipper::resize`]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

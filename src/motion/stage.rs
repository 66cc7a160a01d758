use std::time::Duration;

use rand::Rng;

use super::{
    config::MotionConfig,
    loading::{LoadingProgress, ProgressTick},
    timers::{TimerId, Timers},
    typewriter::{TypeTick, Typewriter},
};

/// Page lifecycle: splash, then a short hold at 100%, then the steady state
/// that lasts until unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    /// Progress hit 100 and the finish delay is running.
    Revealing,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Job {
    Progress,
    Finish,
    Type,
    NextWord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    Progress(f64),
    Loaded,
    Typed(usize),
    WordChanged(usize),
}

/// Animation state for one mounted page, plus the handles of every timer that
/// mutates it.
#[derive(Debug)]
pub struct Stage<R> {
    config: MotionConfig,
    rng: R,
    timers: Timers<Job>,
    phase: Phase,
    progress: LoadingProgress,
    typewriter: Typewriter,
    progress_timer: Option<TimerId>,
    finish_timer: Option<TimerId>,
    typing_timer: Option<TimerId>,
    pause_timer: Option<TimerId>,
    mounted: bool,
}

impl<R: Rng> Stage<R> {
    /// Creates the stage and arms the progress and typing timers.
    pub fn mount(config: MotionConfig, words: Vec<String>, rng: R) -> Self {
        let mut timers = Timers::new();
        let progress_timer = Some(timers.set_interval(Job::Progress, config.progress_tick));
        let mut stage = Self {
            config,
            rng,
            timers,
            phase: Phase::Loading,
            progress: LoadingProgress::new(),
            typewriter: Typewriter::new(words),
            progress_timer,
            finish_timer: None,
            typing_timer: None,
            pause_timer: None,
            mounted: true,
        };
        stage.arm_typing();
        log::debug!("stage mounted with {} timers", stage.timers.len());
        stage
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn progress(&self) -> &LoadingProgress {
        &self.progress
    }

    pub fn typed(&self) -> &str {
        self.typewriter.typed()
    }

    pub fn word_index(&self) -> usize {
        self.typewriter.index()
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Number of timers currently armed.
    pub fn armed(&self) -> usize {
        self.timers.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    /// Runs every timer that comes due within `elapsed`, in due order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<StageEvent> {
        let mut events = Vec::new();
        if !self.mounted {
            return events;
        }
        let deadline = self.timers.now() + elapsed;
        while let Some(fired) = self.timers.next_due(deadline) {
            match fired.key {
                Job::Progress => self.on_progress(&mut events),
                Job::Finish => self.on_finish(&mut events),
                Job::Type => self.on_type(&mut events),
                Job::NextWord => self.on_next_word(&mut events),
            }
        }
        self.timers.settle(deadline);
        events
    }

    /// Cancels every timer. Later calls to [`Stage::advance`] do nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.timers.clear_all();
        self.progress_timer = None;
        self.finish_timer = None;
        self.typing_timer = None;
        self.pause_timer = None;
        self.mounted = false;
        log::debug!("stage unmounted at {:?}", self.timers.now());
    }

    fn on_progress(&mut self, events: &mut Vec<StageEvent>) {
        match self.progress.tick(&mut self.rng, &self.config.progress_step) {
            ProgressTick::Advanced(p) => events.push(StageEvent::Progress(p)),
            ProgressTick::Reached => {
                events.push(StageEvent::Progress(self.progress.percent()));
                self.stop_progress();
                self.phase = Phase::Revealing;
                self.finish_timer = Some(
                    self.timers
                        .set_timeout(Job::Finish, self.config.finish_delay),
                );
                log::debug!("progress complete at {:?}", self.timers.now());
            }
            ProgressTick::Done => self.stop_progress(),
        }
    }

    fn on_finish(&mut self, events: &mut Vec<StageEvent>) {
        self.finish_timer = None;
        if self.phase == Phase::Idle {
            return;
        }
        self.phase = Phase::Idle;
        events.push(StageEvent::Loaded);
        log::debug!("loading finished at {:?}", self.timers.now());
    }

    fn on_type(&mut self, events: &mut Vec<StageEvent>) {
        match self.typewriter.tick() {
            TypeTick::Typed(n) => events.push(StageEvent::Typed(n)),
            TypeTick::Finished => {
                if let Some(id) = self.typing_timer.take() {
                    self.timers.clear(id);
                }
                self.pause_timer = Some(
                    self.timers
                        .set_timeout(Job::NextWord, self.config.skill_pause),
                );
            }
        }
    }

    fn on_next_word(&mut self, events: &mut Vec<StageEvent>) {
        self.pause_timer = None;
        let index = self.typewriter.advance();
        events.push(StageEvent::WordChanged(index));
        self.arm_typing();
    }

    fn stop_progress(&mut self) {
        if let Some(id) = self.progress_timer.take() {
            self.timers.clear(id);
        }
    }

    /// Typing is scoped to the current word: any previous interval is cleared
    /// before the next one is armed.
    fn arm_typing(&mut self) {
        if let Some(id) = self.typing_timer.take() {
            self.timers.clear(id);
        }
        if self.typewriter.is_empty() {
            return;
        }
        self.typing_timer = Some(
            self.timers
                .set_interval(Job::Type, self.config.typing_tick),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn skills() -> Vec<String> {
        [
            "React",
            "Next.js",
            "TypeScript",
            "Node.js",
            "Python",
            "PostgreSQL",
            "MongoDB",
            "AWS",
            "Docker",
            "GraphQL",
            "Tailwind CSS",
            "Vue.js",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn stage(seed: u64) -> Stage<StdRng> {
        Stage::mount(MotionConfig::default(), skills(), StdRng::seed_from_u64(seed))
    }

    /// Advances in heartbeat steps, the way the browser shell does.
    fn run(stage: &mut Stage<StdRng>, total: Duration) -> Vec<StageEvent> {
        let beat = stage.config().heartbeat;
        let mut events = Vec::new();
        let mut t = Duration::ZERO;
        while t < total {
            events.extend(stage.advance(beat));
            t += beat;
        }
        events
    }

    #[test]
    fn test_mounts_loading_at_zero() {
        let s = stage(1);
        assert_eq!(s.phase(), Phase::Loading);
        assert!(s.is_loading());
        assert_eq!(s.progress().percent(), 0.0);
        assert_eq!(s.typed(), "");
        assert_eq!(s.armed(), 2);
    }

    #[test]
    fn test_loads_exactly_once() {
        for seed in 0..50 {
            let mut s = stage(seed);
            // at most 20 ticks of 150ms at the minimum step, then the finish delay
            let events = run(&mut s, ms(20 * 150 + 500));
            let loaded = events.iter().filter(|e| **e == StageEvent::Loaded).count();
            assert_eq!(loaded, 1, "seed {seed}");
            assert_eq!(s.phase(), Phase::Idle);
            assert_eq!(s.progress().percent(), 100.0);

            let later = run(&mut s, ms(10_000));
            assert!(!later.contains(&StageEvent::Loaded));
            assert!(!later.iter().any(|e| matches!(e, StageEvent::Progress(_))));
            assert!(!s.is_loading());
        }
    }

    #[test]
    fn test_progress_events_monotonic() {
        let mut s = stage(99);
        let events = run(&mut s, ms(4000));
        let progress: Vec<f64> = events
            .iter()
            .filter_map(|e| match e {
                StageEvent::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert!(!progress.is_empty());
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.last().copied(), Some(100.0));
    }

    #[test]
    fn test_finish_delay_holds_revealing() {
        let mut s = stage(3);
        let mut t = Duration::ZERO;
        while s.phase() == Phase::Loading {
            s.advance(ms(50));
            t += ms(50);
            assert!(t <= ms(3000));
        }
        assert_eq!(s.phase(), Phase::Revealing);
        s.advance(ms(450));
        assert_eq!(s.phase(), Phase::Revealing);
        let events = s.advance(ms(50));
        assert_eq!(events.iter().filter(|e| **e == StageEvent::Loaded).count(), 1);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_typing_timeline() {
        let mut s = stage(5);
        // "React": empty prefix at 100ms, full word at 600ms
        s.advance(ms(100));
        assert_eq!(s.typed(), "");
        s.advance(ms(300));
        assert_eq!(s.typed(), "Rea");
        s.advance(ms(200));
        assert_eq!(s.typed(), "React");
        // finished at 700ms, pause until 2700ms
        s.advance(ms(2000));
        assert_eq!(s.word_index(), 0);
        assert_eq!(s.typed(), "React");
        let events = s.advance(ms(100));
        assert!(events.contains(&StageEvent::WordChanged(1)));
        assert_eq!(s.typed(), "");
        s.advance(ms(200));
        assert_eq!(s.typed(), "N");
    }

    #[test]
    fn test_typing_intervals_never_overlap() {
        let mut s = stage(11);
        let beat = s.config().heartbeat;
        for _ in 0..2000 {
            s.advance(beat);
            // progress or finish, plus typing or pause
            assert!(s.armed() <= 2);
        }
        assert_eq!(s.armed(), 1);
    }

    #[test]
    fn test_index_wraps() {
        let mut s = stage(2);
        let events = run(&mut s, ms(60_000));
        let changes: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                StageEvent::WordChanged(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert!(changes.len() > 12);
        assert_eq!(changes[0], 1);
        for w in changes.windows(2) {
            assert_eq!(w[1], (w[0] + 1) % 12);
        }
        assert!(changes.contains(&0));
    }

    #[test]
    fn test_typed_text_is_prefix_of_current_word() {
        let words = skills();
        let mut s = stage(8);
        for _ in 0..1000 {
            s.advance(ms(50));
            let word = &words[s.word_index()];
            assert!(word.starts_with(s.typed()));
        }
    }

    #[test]
    fn test_unmount_cancels_everything() {
        let mut s = stage(4);
        s.advance(ms(300));
        s.unmount();
        assert_eq!(s.armed(), 0);
        assert!(!s.is_mounted());
        let before = s.progress().percent();
        assert!(s.advance(ms(10_000)).is_empty());
        assert_eq!(s.progress().percent(), before);
        assert!(s.is_loading());
        s.unmount();
    }

    #[test]
    fn test_empty_word_list_only_loads() {
        let mut s = Stage::mount(MotionConfig::default(), Vec::new(), StdRng::seed_from_u64(0));
        assert_eq!(s.armed(), 1);
        let events = run(&mut s, ms(5000));
        assert!(events
            .iter()
            .all(|e| matches!(e, StageEvent::Progress(_) | StageEvent::Loaded)));
        assert_eq!(s.armed(), 0);
        assert_eq!(s.typed(), "");
    }

    #[test]
    fn test_single_large_advance_matches_heartbeats() {
        let mut stepped = stage(21);
        let mut jumped = stage(21);
        let a = run(&mut stepped, ms(5000));
        let b = jumped.advance(ms(5000));
        assert_eq!(a, b);
        assert_eq!(stepped.typed(), jumped.typed());
        assert_eq!(stepped.elapsed(), jumped.elapsed());
    }
}

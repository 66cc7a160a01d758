use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};

/// Handle to an armed timer. Handles are never reused within one [`Timers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that came due while the clock was advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub key: K,
    pub at: Duration,
}

#[derive(Debug)]
struct Entry<K> {
    key: K,
    period: Option<Duration>,
}

/// Virtual-time timer queue.
///
/// Time only moves when the owner pulls due timers with [`Timers::next_due`]
/// and then calls [`Timers::settle`]. Timers due at the same instant fire in
/// the order they were armed.
#[derive(Debug)]
pub struct Timers<K> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), Entry<K>>,
    due_at: HashMap<TimerId, Duration>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            due_at: HashMap::new(),
        }
    }
}

impl<K: Copy> Timers<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.due_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due_at.is_empty()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.due_at.contains_key(&id)
    }

    /// Arms a repeating timer whose first firing is one `period` from now.
    /// Zero periods are raised to one millisecond so the queue always drains.
    pub fn set_interval(&mut self, key: K, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.arm(key, period, Some(period))
    }

    pub fn set_timeout(&mut self, key: K, delay: Duration) -> TimerId {
        self.arm(key, delay, None)
    }

    /// Cancels a timer. Returns false if it already fired (timeouts) or was
    /// cleared before.
    pub fn clear(&mut self, id: TimerId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.queue.clear();
        self.due_at.clear();
    }

    /// Pops the earliest timer due at or before `deadline`, moving the clock to
    /// its due time. Intervals are re-armed one period later under the same id.
    pub fn next_due(&mut self, deadline: Duration) -> Option<Fired<K>> {
        let (&(at, id), _) = self.queue.first_key_value()?;
        if at > deadline {
            return None;
        }
        let entry = self.queue.remove(&(at, id))?;
        self.now = at;
        let key = entry.key;
        match entry.period {
            Some(period) => {
                let next = at + period;
                self.due_at.insert(id, next);
                self.queue.insert((next, id), entry);
            }
            None => {
                self.due_at.remove(&id);
            }
        }
        Some(Fired { id, key, at })
    }

    /// Moves the clock forward to `deadline` once every due timer was pulled.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }

    fn arm(&mut self, key: K, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        self.due_at.insert(id, due);
        self.queue.insert((due, id), Entry { key, period });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(timers: &mut Timers<&'static str>, until: Duration) -> Vec<(&'static str, u64)> {
        let mut out = Vec::new();
        while let Some(f) = timers.next_due(until) {
            out.push((f.key, f.at.as_millis() as u64));
        }
        timers.settle(until);
        out
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut timers = Timers::new();
        timers.set_timeout("late", ms(300));
        timers.set_timeout("early", ms(100));
        timers.set_interval("tick", ms(150));

        let fired = drain(&mut timers, ms(300));
        assert_eq!(
            fired,
            vec![("early", 100), ("tick", 150), ("late", 300), ("tick", 300)]
        );
        assert_eq!(timers.now(), ms(300));
    }

    #[test]
    fn test_same_instant_keeps_arming_order() {
        let mut timers = Timers::new();
        timers.set_timeout("a", ms(50));
        timers.set_timeout("b", ms(50));
        timers.set_timeout("c", ms(50));
        let fired: Vec<_> = drain(&mut timers, ms(50)).into_iter().map(|f| f.0).collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_interval_rearms_until_cleared() {
        let mut timers = Timers::new();
        let id = timers.set_interval("tick", ms(100));
        assert_eq!(drain(&mut timers, ms(350)).len(), 3);
        assert!(timers.is_armed(id));

        assert!(timers.clear(id));
        assert!(!timers.is_armed(id));
        assert!(drain(&mut timers, ms(1000)).is_empty());
        assert!(!timers.clear(id));
    }

    #[test]
    fn test_rearmed_interval_keeps_its_key() {
        let mut timers = Timers::new();
        let id = timers.set_interval("beat", ms(40));
        let first = timers.next_due(ms(80)).expect("first beat should be due");
        let second = timers.next_due(ms(80)).expect("second beat should be due");
        assert_eq!((first.id, first.key, first.at), (id, "beat", ms(40)));
        assert_eq!((second.id, second.key, second.at), (id, "beat", ms(80)));
        assert!(timers.next_due(ms(80)).is_none());
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut timers = Timers::new();
        let id = timers.set_timeout("once", ms(20));
        assert_eq!(drain(&mut timers, ms(100)), vec![("once", 20)]);
        assert!(!timers.is_armed(id));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_delays_are_relative_to_current_time() {
        let mut timers = Timers::new();
        drain(&mut timers, ms(1000));
        timers.set_timeout("later", ms(500));
        assert!(drain(&mut timers, ms(1499)).is_empty());
        assert_eq!(drain(&mut timers, ms(1500)), vec![("later", 1500)]);
    }

    #[test]
    fn test_clear_all() {
        let mut timers = Timers::new();
        timers.set_interval("a", ms(10));
        timers.set_timeout("b", ms(10));
        timers.clear_all();
        assert!(timers.is_empty());
        assert!(drain(&mut timers, ms(100)).is_empty());
    }

    #[test]
    fn test_zero_period_interval_still_drains() {
        let mut timers = Timers::new();
        timers.set_interval("spin", Duration::ZERO);
        assert_eq!(drain(&mut timers, ms(3)).len(), 3);
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut timers: Timers<&str> = Timers::new();
        timers.settle(ms(200));
        timers.settle(ms(100));
        assert_eq!(timers.now(), ms(200));
    }
}

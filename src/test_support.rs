//! Deterministic stand-in for browser timers.

pub struct Timeline<E> {
    now: u64,
    next_seq: u64,
    pending: Vec<(u64, u64, E)>,
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn advance_to(&mut self, at: u64) {
        assert!(at >= self.now, "timeline cannot run backwards");
        self.now = at;
    }

    pub fn schedule(&mut self, delay_ms: u32, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push((self.now + u64::from(delay_ms), seq, event));
    }

    /// Pops the earliest due event (FIFO among equal deadlines) and moves the clock to it.
    pub fn next(&mut self) -> Option<(u64, E)> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(position, _)| position)?;
        let (due, _, event) = self.pending.remove(position);
        self.now = self.now.max(due);
        Some((due, event))
    }

    /// Like [`Timeline::next`], but only for events due strictly before `at`.
    pub fn next_due_before(&mut self, at: u64) -> Option<(u64, E)> {
        let due_soon = self.pending.iter().any(|(due, _, _)| *due < at);
        if due_soon {
            self.next()
        } else {
            None
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

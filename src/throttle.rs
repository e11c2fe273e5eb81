/// Trailing-edge throttle for bursty event handlers such as `scroll`.
///
/// Every [`Throttle::call`] re-arms the window, so the wrapped work runs
/// once, `window_ms` after the last call of a burst. The host schedules a
/// timer per call and hands the returned ticket back to [`Throttle::fire`];
/// only the newest ticket is honoured.
#[derive(Debug)]
pub struct Throttle {
    window_ms: u32,
    latest: u64,
    armed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Throttle {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            latest: 0,
            armed: false,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn call(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        self.armed = true;
        Ticket(self.latest)
    }

    /// Returns `true` when the wrapped work should run now.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if !self.armed || ticket.0 != self.latest {
            return false;
        }

        self.armed = false;
        true
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.armed
    }
}

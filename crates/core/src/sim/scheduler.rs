//! Simulation scheduler.
//!
//! The sequencer suspends in exactly two ways: until the next active clock
//! edge, and for a fixed duration. Both are cooperative: they advance
//! simulated time and deliver every rising edge crossed along the way to the
//! device. Nothing here blocks the host thread.

use tracing::trace;

use crate::device::Device;

/// Time-advancing primitives the sequencer drives.
pub trait Scheduler {
    /// Current simulated time in nanoseconds.
    fn now_ns(&self) -> u64;

    /// Advances to the next active clock edge strictly after now and delivers it.
    ///
    /// Returns the time of that edge.
    fn wait_rising_edge(&mut self, device: &mut dyn Device) -> u64;

    /// Advances time by `duration_ns`, delivering any rising edges in
    /// `(now, now + duration_ns]` to the device.
    fn wait(&mut self, duration_ns: u64, device: &mut dyn Device);

    /// Number of active edges delivered so far.
    fn edge_count(&self) -> u64;
}

/// Free-running clock with rising edges at every positive multiple of the period.
#[derive(Debug, Clone)]
pub struct ClockScheduler {
    period_ns: u64,
    now_ns: u64,
    edges: u64,
}

impl ClockScheduler {
    /// Creates a clock at time zero.
    ///
    /// A zero period is clamped to 1 ns; configurations are validated before
    /// they reach here.
    pub fn new(period_ns: u64) -> Self {
        Self {
            period_ns: period_ns.max(1),
            now_ns: 0,
            edges: 0,
        }
    }

    /// Clock period in nanoseconds.
    pub const fn period_ns(&self) -> u64 {
        self.period_ns
    }

    /// Time of the first rising edge strictly after `t`.
    ///
    /// Saturates at `u64::MAX` instead of wrapping.
    const fn next_edge_after(&self, t: u64) -> u64 {
        (t / self.period_ns)
            .saturating_add(1)
            .saturating_mul(self.period_ns)
    }

    fn deliver_edge(&mut self, at_ns: u64, device: &mut dyn Device) {
        self.now_ns = at_ns;
        self.edges += 1;
        trace!(time_ns = at_ns, edge = self.edges, "clk rising edge");
        device.rising_edge();
    }
}

impl Scheduler for ClockScheduler {
    fn now_ns(&self) -> u64 {
        self.now_ns
    }

    fn wait_rising_edge(&mut self, device: &mut dyn Device) -> u64 {
        let edge = self.next_edge_after(self.now_ns);
        self.deliver_edge(edge, device);
        edge
    }

    fn wait(&mut self, duration_ns: u64, device: &mut dyn Device) {
        let target = self.now_ns.saturating_add(duration_ns);
        let mut edge = self.next_edge_after(self.now_ns);
        while edge <= target && edge > self.now_ns {
            self.deliver_edge(edge, device);
            edge = self.next_edge_after(edge);
        }
        self.now_ns = target;
    }

    fn edge_count(&self) -> u64 {
        self.edges
    }
}

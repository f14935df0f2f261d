//! Clock scheduler tests.

use aluv_core::device::TtAlu;
use aluv_core::sim::{ClockScheduler, Scheduler};
use pretty_assertions::assert_eq;

use crate::common::mocks::recording::{Event, RecordingDevice};

fn edges(device: &RecordingDevice<TtAlu>) -> usize {
    device.events().iter().filter(|e| **e == Event::Edge).count()
}

#[test]
fn test_first_edge_is_one_period_in() {
    let mut clk = ClockScheduler::new(20);
    let mut dev = RecordingDevice::new(TtAlu::new());
    assert_eq!(clk.wait_rising_edge(&mut dev), 20);
    assert_eq!(clk.wait_rising_edge(&mut dev), 40);
    assert_eq!(clk.now_ns(), 40);
    assert_eq!(edges(&dev), 2);
}

#[test]
fn test_wait_delivers_edges_in_half_open_window() {
    let mut clk = ClockScheduler::new(20);
    let mut dev = RecordingDevice::new(TtAlu::new());

    // (0, 40] holds the edges at 20 and 40
    clk.wait(40, &mut dev);
    assert_eq!(clk.now_ns(), 40);
    assert_eq!(clk.edge_count(), 2);

    // (40, 50] holds none
    clk.wait(10, &mut dev);
    assert_eq!(clk.now_ns(), 50);
    assert_eq!(clk.edge_count(), 2);

    // from off-edge time the next edge is the next multiple
    assert_eq!(clk.wait_rising_edge(&mut dev), 60);
    assert_eq!(edges(&dev), 3);
}

#[test]
fn test_wait_zero_is_a_no_op() {
    let mut clk = ClockScheduler::new(20);
    let mut dev = RecordingDevice::new(TtAlu::new());
    clk.wait(0, &mut dev);
    assert_eq!(clk.now_ns(), 0);
    assert!(dev.events().is_empty());
}

#[test]
fn test_zero_period_is_clamped() {
    let clk = ClockScheduler::new(0);
    assert_eq!(clk.period_ns(), 1);
}

#[test]
fn test_edges_saturate_near_end_of_time() {
    let mut clk = ClockScheduler::new(1 << 62);
    let mut dev = RecordingDevice::new(TtAlu::new());

    // 2^62, 2^63, 3 * 2^62, then the saturated edge at u64::MAX
    clk.wait(u64::MAX, &mut dev);
    assert_eq!(clk.now_ns(), u64::MAX);
    assert_eq!(clk.edge_count(), 4);

    // nothing lies past u64::MAX
    clk.wait(1, &mut dev);
    assert_eq!(clk.now_ns(), u64::MAX);
    assert_eq!(clk.edge_count(), 4);
}

//! Count-up animation for the stats band.
//!
//! [`Countup`] is the pure sequence: strictly bounded, non-decreasing,
//! finite. [`AnimatedCounter`] wraps it in a Leptos component that drives
//! the machine from a recurring timer while its `start` gate is true, and
//! clears the timer on completion, on gate close, and on unmount.

use leptos::prelude::*;
use std::time::Duration;

/// Tick interval for the count-up timer, approximating 60Hz.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// The count-up sequence from 0 to a target value.
///
/// Each [`tick`](Countup::tick) advances an internal accumulator by a fixed
/// step sized so the run takes roughly `duration_ms`. The accumulator may
/// pass the target; the emitted value never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countup {
    target: u64,
    step: u64,
    accumulated: u64,
}

impl Countup {
    /// Build a sequence toward `target` paced for `duration_ms`.
    ///
    /// A zero target yields an already-finished machine, so callers never
    /// schedule a timer for it (and no duration division takes place on a
    /// zero step count).
    pub fn new(target: u64, duration_ms: u64) -> Self {
        let frames = (duration_ms / FRAME_INTERVAL_MS).max(1);
        let step = if target == 0 { 0 } else { target.div_ceil(frames) };
        Self {
            target,
            step,
            accumulated: 0,
        }
    }

    /// Advance one frame and return the value to display.
    ///
    /// Once finished, further ticks keep returning the target; a stray
    /// callback after completion cannot move the value.
    pub fn tick(&mut self) -> u64 {
        self.accumulated = self.accumulated.saturating_add(self.step);
        self.value()
    }

    /// Current emitted value, capped at the target.
    pub fn value(&self) -> u64 {
        self.accumulated.min(self.target)
    }

    /// Final value of the sequence.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the sequence has reached its target.
    pub fn is_finished(&self) -> bool {
        self.accumulated >= self.target
    }
}

/// Group a number with thousands separators: `10000` becomes `"10,000"`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A number that counts up from 0 to `target` once `start` becomes true.
///
/// The gate is typically fed by a section's scroll reveal. While the gate
/// is false the display stays at 0; on a false-to-true edge the sequence
/// (re)starts from 0. The interval is cleared when the sequence completes,
/// when the gate closes, and on unmount.
#[component]
pub fn AnimatedCounter(
    /// Final value of the count-up.
    target: u64,
    /// Approximate animation length.
    #[prop(default = 2000)]
    duration_ms: u64,
    /// Rendered before the number.
    #[prop(optional, into)]
    prefix: Option<String>,
    /// Rendered after the number.
    #[prop(optional, into)]
    suffix: Option<String>,
    /// Gate: ticks only run while this is true.
    #[prop(into)]
    start: Signal<bool>,
) -> impl IntoView {
    let (value, set_value) = signal(0u64);
    let machine = StoredValue::new_local(None::<Countup>);
    let ticker = StoredValue::new_local(None::<IntervalHandle>);

    let stop = move || {
        ticker.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    Effect::new(move |prev: Option<bool>| {
        let started = start.get();
        let was_started = prev.unwrap_or(false);

        if started && !was_started {
            stop();
            let countup = Countup::new(target, duration_ms);
            if countup.is_finished() {
                // target == 0: terminate immediately, no timer scheduled
                set_value.set(countup.target());
                return started;
            }
            machine.set_value(Some(countup));
            set_value.set(0);
            let scheduled = set_interval_with_handle(
                move || {
                    let next = machine.with_value(|slot| {
                        slot.map(|mut countup| {
                            let emitted = countup.tick();
                            (countup, emitted)
                        })
                    });
                    if let Some((countup, emitted)) = next {
                        machine.set_value(Some(countup));
                        set_value.set(emitted);
                        if countup.is_finished() {
                            stop();
                        }
                    }
                },
                Duration::from_millis(FRAME_INTERVAL_MS),
            );
            if let Ok(handle) = scheduled {
                ticker.set_value(Some(handle));
            }
        } else if !started && was_started {
            stop();
        }
        started
    });

    on_cleanup(stop);

    let prefix = prefix.unwrap_or_default();
    let suffix = suffix.unwrap_or_default();
    view! {
        <span>{move || format!("{}{}{}", prefix, format_grouped(value.get()), suffix)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_completion(mut countup: Countup) -> Vec<u64> {
        let mut emitted = vec![countup.value()];
        while !countup.is_finished() {
            emitted.push(countup.tick());
        }
        emitted
    }

    #[test]
    fn sequence_is_nondecreasing_and_ends_exactly_at_target() {
        for target in [1u64, 7, 99, 200, 10_000, 1_000_003] {
            let emitted = run_to_completion(Countup::new(target, 2000));
            assert_eq!(emitted[0], 0);
            assert_eq!(*emitted.last().unwrap(), target);
            for window in emitted.windows(2) {
                assert!(window[0] <= window[1]);
            }
            assert!(emitted.iter().all(|&v| v <= target));
        }
    }

    #[test]
    fn step_is_sized_to_finish_within_the_frame_count() {
        // 2000ms at 16ms per frame is 125 frames; 10_000 / 125 = 80.
        let mut countup = Countup::new(10_000, 2000);
        assert_eq!(countup.tick(), 80);
        assert_eq!(countup.tick(), 160);
    }

    #[test]
    fn zero_target_is_finished_before_any_tick() {
        let countup = Countup::new(0, 2000);
        assert!(countup.is_finished());
        assert_eq!(countup.value(), 0);
        // The emitted sequence is exactly [0]; callers schedule no timer.
        assert_eq!(run_to_completion(countup), vec![0]);
    }

    #[test]
    fn zero_duration_does_not_divide_by_zero() {
        let emitted = run_to_completion(Countup::new(42, 0));
        assert_eq!(*emitted.last().unwrap(), 42);
    }

    #[test]
    fn finished_machine_ignores_stray_ticks() {
        let mut countup = Countup::new(5, 2000);
        while !countup.is_finished() {
            countup.tick();
        }
        // A callback firing after completion cannot move the value.
        assert_eq!(countup.tick(), 5);
        assert_eq!(countup.tick(), 5);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(10_000), "10,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }
}

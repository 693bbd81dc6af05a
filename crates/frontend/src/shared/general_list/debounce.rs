//! Debounce for fast-changing values (search text).
//!
//! [`Debouncer`] decides which input settles; [`use_debounced`] drives it from
//! a Leptos signal with a browser timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Handle of one scheduled propagation. Only the latest ticket may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Keeps the most recent input; each new input replaces whatever was pending.
///
/// Timing lives outside: whoever calls [`schedule`](Self::schedule) starts a
/// timer for the returned ticket and calls [`fire`](Self::fire) when it
/// elapses. Only the ticket of the last input settles, so a value propagates
/// `delay` after the last change.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    next_ticket: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            next_ticket: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new input, cancelling the pending one.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Timer callback: settles the pending value if `ticket` is still current.
    ///
    /// The settled value is returned even when it equals an earlier one; the
    /// consumer decides whether it changes anything.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drops the pending value without propagating it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Signal that follows `source` once it has been stable for `delay_ms`.
///
/// The pending value is dropped when the owner is disposed, so a timer that
/// fires after unmount writes nothing.
pub fn use_debounced<T>(source: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (settled, set_settled) = signal(source.get_untracked());
    let gate = StoredValue::new(Debouncer::<T>::new());

    Effect::new(move |first_run: Option<()>| {
        let value = source.get();
        if first_run.is_none() {
            return;
        }
        let Some(ticket) = gate.try_update_value(|d| d.schedule(value)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(Some(value)) = gate.try_update_value(|d| d.fire(ticket)) {
                let _ = set_settled.try_set(value);
            }
        });
    });

    on_cleanup(move || {
        gate.try_update_value(|d| d.cancel());
    });

    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_value_propagates() {
        let mut d = Debouncer::new();
        let t1 = d.schedule("a".to_string());
        let t2 = d.schedule("ab".to_string());
        let t3 = d.schedule("abc".to_string());

        // timers of superseded inputs elapse first
        assert_eq!(d.fire(t1), None);
        assert_eq!(d.fire(t2), None);
        assert_eq!(d.fire(t3), Some("abc".to_string()));
        // settles once
        assert_eq!(d.fire(t3), None);
    }

    #[test]
    fn test_stale_ticket_keeps_pending_value() {
        let mut d = Debouncer::new();
        let first = d.schedule(1u32);
        let second = d.schedule(2u32);

        assert_eq!(d.fire(first), None);
        assert_eq!(d.fire(second), Some(2));
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let mut d = Debouncer::new();
        let ticket = d.schedule("typed".to_string());
        d.cancel();

        assert_eq!(d.fire(ticket), None);
    }

    #[test]
    fn test_spaced_inputs_each_propagate() {
        let mut d = Debouncer::new();
        let t1 = d.schedule(1);
        assert_eq!(d.fire(t1), Some(1));
        let t2 = d.schedule(2);
        assert_eq!(d.fire(t2), Some(2));
    }

    // "foo" settles, the box is cleared from outside, then "foo" is typed again
    // before the "" timer elapses: "foo" must settle again.
    #[test]
    fn test_repeated_value_settles_again() {
        let mut d = Debouncer::new();
        let first = d.schedule("foo".to_string());
        assert_eq!(d.fire(first), Some("foo".to_string()));

        let cleared = d.schedule(String::new());
        let retyped = d.schedule("foo".to_string());
        assert_eq!(d.fire(cleared), None);
        assert_eq!(d.fire(retyped), Some("foo".to_string()));
    }
}

//! Fixed-interval refresh loop for analytics and listing pages.
//!
//! [`PollingLoop`] is the pure state: enabled flag, interval, last-run
//! timestamp. [`use_polling`] wires it to a browser interval: at most one
//! timer per call site, recreated when the toggle or the interval changes,
//! cleared deterministically on unmount. A failed refresh never disables
//! the timer; the next tick simply tries again.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const DEFAULT_INTERVAL_MS: u32 = 30_000;
const MIN_INTERVAL_MS: u32 = 1_000;

/// Interval choices offered by the polling controls.
pub const INTERVAL_OPTIONS: &[(u32, &str)] = &[
    (10_000, "10 seconds"),
    (30_000, "30 seconds"),
    (60_000, "1 minute"),
    (300_000, "5 minutes"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollingLoop {
    enabled: bool,
    interval_ms: u32,
    last_run_at: Option<DateTime<Utc>>,
}

impl PollingLoop {
    /// New loop, disabled until `start` is called.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            enabled: false,
            interval_ms: interval_ms.max(MIN_INTERVAL_MS),
            last_run_at: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_run_at(&self) -> Option<DateTime<Utc>> {
        self.last_run_at
    }

    /// "HH:MM:SS UTC" readout for the page header.
    pub fn last_run_label(&self) -> Option<String> {
        self.last_run_at
            .map(|t| t.format("%H:%M:%S UTC").to_string())
    }

    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(MIN_INTERVAL_MS);
    }

    /// Timer callback gate: true means the refresh callback should run now.
    /// A tick that lands after `stop` is a no-op.
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.last_run_at = Some(Utc::now());
        true
    }

    /// Manual refresh ("Retry" button and initial mount share this path).
    pub fn mark_refreshed(&mut self) {
        self.last_run_at = Some(Utc::now());
    }
}

/// Attach a browser interval to a reactive [`PollingLoop`].
///
/// Returns the `refresh_now` closure: it stamps the loop and invokes the
/// same callback the timer uses, for initial mount and manual retry.
pub fn use_polling(
    state: RwSignal<PollingLoop>,
    refresh: impl Fn() + Clone + Send + Sync + 'static,
) -> impl Fn() + Clone + Send + Sync {
    let timer_id = StoredValue::new(None::<i32>);

    let clear = move || {
        if let Some(id) = timer_id.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
            timer_id.set_value(None);
        }
    };

    // Recreate the timer only when the toggle or the interval changes;
    // last_run_at updates from ticks must not reschedule it.
    let config = Memo::new(move |_| state.with(|p| (p.is_enabled(), p.interval_ms())));

    let tick_refresh = refresh.clone();
    Effect::new(move |_| {
        let (enabled, interval_ms) = config.get();
        clear();
        if !enabled {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let refresh = tick_refresh.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if state.try_update(|p| p.tick()).unwrap_or(false) {
                refresh();
            }
        }) as Box<dyn Fn()>);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            interval_ms as i32,
        ) {
            Ok(id) => {
                closure.forget();
                timer_id.set_value(Some(id));
            }
            Err(e) => log::error!("failed to schedule polling timer: {:?}", e),
        }
    });

    on_cleanup(move || {
        clear();
    });

    move || {
        state.update(|p| p.mark_refreshed());
        refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_before_tick_suppresses_refresh() {
        let mut p = PollingLoop::new(30_000);
        let mut runs = 0;

        // initial mount path
        p.mark_refreshed();
        runs += 1;

        p.start();
        p.stop();
        // the timer fires once more after stop; the gate must hold it
        if p.tick() {
            runs += 1;
        }
        assert_eq!(runs, 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut p = PollingLoop::new(30_000);
        p.stop();
        p.stop();
        assert!(!p.is_enabled());
    }

    #[test]
    fn tick_runs_and_stamps_when_enabled() {
        let mut p = PollingLoop::new(30_000);
        p.start();
        assert!(p.last_run_at().is_none());
        assert!(p.tick());
        assert!(p.last_run_at().is_some());
    }

    #[test]
    fn interval_is_clamped() {
        let mut p = PollingLoop::new(10);
        assert_eq!(p.interval_ms(), 1_000);
        p.set_interval(0);
        assert_eq!(p.interval_ms(), 1_000);
        p.set_interval(60_000);
        assert_eq!(p.interval_ms(), 60_000);
    }
}

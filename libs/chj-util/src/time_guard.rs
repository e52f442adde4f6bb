//! # Timing of rendering phases.

//! `time_guard!` is only active if the `TIME_GUARD` env var is set to
//! a truthy value or `enabled_set(true)` was called in the current
//! thread. It can be statically disabled (compiled out completely) by
//! writing `notime_guard!` instead.

use std::{time::Instant, fmt::Debug, cell::Cell};

fn time_guard_env_get() -> bool {
    match std::env::var("TIME_GUARD") {
        Ok(v) => !matches!(v.as_str(), "0" | "" | "off" | "false" | "no"),
        Err(_) => false
    }
}

thread_local!{
    pub static ENABLED: Cell<bool> = Cell::new(time_guard_env_get());
}

/// Enable `time_guard!` for the current thread.
pub fn enabled_set(on: bool) {
    ENABLED.with(|cell| cell.set(on))
}

pub fn enabled() -> bool {
    ENABLED.with(|old| old.get())
}

pub enum TimeGuard<S: Debug> {
    Disabled,
    Enabled {
        name: S,
        start: Instant
    },
}

impl<S: Debug> TimeGuard<S> {
    pub fn new(name: S) -> Self {
        if enabled() {
            TimeGuard::Enabled { name, start: Instant::now() }
        } else {
            TimeGuard::Disabled
        }
    }
}

impl<S: Debug> Drop for TimeGuard<S> {
    fn drop(&mut self) {
        match self {
            TimeGuard::Disabled => (),
            TimeGuard::Enabled { name, start } => {
                let elapsed = start.elapsed();
                eprintln!("time {:?}: {:?}", name, elapsed);
            },
        }
    }
}

/// Reports the time until the end of the enclosing scope to stderr.
#[macro_export]
macro_rules! time_guard {
    ($namestr:expr) => {
        let _guard = $crate::time_guard::TimeGuard::new($namestr);
    }
}

#[macro_export]
macro_rules! notime_guard {
    ($namestr:expr) => {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_enabled_set_is_per_thread() {
        enabled_set(true);
        assert!(enabled());
        let other = std::thread::spawn(|| {
            enabled_set(false);
            enabled()
        }).join().expect("thread does not panic");
        assert!(!other);
        assert!(enabled());
        enabled_set(false);
        assert!(matches!(TimeGuard::new("x"), TimeGuard::Disabled));
    }
}

// Copyright (c) 2025 The Botho Foundation

//! Logging.
//!
//! Library crates emit events through `tracing` directly; this module only
//! holds the pieces binaries, tests and benches need around that:
//! a timing guard and (with the `loggers` feature) subscriber setup.
//! Filtering is controlled by `RUST_LOG`, falling back to `DD_LOG`.

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        pub use tracing::{debug, error, info, trace, warn};

        use std::{format, string::String, time::Instant};

        /// Emit a trace event with the elapsed time when the enclosing scope
        /// ends.
        ///
        /// ```
        /// # use dd_common::trace_time;
        /// {
        ///     trace_time!("preprocess ring of {} keys", 64);
        ///     // ... work ...
        /// }
        /// ```
        #[macro_export]
        macro_rules! trace_time {
            ($($arg:tt)+) => {
                let _trace_time = $crate::logger::TraceTime::new(format!($($arg)+));
            }
        }

        /// Scope guard measuring elapsed time, reported on drop.
        pub struct TraceTime {
            msg: String,
            start: Instant,
        }

        impl TraceTime {
            /// Start a timer with the given message.
            pub fn new(msg: String) -> Self {
                Self {
                    msg,
                    start: Instant::now(),
                }
            }

            /// Milliseconds since the guard was created.
            pub fn elapsed_ms(&self) -> f64 {
                self.start.elapsed().as_secs_f64() * 1000.0
            }
        }

        impl Drop for TraceTime {
            fn drop(&mut self) {
                let time_in_ms = self.elapsed_ms();
                let time = format_duration_ms(time_in_ms);
                tracing::trace!(duration_ms = time_in_ms, "{}: took {}", self.msg, time);
            }
        }

        /// Render a millisecond count with a unit suited to its magnitude.
        pub fn format_duration_ms(time_in_ms: f64) -> String {
            match time_in_ms as u64 {
                0..=3000 => format!("{time_in_ms:.2}ms"),
                3001..=60000 => format!("{:.2}s", time_in_ms / 1000.0),
                _ => format!("{:.2}m", time_in_ms / 1000.0 / 60.0),
            }
        }

        #[cfg(test)]
        mod trace_time_tests {
            use super::*;

            #[test]
            fn basic_trace_time() {
                let _ = tracing_subscriber::fmt()
                    .with_test_writer()
                    .try_init();

                {
                    trace_time!("test inner");
                    std::thread::sleep(std::time::Duration::from_millis(10));
                }

                trace_time!("test outer {}", 1);
                std::thread::sleep(std::time::Duration::from_millis(10));
            }

            #[test]
            fn duration_units() {
                assert_eq!(format_duration_ms(12.5), "12.50ms");
                assert_eq!(format_duration_ms(4500.0), "4.50s");
                assert_eq!(format_duration_ms(90_000.0), "1.50m");
            }

            #[test]
            fn elapsed_is_monotonic() {
                let guard = TraceTime::new("elapsed".into());
                let first = guard.elapsed_ms();
                std::thread::sleep(std::time::Duration::from_millis(2));
                assert!(guard.elapsed_ms() >= first);
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "loggers")] {
        mod loggers;
        pub use loggers::*;
    }
}

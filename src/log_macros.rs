//! Leveled, `format!`-style logging macros over a [`Logger`](crate::Logger)
//! reference.
//!
//! The runtime threshold does the filtering; below-threshold calls still
//! pay for the `format!`, so keep hot-path messages cheap.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        $logger.log($lvl, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::Severity::Debug, $($arg)*) };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::Severity::Info, $($arg)*) };
}

#[macro_export]
macro_rules! logger_warning {
    ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::Severity::Warning, $($arg)*) };
}

#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::Severity::Error, $($arg)*) };
}

#[macro_export]
macro_rules! logger_critical {
    ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::Severity::Critical, $($arg)*) };
}

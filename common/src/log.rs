//! Status logging macros.
//!
//! Every macro forwards to `tracing`; the target decides how the terminal
//! formatter decorates the line.

/// Target used for plain lines that carry no status symbol.
pub const PRINT_TARGET: &str = "aliasguard::print";

/// Target used for positive outcomes (`[+]`).
pub const SUCCESS_TARGET: &str = "aliasguard::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__private::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__private::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__private::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__private::tracing::error!($($arg)*)
    };
}

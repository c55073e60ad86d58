//! Platform abstraction layer to allow an embedding application to override the platform dependent parts of the
//! kernels, namely how log messages are emitted and how time is measured.
//!
//! The hooks are plain function pointers stored in atomics, so they can be registered and read without locks in
//! `no_std` environments as well.

use core::ptr::NonNull;
use core::sync::atomic::{AtomicPtr, Ordering};

static EMIT_LOG_MESSAGE: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());
static CURRENT_TICKS: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

type EmitLogMessageFn = fn(&LogEntry);
type CurrentTicksFn = fn() -> Timestamp;

/// Override the platform functions with user implementations.
///
/// Any `None` entries in the table are unchanged and will keep the currently registered implementation (or the
/// default one, if none was registered).
///
/// The registration is global and affects all threads. Kernels running concurrently with the registration may
/// observe either the old or the new hooks.
pub fn register_platform_impl(plat_impl: PlatformImpl) {
    if let Some(f) = plat_impl.emit_log_message {
        EMIT_LOG_MESSAGE.store(f as *mut (), Ordering::Release);
    }
    if let Some(f) = plat_impl.current_ticks {
        CURRENT_TICKS.store(f as *mut (), Ordering::Release);
    }
}

/// Restore the default implementation of all platform functions.
pub fn reset_platform_impl() {
    EMIT_LOG_MESSAGE.store(core::ptr::null_mut(), Ordering::Release);
    CURRENT_TICKS.store(core::ptr::null_mut(), Ordering::Release);
}

/// Table of platform functions.
#[derive(Clone, Copy, Default)]
pub struct PlatformImpl {
    emit_log_message: Option<EmitLogMessageFn>,
    current_ticks: Option<CurrentTicksFn>,
}
impl PlatformImpl {
    /// Create a new, empty PlatformImpl.
    ///
    /// By default, all functions are `None`, meaning the registered (or default) implementations will be used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current_ticks function.
    ///
    /// The current_ticks function returns a monotonically non-decreasing timestamp in system ticks.
    /// The default implementation returns the nanoseconds since the unix epoch if the `std` feature is enabled,
    /// and zero otherwise.
    ///
    /// The closure must be zero-sized, trivially copyable (and dropped), Send, Sync, and 'static.
    ///
    /// # Panics
    ///
    /// This function will panic if the provided closure is not zero-sized.
    pub fn set_current_ticks<F>(&mut self, f: F)
    where
        F: Fn() -> Timestamp + Copy + Send + Sync + 'static,
    {
        Self::check_closure_is_zero_sized::<F>();
        fn f_impl<F>() -> Timestamp
        where
            F: Fn() -> Timestamp + Copy + Send + Sync + 'static,
        {
            let f = PlatformImpl::closure_out_of_thin_air::<F>();
            f()
        }
        self.current_ticks = Some(f_impl::<F>);
        let _ = f;
    }

    /// Set the emit_log_message function.
    ///
    /// The default implementation discards all messages.
    ///
    /// The closure must be zero-sized, trivially copyable (and dropped), Send, Sync, and 'static.
    ///
    /// # Panics
    ///
    /// This function will panic if the provided closure is not zero-sized.
    pub fn set_emit_log_message<F>(&mut self, f: F)
    where
        F: Fn(&LogEntry) + Copy + Send + Sync + 'static,
    {
        Self::check_closure_is_zero_sized::<F>();
        fn f_impl<F>(entry: &LogEntry)
        where
            F: Fn(&LogEntry) + Copy + Send + Sync + 'static,
        {
            let f = PlatformImpl::closure_out_of_thin_air::<F>();
            f(entry)
        }
        self.emit_log_message = Some(f_impl::<F>);
        let _ = f;
    }

    fn check_closure_is_zero_sized<F: Copy + Send + Sync + 'static>() {
        assert_eq!(
            core::mem::size_of::<F>(),
            0,
            "Closure must be zero-sized to be registered as a platform function"
        );
    }

    fn closure_out_of_thin_air<F: Copy + Send + Sync + 'static>() -> &'static F {
        debug_assert_eq!(core::mem::size_of::<F>(), 0);
        // Safety: the closure is zero-sized, copy (and no drop), send, sync and 'static
        unsafe { NonNull::<F>::dangling().as_ref() }
    }
}

/// Platform timestamp in system ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Timestamp(u64);
impl Timestamp {
    /// Create a new Timestamp from the given tick count.
    pub fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Get the tick count of this Timestamp.
    pub fn ticks(&self) -> u64 {
        self.0
    }
}

/// Severity level of a log message
#[repr(u8)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum LogLevel {
    Debug = b'D',
    Info = b'I',
    Error = b'E',
    Fatal = b'F',
}

/// A log entry, consumed by the platform log message handler.
#[derive(Debug)]
pub struct LogEntry<'a> {
    /// Timestamp of the log message.
    pub timestamp: Timestamp,
    /// Log level of the message.
    pub level: LogLevel,
    /// Filename where the log message was emitted.
    pub filename: &'a str,
    /// Module path where the log message was emitted.
    pub function: &'a str,
    /// Line number where the log message was emitted.
    pub line: usize,
    /// The log message.
    pub message: &'a str,
}

pub(crate) fn current_ticks() -> Timestamp {
    let f = CURRENT_TICKS.load(Ordering::Acquire);
    if f.is_null() {
        return default_current_ticks();
    }
    // Safety: only `CurrentTicksFn` pointers are stored in CURRENT_TICKS
    let f = unsafe { core::mem::transmute::<*mut (), CurrentTicksFn>(f) };
    f()
}

fn default_current_ticks() -> Timestamp {
    cfg_if::cfg_if! { if #[cfg(feature = "std")] {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Timestamp(nanos)
    } else {
        Timestamp(0)
    } }
}

pub(crate) fn emit_log(
    timestamp: Timestamp,
    level: LogLevel,
    filename: &str,
    function: &str,
    line: usize,
    msg_args: core::fmt::Arguments,
) {
    let f = EMIT_LOG_MESSAGE.load(Ordering::Acquire);
    if f.is_null() {
        return;
    }
    // Safety: only `EmitLogMessageFn` pointers are stored in EMIT_LOG_MESSAGE
    let f = unsafe { core::mem::transmute::<*mut (), EmitLogMessageFn>(f) };

    const MAX_LOG_MESSAGE_LEN: usize = 256;
    struct FormatBuffer {
        buf: [u8; MAX_LOG_MESSAGE_LEN],
        len: usize,
    }
    impl core::fmt::Write for FormatBuffer {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let s = s.as_bytes();
            let remaining = &mut self.buf[self.len..];
            if s.len() > remaining.len() {
                return Err(core::fmt::Error); // not enough space
            }
            remaining[..s.len()].copy_from_slice(s);
            self.len += s.len();
            Ok(())
        }
    }

    let mut msg_buf = FormatBuffer {
        buf: [0; MAX_LOG_MESSAGE_LEN],
        len: 0,
    };
    let message = match core::fmt::write(&mut msg_buf, msg_args) {
        // only whole str slices are written, so the buffer is always valid utf8
        Ok(()) => core::str::from_utf8(&msg_buf.buf[..msg_buf.len]).unwrap_or("? (invalid utf8 str)"),
        Err(_) => "? (format error)",
    };

    f(&LogEntry {
        timestamp,
        level,
        filename,
        function,
        line,
        message,
    });
}

macro_rules! log {
    ($level:ident, $($arg:tt)*) => {{
        let timestamp = crate::platform::current_ticks();
        let level = crate::platform::LogLevel::$level;
        let filename = file!();
        let function = module_path!();
        let line = line!() as usize;
        crate::platform::emit_log(timestamp, level, filename, function, line, core::format_args!($($arg)*));
    }}
}
macro_rules! error {
    ($($arg:tt)*) => {{
        crate::log::log!(Error, $($arg)*);
    }}
}
macro_rules! debug {
    ($($arg:tt)*) => {{
        crate::log::log!(Debug, $($arg)*);
    }}
}
pub(crate) use debug;
pub(crate) use error;
pub(crate) use log;

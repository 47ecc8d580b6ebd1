use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps every record on the thread that emitted it.
///
/// Tests run on separate threads, so each test only sees its own records.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Runs `f` and returns its value along with the log records it emitted.
pub(super) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    // Fails once another test has installed the same logger.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    RECORDS.with(|records| records.borrow_mut().clear());
    let value = f();
    (value, RECORDS.with(RefCell::take))
}

/// Counts the warning records in `records`.
pub(super) fn warnings(records: &[(Level, String)]) -> usize {
    records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .count()
}

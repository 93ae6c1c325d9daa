/// Console and log-file output helpers
///
/// The greedy construction is a library, but the binary and long sweeps need
/// two levels of chatter that can be switched on and off at runtime without
/// threading a logger through every call:
///     - 'debug' messages: per-iteration detail, off by default
///     - 'test' messages: run summaries and banners, on by default
/// Both are global switches stored in AtomicBool so that they can be flipped
/// from main (or from a test) after the modules are already in use.
/// Anything printed through 'test_print' or 'progress_print' is also copied
/// to the log file when one has been opened with 'init_log_file'.

use std::fs::OpenOptions;
use std::io::Write;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_FLAG: AtomicBool = AtomicBool::new(false);
static TEST_FLAG: AtomicBool = AtomicBool::new(true);

// Global log file handle (wrapped in Mutex for thread safety)
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Name of the log file for a run started now: log_sidon_YYYY-MM-DD_HH-MM-SS.txt
pub fn log_filename() -> String {
    let now = chrono::Local::now();
    format!("log_sidon_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Open a timestamped log file in `dir` and route test/progress output to it.
/// Returns the path of the created file.
pub fn init_log_file(dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(log_filename());
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    Ok(path)
}

/// Stop copying output to the log file (the file is flushed and closed).
pub fn close_log_file() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(mut file) = guard.take() {
            let _ = file.flush();
        }
    }
}

fn write_to_log(msg: &str) {
    if let Ok(mut log_guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_guard {
            let _ = writeln!(file, "{}", msg);
        }
    }
}

pub fn debug_print_on() {
    DEBUG_FLAG.store(true, Ordering::Relaxed);
}

pub fn debug_print_off() {
    DEBUG_FLAG.store(false, Ordering::Relaxed);
}

pub fn test_print_on() {
    TEST_FLAG.store(true, Ordering::Relaxed);
}

pub fn test_print_off() {
    TEST_FLAG.store(false, Ordering::Relaxed);
}

pub fn debug_enabled() -> bool {
    DEBUG_FLAG.load(Ordering::Relaxed)
}

pub fn debug_print(msg: &str) {
    if DEBUG_FLAG.load(Ordering::Relaxed) {
        eprintln!("debug: {}", msg);
    }
}

pub fn test_print(msg: &str) {
    if TEST_FLAG.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
    // Always write to log file if it's open
    write_to_log(msg);
}

/// Warnings are always shown, whatever the switches say.
pub fn warn_print(msg: &str) {
    eprintln!("warning: {}", msg);
    write_to_log(&format!("warning: {}", msg));
}

/// Progress output intended for interactive display (results tables).
/// Prints to stdout and flushes so that it stays visible when redirected.
pub fn progress_print(msg: &str) {
    println!("{}", msg);
    let _ = stdout().flush();
    write_to_log(msg);
}

/// Format a duration in seconds as "1.23 seconds (00h00m01s)"
pub fn format_elapsed(elapsed_secs: f64) -> String {
    let hours = (elapsed_secs / 3600.0) as u64;
    let minutes = ((elapsed_secs % 3600.0) / 60.0) as u64;
    let seconds = (elapsed_secs % 60.0) as u64;
    format!("{:.2} seconds ({:02}h{:02}m{:02}s)", elapsed_secs, hours, minutes, seconds)
}

pub fn banner(msg: &str) {
    const BANNER_WIDTH: usize = 80;
    let titre = if msg.len() > BANNER_WIDTH {
        &msg[..BANNER_WIDTH]
    } else {
        msg
    };
    let total_padding = BANNER_WIDTH - titre.len();
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    let line = "=".repeat(BANNER_WIDTH);
    let banner_str = format!("\n{}\n{}{}{}\n{}\n",
        line, " ".repeat(left_padding), titre, " ".repeat(right_padding), line);
    test_print(&banner_str);
}

use chrono::Utc;
use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use std::sync::Once;

use crate::infrastructure::WithExpect;

pub const NO_LOGS_ENV_VAR: &str = "HOTKEY_NO_LOGS";

// Log files are kept next to the workspace root when running from inside it
fn get_log_file_path(log_file: &str) -> PathBuf {
    let main_dir = "hotkey/";
    let program = env::args().next().unwrap_or_default();

    let mut path = match program.rsplit_once(main_dir) {
        Some((path, _)) => PathBuf::from(format!("{path}{main_dir}")),
        None => PathBuf::from("./"),
    };
    path.push(log_file);

    path
}

pub fn init_logger() {
    init_logger_file_named("log.txt")
}

pub fn init_logger_file_named(log_file: &str) {
    if env::var(NO_LOGS_ENV_VAR).is_ok() {
        return;
    }

    let path = get_log_file_path(log_file);
    static INIT_LOGGER: Once = Once::new();

    INIT_LOGGER.call_once(|| {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_expect(|| format!("Unable to open log file {}", path.display()));

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}][{}][{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(
                fern::Dispatch::new()
                    .level(LevelFilter::Warn)
                    .chain(std::io::stdout()),
            )
            .chain(
                fern::Dispatch::new()
                    .level(LevelFilter::Trace)
                    .chain(file),
            )
            .apply()
            .with_expect(|| "Unable to set up logger");
    })
}

use std::fs::{OpenOptions, create_dir_all};
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

const TRACE_DIR: &str = "tmp";

fn trace_sink() -> Option<&'static Mutex<LineWriter<std::fs::File>>> {
    static SINK: OnceLock<Option<Mutex<LineWriter<std::fs::File>>>> = OnceLock::new();

    SINK.get_or_init(|| {
        if let Err(err) = create_dir_all(TRACE_DIR) {
            eprintln!("[log] failed to create trace dir {TRACE_DIR:?}: {err}");
            return None;
        }
        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = Path::new(TRACE_DIR).join(format!(
            "memoir_page_{ts_ms}_pid{}.log",
            std::process::id()
        ));
        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => Some(Mutex::new(LineWriter::new(file))),
            Err(err) => {
                eprintln!("[log] failed to open trace file {path:?}: {err}");
                None
            }
        }
    })
    .as_ref()
}

fn uptime_ms() -> u128 {
    static STARTED: OnceLock<Instant> = OnceLock::new();
    STARTED.get_or_init(Instant::now).elapsed().as_millis()
}

/// Log an animation milestone (a reveal, a typing event, an anchor
/// jump) to stdout and a persisted trace file, stamped with the time
/// since the first milestone.
pub fn log_page(message: impl AsRef<str>) {
    let line = format!("[+{}ms] {}", uptime_ms(), message.as_ref());
    println!("{line}");
    if let Some(sink) = trace_sink() {
        if let Ok(mut guard) = sink.lock() {
            let _ = writeln!(guard, "{line}");
        }
    }
}

use std::future::Future;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn new_spinner(message: &str) -> ProgressBar {
    let pb: ProgressBar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICKS));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Runs `fut` under a spinner; log lines emitted meanwhile print above it.
pub async fn spin<F: Future>(message: &str, fut: F) -> F::Output {
    let pb: ProgressBar = new_spinner(message);
    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }

    let output: F::Output = fut.await;

    if let Ok(mut active) = ACTIVE.lock() {
        *active = None;
    }
    pb.finish_and_clear();
    output
}

/// Log sink that routes through the active spinner so lines are not torn.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg: &str = msg.trim_end();
        let active = ACTIVE.lock().ok().and_then(|guard| guard.clone());
        match active {
            Some(pb) => pb.println(msg),
            None => writeln!(io::stdout(), "{msg}")?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

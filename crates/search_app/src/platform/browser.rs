use std::process::{Command, Stdio};
use std::thread;

/// Opens `url` in the system browser without blocking the UI.
/// Only http(s) links are handed to the platform opener.
pub fn open_url(url: &str) -> Result<(), String> {
    if !is_web_url(url) {
        return Err(format!("refusing to open non-http url {url:?}"));
    }

    for &(program, args) in openers() {
        let spawned = Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Ok(mut child) = spawned {
            // Reap the opener so it does not linger as a zombie.
            thread::spawn(move || child.wait());
            return Ok(());
        }
    }

    Err("No browser opener available".to_string())
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn openers() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        &[("open", &[])]
    } else if cfg!(target_os = "windows") {
        &[("cmd", &["/C", "start", ""])]
    } else {
        &[("xdg-open", &[]), ("gio", &["open"])]
    }
}

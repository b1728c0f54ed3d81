//! Prompt assembly: username, hostname, and wall-clock time.

/// Build the interactive prompt, e.g. `alice@box[14:03:59]$ `.
///
/// Every piece degrades to an empty string rather than failing; a shell
/// with a bare prompt is still a shell.
pub fn render() -> String {
    let user = std::env::var("USER").unwrap_or_default();
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_default();
    let time = chrono::Local::now().format("%H:%M:%S");
    format!("{}@{}[{}]$ ", user, host, time)
}

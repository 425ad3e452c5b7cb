#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::SystemTime;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Create a fresh folder in the system temporary folder.
    /// Tests run in parallel, so the name mixes the current time with a process-wide counter.
    pub fn temp_dir() -> PathBuf {
        let micros = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_micros();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        let buf = std::env::temp_dir().join(format!(
            "recordatorio-cuotas-{}-{micros}-{counter}",
            std::process::id()
        ));
        fs::create_dir_all(&buf).unwrap();

        buf
    }

    /// Write `content` to a new CSV file inside a fresh temporary folder.
    pub fn write_members_file(content: &str) -> PathBuf {
        let path = temp_dir().join("clientes.csv");
        fs::write(&path, content).unwrap();

        path
    }
}

//! Test data builders for creating config files

use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for TOML config files on disk
#[derive(Default)]
pub struct ConfigFileBuilder {
    window: Vec<String>,
    plot: Vec<String>,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(mut self, key: &str, value: &str) -> Self {
        self.window.push(format!("{} = {}", key, value));
        self
    }

    pub fn plot(mut self, key: &str, value: &str) -> Self {
        self.plot.push(format!("{} = {}", key, value));
        self
    }

    pub fn to_toml(&self) -> String {
        let mut out = String::new();
        for (section, lines) in [("window", &self.window), ("plot", &self.plot)] {
            if lines.is_empty() {
                continue;
            }
            out.push_str(&format!("[{}]\n", section));
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Write the config to a temporary file that lives as long as the handle
    pub fn write(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(self.to_toml().as_bytes())
            .expect("Failed to write temp config");
        file.flush().expect("Failed to flush temp config");
        file
    }
}

use crate::core::input::Side;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SideTally {
    pub passed: u32,
    pub blocked: u32,
}

/// Running per-session counts of what the gate did. Observational only;
/// verdicts never read it back.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SessionTally {
    pub presses: u32,
    pub passed: u32,
    pub blocked: u32,
    pub releases_forwarded: u32,
    pub left: SideTally,
    pub right: SideTally,
}

impl SessionTally {
    pub fn record_press(&mut self, side: Side, passed: bool) {
        self.presses += 1;
        let per_side = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if passed {
            self.passed += 1;
            per_side.passed += 1;
        } else {
            self.blocked += 1;
            per_side.blocked += 1;
        }
    }

    pub fn record_release(&mut self) {
        self.releases_forwarded += 1;
    }

    /// Writes the tally as pretty JSON, creating parent directories first.
    pub fn write_summary(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize session tally: {}", e))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("failed to create '{}': {}", dir.display(), e))?;
        }
        fs::write(path, json).map_err(|e| format!("failed to write '{}': {}", path.display(), e))
    }
}

use crate::dedupe::deduplicate;
use crate::pattern::Pattern;
use std::fs;
use std::path::PathBuf;

/// The file under maintenance, held fully in memory between one read and
/// at most one write. The content is an opaque character sequence; no line
/// structure is modeled.
pub struct Document {
    pub content: String,
    pub filename: PathBuf,
    pub modified: bool,
}

impl Document {
    pub fn from_file(filename: PathBuf) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(&filename)?;
        Ok(Self {
            content,
            filename,
            modified: false,
        })
    }

    /// Removes the first occurrence of `pattern` from the content. Returns
    /// whether anything was removed; the modified flag follows suit.
    pub fn dedupe(&mut self, pattern: &Pattern) -> bool {
        let result = deduplicate(&self.content, pattern);
        if result == self.content {
            return false;
        }
        self.content = result;
        self.modified = true;
        true
    }

    /// Writes the full content back to the original path, overwriting it.
    /// Returns the number of bytes written.
    pub fn save(&mut self) -> Result<usize, std::io::Error> {
        let byte_count = self.content.len();
        fs::write(&self.filename, &self.content)?;
        self.modified = false;
        Ok(byte_count)
    }
}

mod dedupe;
mod document;
mod pattern;

use clap::Parser;
use document::Document;
use pattern::{Pattern, PatternError, Token};
use std::path::PathBuf;

/// Removes the stray duplicate of the cached-profile accessor from a
/// source file. A file without the duplicate is left untouched.
#[derive(Parser)]
#[command(name = "method-dedupe")]
struct Args {
    /// File to clean up
    file: PathBuf,
}

/// The duplicated accessor, doc comment through closing brace. The
/// parameter name is a wildcard since the two copies need not agree on it.
fn removal_pattern() -> Result<Pattern, PatternError> {
    let mut tokens = Token::block("/** * Get cached user profile */ async getUserProfile(");
    tokens.push(Token::Identifier);
    tokens.extend(Token::block(") { const key = this.key('user',"));
    tokens.push(Token::Whitespace);
    tokens.push(Token::Identifier);
    tokens.extend(Token::block("); return await this.get(key); }"));
    Pattern::new(tokens)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let pattern = removal_pattern()?;

    let mut document = Document::from_file(args.file)?;
    if document.dedupe(&pattern) {
        let bytes = document.save()?;
        println!(
            "\"{}\" {}B written, duplicate removed",
            document.filename.display(),
            bytes
        );
    } else {
        println!(
            "\"{}\" unchanged, no duplicate found",
            document.filename.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::deduplicate;

    #[test]
    fn test_removal_pattern_matches_real_accessor() {
        let document = "\
class RedisCache {
  /**
   * Get cached user profile
   */
  async getUserProfile(userId) {
    const key = this.key('user', userId);
    return await this.get(key);
  }

  /**
   * Get cached user profile
   */
  async getUserProfile(uid) {
    const key = this.key('user', uid);
    return await this.get(key);
  }
}
";
        let pattern = removal_pattern().unwrap();
        let result = deduplicate(document, &pattern);

        assert_eq!(result.matches("getUserProfile").count(), 1);
        assert!(result.contains("getUserProfile(uid)"));
    }
}

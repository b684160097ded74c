//! Reading address lists.
//!
//! Each non-blank line holds one range (`a-b` or a lone address) or one subnet
//! (`a/p`). Anything after `#` is a comment.

use crate::models::Block;
use regex::Regex;
use std::error::Error;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

/// Regex separating the entry on a line from a trailing comment.
static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_entry_regex() -> &'static Regex {
    ENTRY_REGEX.get_or_init(|| Regex::new(r"^\s*([^#]*?)\s*(?:#.*)?$").expect("Invalid Regex"))
}

/// Strip comment and surrounding whitespace, `None` for blank lines.
fn entry_of(line: &str) -> Option<&str> {
    get_entry_regex()
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|entry| !entry.is_empty())
}

/// Parse address list text into blocks, in input order.
///
/// # Returns
/// * `Ok(Vec<Block>)` - One block per entry line
/// * `Err` - First line that fails to parse, with line number and literal
pub fn parse_address_list(text: &str) -> Result<Vec<Block>, Box<dyn Error>> {
    let mut blocks = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let Some(entry) = entry_of(line) else {
            continue;
        };
        let block: Block = entry.parse().map_err(|e| {
            log::warn!("Rejecting line {}: '{entry}'", i + 1);
            format!("line {}: {e} (entry '{entry}')", i + 1)
        })?;
        log::trace!("line {}: {} {block}", i + 1, block.kind());
        blocks.push(block);
    }

    log::info!("Parsed {} address list entries", blocks.len());
    Ok(blocks)
}

/// Read and parse an address list.
///
/// # Arguments
/// * `list_file` - Path to the list. If None, reads stdin.
///
/// # Returns
/// * `Ok(Vec<Block>)` - Parsed entries
/// * `Err` - If the file is missing or unreadable, or an entry is invalid
pub fn read_address_list(list_file: Option<&str>) -> Result<Vec<Block>, Box<dyn Error>> {
    let text = match list_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Address list file does not exist: {file}").into());
            }
            log::info!("Reading address list file: {file}");
            std::fs::read_to_string(file)
                .map_err(|e| format!("Error reading address list {file}: {e}"))?
        }
        None => {
            log::info!("Reading address list from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
            text
        }
    };

    parse_address_list(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressRange, Subnet};

    #[test]
    fn test_entry_of() {
        assert_eq!(entry_of("10.0.0.0/8"), Some("10.0.0.0/8"));
        assert_eq!(entry_of("  10.0.0.1 - 10.0.0.9  # note"), Some("10.0.0.1 - 10.0.0.9"));
        assert_eq!(entry_of("# only a comment"), None);
        assert_eq!(entry_of("   "), None);
        assert_eq!(entry_of(""), None);
    }

    #[test]
    fn test_parse_address_list() {
        let text = "10.0.0.0/8\n\n# skip\n192.0.2.1-192.0.2.5 # hosts\n2001:db8::1\n";
        let blocks = parse_address_list(text).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Subnet("10.0.0.0/8".parse::<Subnet>().unwrap()));
        assert_eq!(
            blocks[1],
            Block::Range("192.0.2.1-192.0.2.5".parse::<AddressRange>().unwrap())
        );
        assert_eq!(blocks[2].kind(), "range");
    }

    #[test]
    fn test_parse_address_list_reports_line() {
        let err = parse_address_list("10.0.0.0/8\n\n10.0.0.0/33\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("line 3:"), "unexpected message: {msg}");
        assert!(msg.contains("10.0.0.0/33"), "unexpected message: {msg}");
    }

    #[test]
    fn test_read_address_list_file() {
        let blocks = read_address_list(Some("src/tests/test_data/address_list_01.txt"))
            .expect("Error reading address list");
        assert_eq!(blocks.len(), 8, "Wrong entry count in test sample.");
        assert_eq!(blocks[1].to_string(), "10.20.0.0/16");
    }

    #[test]
    fn test_read_address_list_missing_file() {
        let err = read_address_list(Some("src/tests/test_data/does_not_exist.txt")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_address_list_invalid_entry() {
        assert!(read_address_list(Some("src/tests/test_data/address_list_02.txt")).is_err());
    }
}

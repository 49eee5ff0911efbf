use anyhow::{Result, bail};

/// Token opening the member block: a line whose trimmed text starts with it.
const MEMBERS_KEY: &str = "members";

/// Token closing the member block.
const MEMBERS_CLOSE: &str = "]";

/// Scanner state while walking the manifest's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the `members` opener.
    Before,
    /// Inside the member block.
    InMembers,
    /// Past the closing bracket.
    After,
}

/// Manifest lines split around the member block.
///
/// Concatenating `before`, freshly formatted member entries, and `after`
/// reproduces a well-formed member list. Lines keep their original
/// terminators, so passthrough content round-trips byte-for-byte (including
/// CRLF endings and a missing final newline).
#[derive(Debug, Default, Clone)]
pub struct LinePartition {
    /// Lines up to and including the `members` opener, plus foreign member
    /// entries retained from inside the block in their original order.
    pub before: Vec<String>,
    /// The closing bracket line and everything after it.
    pub after: Vec<String>,
}

/// Split `content` into the line partition around its member block.
///
/// Member entries whose trimmed text starts with the quoted `prefix` are
/// dropped; they are owned by this tool and will be regenerated. All other
/// lines are preserved verbatim.
///
/// # Errors
///
/// Returns an error if no `members` opener is found, or if the block is
/// never closed. The caller's file is left untouched in both cases.
pub fn partition_lines(content: &str, prefix: &str) -> Result<LinePartition> {
    let owned_entry = format!("\"{prefix}");
    let mut partition = LinePartition::default();
    let mut state = ScanState::Before;

    for line in content.split_inclusive('\n') {
        match state {
            ScanState::Before => {
                partition.before.push(line.to_string());
                if line.trim().starts_with(MEMBERS_KEY) {
                    state = ScanState::InMembers;
                }
            }
            ScanState::InMembers => {
                if line.trim().starts_with(MEMBERS_CLOSE) {
                    partition.after.push(line.to_string());
                    state = ScanState::After;
                } else if !line.trim().starts_with(&owned_entry) {
                    partition.before.push(line.to_string());
                }
            }
            ScanState::After => partition.after.push(line.to_string()),
        }
    }

    match state {
        ScanState::Before => bail!("No `members` list found in manifest"),
        ScanState::InMembers => bail!("Unterminated `members` list in manifest"),
        ScanState::After => Ok(partition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = "\
[workspace]
members = [
    \"apps/std/old\",
    \"other/thing\",
]

[profile.release]
lto = true
";

    #[test]
    fn test_partition_drops_owned_entries() {
        let partition = partition_lines(MANIFEST, "apps/std").unwrap();
        let before = partition.before.concat();
        assert!(before.contains("[workspace]"));
        assert!(before.contains("members = ["));
        assert!(before.contains("\"other/thing\","));
        assert!(!before.contains("apps/std/old"));
    }

    #[test]
    fn test_partition_after_starts_at_close() {
        let partition = partition_lines(MANIFEST, "apps/std").unwrap();
        assert_eq!(partition.after.first().map(String::as_str), Some("]\n"));
        let after = partition.after.concat();
        assert!(after.contains("[profile.release]"));
    }

    #[test]
    fn test_partition_round_trips_foreign_content() {
        let partition = partition_lines(MANIFEST, "zzz/none").unwrap();
        let rejoined = format!("{}{}", partition.before.concat(), partition.after.concat());
        assert_eq!(rejoined, MANIFEST);
    }

    #[test]
    fn test_missing_members_block_errors() {
        let err = partition_lines("[package]\nname = \"x\"\n", "apps/std").unwrap_err();
        assert!(err.to_string().contains("members"));
    }

    #[test]
    fn test_unterminated_members_block_errors() {
        let err = partition_lines("members = [\n    \"a\",\n", "apps/std").unwrap_err();
        assert!(err.to_string().contains("Unterminated"));
    }

    #[test]
    fn test_empty_input_errors() {
        assert!(partition_lines("", "apps/std").is_err());
    }

    #[test]
    fn test_crlf_lines_preserved() {
        let manifest = "members = [\r\n    \"keep/me\",\r\n]\r\n";
        let partition = partition_lines(manifest, "apps/std").unwrap();
        assert_eq!(partition.before[1], "    \"keep/me\",\r\n");
        assert_eq!(partition.after[0], "]\r\n");
    }

    #[test]
    fn test_owned_entry_match_is_prefix_based() {
        // `"apps/std` also matches deeper entries; everything under the
        // prefix is owned.
        let manifest = "members = [\n    \"apps/std/a/b\",\n]\n";
        let partition = partition_lines(manifest, "apps/std").unwrap();
        assert_eq!(partition.before, vec!["members = [\n".to_string()]);
    }
}

// entrostat/src/input.rs
//! Input-group collection for the entrostat binary.
//!
//! Reads each named file (or stdin) once to completion and hands the core a
//! sequence of labelled line groups: lines trimmed, blanks dropped, groups
//! in encounter order. Repeated mentions of the same label append to the
//! existing group rather than creating a duplicate row.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::Read;

/// Label used for standard input, both for the `-` pseudo-file and when no
/// files are given at all.
pub const STDIN_LABEL: &str = "<stdin>";

/// One logical input source: a label and its non-blank, trimmed lines.
#[derive(Debug, Clone, PartialEq)]
pub struct InputGroup {
    pub label: String,
    pub lines: Vec<String>,
}

/// Collects the labelled line groups for a run.
///
/// An empty `files` slice means "read stdin"; within the list, `-` also
/// names stdin. A source with no non-blank lines yields no group and is
/// skipped without a diagnostic. An unreadable file is a setup failure for
/// the whole run (unlike the numeric failures inside a group, which are
/// handled per-group downstream).
pub fn collect_groups(files: &[String]) -> Result<Vec<InputGroup>> {
    let mut groups: Vec<InputGroup> = Vec::new();

    if files.is_empty() {
        push_lines(&mut groups, STDIN_LABEL, &read_stdin()?);
        return Ok(groups);
    }

    for file in files {
        if file == "-" {
            push_lines(&mut groups, STDIN_LABEL, &read_stdin()?);
        } else {
            let content = fs::read_to_string(file)
                .with_context(|| format!("failed to read input file '{file}'"))?;
            push_lines(&mut groups, file, &content);
        }
    }

    Ok(groups)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read from stdin")?;
    Ok(content)
}

fn push_lines(groups: &mut Vec<InputGroup>, label: &str, content: &str) {
    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    match groups.iter_mut().find(|group| group.label == label) {
        Some(group) => group.lines.extend(lines),
        None => {
            // A source with no non-blank lines contributes no group at all:
            // it is silently skipped, not reported as a failed distribution.
            if lines.is_empty() {
                debug!("skipping empty input '{label}'");
                return;
            }
            let group = InputGroup {
                label: label.to_string(),
                lines,
            };
            debug!("collected group '{}' ({} lines)", group.label, group.lines.len());
            groups.push(group);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_lines_trims_and_drops_blanks() {
        let mut groups = Vec::new();
        push_lines(&mut groups, "a.txt", "  1 \n\n2\n   \n3\n");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_push_lines_skips_sources_with_no_content() {
        let mut groups = Vec::new();
        push_lines(&mut groups, "empty.txt", "");
        push_lines(&mut groups, "blank.txt", "   \n\n  \n");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_empty_source_still_merges_into_an_existing_group() {
        let mut groups = Vec::new();
        push_lines(&mut groups, "a.txt", "1\n");
        push_lines(&mut groups, "a.txt", "\n");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines, vec!["1"]);
    }

    #[test]
    fn test_push_lines_merges_repeated_labels() {
        let mut groups = Vec::new();
        push_lines(&mut groups, "a.txt", "1\n2\n");
        push_lines(&mut groups, "b.txt", "5\n");
        push_lines(&mut groups, "a.txt", "3\n");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "a.txt");
        assert_eq!(groups[0].lines, vec!["1", "2", "3"]);
        assert_eq!(groups[1].label, "b.txt");
    }

    #[test]
    fn test_collect_groups_reads_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "1\n2\n").unwrap();
        std::fs::write(&second, "3\n").unwrap();

        let files = vec![
            first.to_string_lossy().to_string(),
            second.to_string_lossy().to_string(),
        ];
        let groups = collect_groups(&files).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].lines, vec!["1", "2"]);
        assert_eq!(groups[1].lines, vec!["3"]);
    }

    #[test]
    fn test_collect_groups_fails_on_missing_file() {
        let result = collect_groups(&["definitely-not-here.txt".to_string()]);
        assert!(result.is_err());
    }
}

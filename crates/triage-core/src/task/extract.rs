//! Text-to-task extraction.
//!
//! A deliberately simple line-prefix heuristic: lines starting with `- ` or
//! `* ` become draft tasks. Kept simple on purpose; anything smarter belongs
//! behind a different interface, not here.

use super::model::{Task, DEFAULT_TASK_KIND, STATUS_OPEN};
use crate::time::now_iso8601;

/// Placeholder id carried by drafts until the caller allocates a real one.
pub const DRAFT_TASK_ID: &str = "TEMP_ID";

/// Maximum number of characters of the source text quoted in a draft's
/// description.
const EXCERPT_CHARS: usize = 100;

/// Extracts draft tasks from free text.
///
/// Splits on line breaks; each trimmed line beginning with `"- "` or `"* "`
/// has the 2-character marker stripped and is trimmed again. Non-empty
/// remainders become drafts with the placeholder id, status `Open`, the
/// `from_text` label, and `human`/`ai` assignables. All other lines are
/// ignored. An empty result is a valid outcome; callers decide whether that
/// is an error.
pub fn extract_tasks(text: &str) -> Vec<Task> {
    let excerpt = source_excerpt(text);

    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            let title = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))?
                .trim();
            if title.is_empty() {
                return None;
            }
            Some(draft_task(title, &excerpt))
        })
        .collect()
}

fn draft_task(title: &str, excerpt: &str) -> Task {
    Task {
        id: DRAFT_TASK_ID.to_string(),
        title: title.to_string(),
        description: format!(
            "Summary:\n{title}\n\nDetails:\n{title}\n\nSource:\nextracted from text: \"{excerpt}\""
        ),
        status: STATUS_OPEN.to_string(),
        kind: DEFAULT_TASK_KIND.to_string(),
        labels: vec!["from_text".to_string()],
        assignable_to: vec!["human".to_string(), "ai".to_string()],
        created: Some(now_iso8601()),
        completion_time: None,
        subtasks: None,
        dependencies: None,
    }
}

fn source_excerpt(text: &str) -> String {
    let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    if text.chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_dash_and_star_lines_only() {
        let drafts = extract_tasks("- first\n* second\nplain line\n- ");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "first");
        assert_eq!(drafts[1].title, "second");
    }

    #[test]
    fn test_draft_shape() {
        let drafts = extract_tasks("- ship the release");
        let draft = &drafts[0];
        assert_eq!(draft.id, DRAFT_TASK_ID);
        assert_eq!(draft.status, STATUS_OPEN);
        assert_eq!(draft.labels, vec!["from_text"]);
        assert_eq!(draft.assignable_to, vec!["human", "ai"]);
        assert!(draft.created.is_some());
        assert!(draft.description.contains("ship the release"));
    }

    #[test]
    fn test_indented_markers_are_trimmed_first() {
        let drafts = extract_tasks("   - indented item\n\t* tabbed item");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "indented item");
        assert_eq!(drafts[1].title, "tabbed item");
    }

    #[test]
    fn test_no_matching_lines_is_empty_not_error() {
        assert!(extract_tasks("just prose\nanother paragraph").is_empty());
        assert!(extract_tasks("").is_empty());
    }

    #[test]
    fn test_long_source_is_excerpted() {
        let long_tail = "x".repeat(300);
        let drafts = extract_tasks(&format!("- item\n{long_tail}"));
        let description = &drafts[0].description;
        assert!(description.contains("..."));
        // The quoted excerpt stops at 100 characters of source text.
        assert!(!description.contains(&"x".repeat(120)));
    }
}

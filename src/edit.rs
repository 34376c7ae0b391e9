//! Inline Title Editing
//!
//! Decides what committing an edited title should do.

/// Outcome of committing the edit field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleEdit {
    /// Same title after trimming, just leave edit mode
    Unchanged,
    /// Empty title removes the todo
    Delete,
    /// Save the trimmed title
    Rename(String),
}

impl TitleEdit {
    pub fn plan(current: &str, draft: &str) -> Self {
        let trimmed = draft.trim();
        if trimmed == current.trim() {
            TitleEdit::Unchanged
        } else if trimmed.is_empty() {
            TitleEdit::Delete
        } else {
            TitleEdit::Rename(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_unchanged() {
        assert_eq!(TitleEdit::plan("Buy milk", "Buy milk"), TitleEdit::Unchanged);
        assert_eq!(TitleEdit::plan("Buy milk", "  Buy milk \t"), TitleEdit::Unchanged);
    }

    #[test]
    fn test_plan_empty_deletes() {
        assert_eq!(TitleEdit::plan("Buy milk", ""), TitleEdit::Delete);
        assert_eq!(TitleEdit::plan("Buy milk", "   "), TitleEdit::Delete);
    }

    #[test]
    fn test_plan_rename_trims() {
        assert_eq!(
            TitleEdit::plan("Buy milk", "  Buy bread "),
            TitleEdit::Rename("Buy bread".to_string())
        );
    }
}

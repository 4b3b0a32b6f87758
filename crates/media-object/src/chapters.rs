// FILE: crates/media-object/src/chapters.rs
//! Chapter list and position tracking

use mediabridge_core::Chapter;

/// Chapters of the current source plus the index playback is in
#[derive(Debug, Clone, Default)]
pub struct ChapterList {
    chapters: Vec<Chapter>,
    current_index: usize,
}

impl ChapterList {
    /// Creates a new chapter list with no chapters
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the chapters and rewinds to the first one
    pub fn replace(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapters;
        self.current_index = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Returns the total number of chapters
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Returns true if there are chapters
    pub fn has_chapters(&self) -> bool {
        !self.chapters.is_empty()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Gets the current chapter index (0 when there are no chapters)
    pub fn current_chapter_index(&self) -> usize {
        self.current_index
    }

    /// Finds the first chapter containing the position
    ///
    /// Bounds are inclusive, so a position on a shared boundary belongs to
    /// the earlier chapter.
    pub fn chapter_at_position(&self, position_ms: i64) -> Option<usize> {
        self.chapters.iter().position(|ch| ch.contains(position_ms))
    }

    /// Updates the current chapter from a position
    ///
    /// Returns the new index when it changed.
    pub fn update_position(&mut self, position_ms: i64) -> Option<usize> {
        let index = self.chapter_at_position(position_ms)?;
        if index == self.current_index {
            return None;
        }
        self.current_index = index;
        Some(index)
    }

    /// Start position of a chapter, for seeking to it
    pub fn start_of(&self, index: usize) -> Option<i64> {
        self.chapters.get(index).map(|ch| ch.start_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chapters() -> ChapterList {
        let mut list = ChapterList::new();
        list.replace(vec![Chapter::new(0, 60_000), Chapter::new(60_000, 120_000)]);
        list
    }

    #[test]
    fn test_empty_list() {
        let list = ChapterList::new();
        assert!(!list.has_chapters());
        assert_eq!(list.current_chapter_index(), 0);
        assert_eq!(list.chapter_at_position(10), None);
    }

    #[test]
    fn test_boundary_goes_to_earlier_chapter() {
        let list = two_chapters();
        assert_eq!(list.chapter_at_position(60_000), Some(0));
        assert_eq!(list.chapter_at_position(60_001), Some(1));
    }

    #[test]
    fn test_update_position_reports_changes_only() {
        let mut list = two_chapters();
        assert_eq!(list.update_position(30_000), None);
        assert_eq!(list.update_position(70_000), Some(1));
        assert_eq!(list.update_position(80_000), None);
        assert_eq!(list.current_chapter_index(), 1);
        assert_eq!(list.update_position(10_000), Some(0));
    }

    #[test]
    fn test_position_outside_all_chapters_keeps_current() {
        let mut list = two_chapters();
        list.update_position(70_000);
        assert_eq!(list.update_position(500_000), None);
        assert_eq!(list.current_chapter_index(), 1);
    }

    #[test]
    fn test_replace_rewinds() {
        let mut list = two_chapters();
        list.update_position(70_000);
        list.replace(vec![Chapter::new(0, 10)]);
        assert_eq!(list.current_chapter_index(), 0);
        assert_eq!(list.chapter_count(), 1);

        list.clear();
        assert!(list.chapters().is_empty());
    }

    #[test]
    fn test_start_of() {
        let list = two_chapters();
        assert_eq!(list.start_of(1), Some(60_000));
        assert_eq!(list.start_of(2), None);
        assert_eq!(list.chapters()[0].end_ms, 60_000);
    }
}

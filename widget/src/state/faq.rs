//! FAQ index, filter, and single-open accordion.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

pub use protocol::FaqEntry;

/// Load progress of the FAQ index. Loaded at most once per session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FaqLoad {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<FaqEntry>),
    /// The load failed; the panel shows a placeholder instead of an error.
    Unavailable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    pub load: FaqLoad,
    pub filter: String,
    /// Index into the full entry list of the one expanded entry.
    pub active: Option<usize>,
}

impl FaqState {
    /// Claim the one-time load. Returns `false` if a load already started.
    pub fn begin_load(&mut self) -> bool {
        if self.load != FaqLoad::NotLoaded {
            return false;
        }
        self.load = FaqLoad::Loading;
        true
    }

    pub fn finish_load(&mut self, entries: Option<Vec<FaqEntry>>) {
        self.load = entries.map_or(FaqLoad::Unavailable, FaqLoad::Loaded);
    }

    #[must_use]
    pub fn entries(&self) -> &[FaqEntry] {
        match &self.load {
            FaqLoad::Loaded(entries) => entries,
            _ => &[],
        }
    }

    /// Entries whose question contains the filter text, case-insensitively,
    /// paired with their index in the full list.
    #[must_use]
    pub fn visible(&self) -> Vec<(usize, &FaqEntry)> {
        let needle = self.filter.to_lowercase();
        self.entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| needle.is_empty() || entry.question.to_lowercase().contains(&needle))
            .collect()
    }

    /// "N of M" summary for the filter bar.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} of {}", self.visible().len(), self.entries().len())
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Expand entry `index`, closing any other; collapse it if already open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries().len() {
            return;
        }
        self.active = if self.active == Some(index) { None } else { Some(index) };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Widget reset keeps the loaded index.
    pub fn reset(&mut self) {
        self.active = None;
        self.filter.clear();
    }
}

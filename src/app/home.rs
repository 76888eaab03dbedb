use crate::error::FetchError;
use crate::model::IndexEntry;
use crate::view_models::{LevelGroup, OTHER_LEVEL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Lista de lecciones con búsqueda y filtro por nivel.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeView {
    pub entries: Vec<IndexEntry>,
    pub status: IndexStatus,
    pub search: String,
    /// `None` = todos los niveles
    pub level_filter: Option<String>,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            status: IndexStatus::Loading,
            search: String::new(),
            level_filter: None,
        }
    }
}

fn level_of(entry: &IndexEntry) -> &str {
    entry
        .level
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(OTHER_LEVEL)
}

impl HomeView {
    pub fn begin_loading(&mut self) {
        self.status = IndexStatus::Loading;
    }

    pub fn set_entries(&mut self, entries: Vec<IndexEntry>) {
        self.entries = entries;
        self.status = IndexStatus::Loaded;
    }

    pub fn set_failed(&mut self, err: &FetchError) {
        self.status = IndexStatus::Failed(format!("❌ {err}"));
    }

    /// Niveles en orden de primera aparición.
    pub fn levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = Vec::new();
        for entry in &self.entries {
            let level = level_of(entry);
            if !levels.iter().any(|l| l == level) {
                levels.push(level.to_string());
            }
        }
        levels
    }

    fn matches(&self, entry: &IndexEntry) -> bool {
        if let Some(filter) = &self.level_filter {
            if level_of(entry) != filter.as_str() {
                return false;
            }
        }
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        entry.title.to_lowercase().contains(&term)
            || entry.id.to_string().contains(&term)
            || level_of(entry).to_lowercase().contains(&term)
    }

    pub fn filtered(&self) -> Vec<&IndexEntry> {
        self.entries.iter().filter(|e| self.matches(e)).collect()
    }

    pub fn grouped(&self) -> Vec<LevelGroup<'_>> {
        let filtered = self.filtered();
        self.levels()
            .into_iter()
            .filter_map(|level| {
                let entries: Vec<&IndexEntry> = filtered
                    .iter()
                    .copied()
                    .filter(|e| level_of(e) == level)
                    .collect();
                (!entries.is_empty()).then_some(LevelGroup { level, entries })
            })
            .collect()
    }
}

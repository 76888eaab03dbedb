// src/view_models.rs

use crate::model::IndexEntry;

pub const OTHER_LEVEL: &str = "Otros";

/// Lecciones de un mismo nivel en la pantalla de inicio.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelGroup<'a> {
    pub level: String,
    pub entries: Vec<&'a IndexEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRow {
    pub id: u32,
    pub badge: String,
    pub title: String,
}

impl LessonRow {
    pub fn from_entry(entry: &IndexEntry) -> Self {
        Self {
            id: entry.id,
            badge: format!("#{}", entry.id),
            title: entry.title.clone(),
        }
    }

    pub fn label(&self) -> String {
        format!("{}  {}", self.badge, self.title)
    }
}

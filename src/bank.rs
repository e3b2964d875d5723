use crate::error::BankError;
use crate::logger;
use crate::models::{Question, QuestionRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Category name to question list, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    categories: Vec<(String, Vec<Question>)>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, replacing the questions of an existing one with the
    /// same name without changing its position.
    pub fn insert(&mut self, name: impl Into<String>, questions: Vec<Question>) {
        let name = name.into();
        if let Some(entry) = self.categories.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = questions;
        } else {
            self.categories.push((name, questions));
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Question]> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, qs)| qs.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Question])> {
        self.categories
            .iter()
            .map(|(n, qs)| (n.as_str(), qs.as_slice()))
    }

    /// Every question of every category, concatenated in category order.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|(_, qs)| qs.iter())
    }

    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|(_, qs)| qs.len()).sum()
    }
}

pub fn get_bank_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn parse_bank(content: &str) -> Result<Vec<Question>, BankError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(content)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record).map_err(|reason| BankError::InvalidQuestion { index, reason })
        })
        .collect()
}

pub fn load_bank_file(path: &Path) -> Result<Vec<Question>, BankError> {
    let content = fs::read_to_string(path)?;
    parse_bank(&content)
}

/// "communes-organisation.json" becomes "COMMUNES ORGANISATION".
pub fn category_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
        .to_uppercase()
}

/// Load every bank file in `dir`. Files that fail to load are logged and
/// left out of the bank.
pub fn load_bank(dir: &Path) -> QuestionBank {
    let mut bank = QuestionBank::new();

    for path in get_bank_files(dir) {
        match load_bank_file(&path) {
            Ok(questions) => {
                logger::log(&format!(
                    "Loaded {} questions from {}",
                    questions.len(),
                    path.display()
                ));
                bank.insert(category_name(&path), questions);
            }
            Err(e) => {
                logger::log(&format!("Skipping {}: {}", path.display(), e));
            }
        }
    }

    bank
}

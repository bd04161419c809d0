//! expense-storage-json
//!
//! Filesystem JSON implementations of the record, category and summary collaborators.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use expense_analytics::{CategoryStore, Clock, ExpenseStore, StoreError, SummaryService, SystemClock};
use expense_domain::{
    coerce_amount, CategorySet, Expense, ExpenseDraft, ExpenseId, Identifiable, MonthKey,
};
use serde::{Deserialize, Serialize};

pub const EXPENSES_FILE: &str = "expenses.json";
pub const CATEGORIES_FILE: &str = "categories.json";
const TMP_SUFFIX: &str = "tmp";

/// Locations of the JSON files under one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub expenses: PathBuf,
    pub categories: PathBuf,
}

impl StoragePaths {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            expenses: data_dir.join(EXPENSES_FILE),
            categories: data_dir.join(CATEGORIES_FILE),
        }
    }
}

/// Expense records kept as a JSON array in a single file.
#[derive(Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl JsonExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self::with_clock(path, Arc::new(SystemClock))
    }

    /// Uses `clock` to stamp newly added records.
    pub fn with_clock(path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { path, clock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Expense>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "expense file missing, starting empty");
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|err| StoreError::Unavailable(format!("{}: {err}", self.path.display())))?;
        let records: Vec<Expense> = serde_json::from_str(&data)
            .map_err(|err| StoreError::Unavailable(format!("{}: {err}", self.path.display())))?;
        let undated = records.iter().filter(|record| record.created_at.is_none()).count();
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            undated,
            "loaded expenses"
        );
        Ok(records)
    }

    fn write_all(&self, records: &[Expense]) -> Result<(), StoreError> {
        write_json(&self.path, records)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "saved expenses");
        Ok(())
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn list(&self) -> Result<Vec<Expense>, StoreError> {
        self.read_all()
    }

    fn add(&self, draft: ExpenseDraft) -> Result<Expense, StoreError> {
        let mut records = self.read_all()?;
        let expense = Expense::from_draft(draft, Some(self.clock.now().naive_utc()));
        records.push(expense.clone());
        self.write_all(&records)?;
        Ok(expense)
    }

    fn update(&self, id: &ExpenseId, draft: ExpenseDraft) -> Result<Expense, StoreError> {
        let mut records = self.read_all()?;
        let slot = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        *slot = slot.apply(draft);
        let updated = slot.clone();
        self.write_all(&records)?;
        Ok(updated)
    }

    fn delete(&self, id: &ExpenseId) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.write_all(&records)
    }
}

impl SummaryService for JsonExpenseStore {
    /// Mirrors the server rule: coalesced sum of every record stamped in that year and month.
    fn monthly_total(&self, year: i32, month: u32) -> Result<f64, StoreError> {
        let period = MonthKey::new(year, month)
            .ok_or_else(|| StoreError::Unavailable(format!("invalid month {month}")))?;
        let records = self.read_all()?;
        Ok(records
            .iter()
            .filter_map(|record| record.created_at.map(|created| (created, record.amount)))
            .filter(|(created, _)| period.contains(created))
            .map(|(_, amount)| coerce_amount(amount))
            .sum())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    custom: Vec<String>,
}

/// User-added category labels kept in a JSON file. Presets are never written.
#[derive(Debug, Clone)]
pub struct JsonCategoryStore {
    path: PathBuf,
}

impl JsonCategoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategoryStore for JsonCategoryStore {
    fn load(&self) -> Result<CategorySet, StoreError> {
        if !self.path.exists() {
            return Ok(CategorySet::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let file: CategoryFile = serde_json::from_str(&data)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        let set = CategorySet::from_custom(&file.custom);
        if set.custom().len() != file.custom.len() {
            tracing::warn!(
                path = %self.path.display(),
                skipped = file.custom.len() - set.custom().len(),
                "skipped blank or duplicate category labels"
            );
        }
        Ok(set)
    }

    fn save(&self, categories: &CategorySet) -> Result<(), StoreError> {
        let file = CategoryFile {
            custom: categories.custom().to_vec(),
        };
        write_json(&self.path, &file)?;
        tracing::debug!(path = %self.path.display(), custom = file.custom.len(), "saved categories");
        Ok(())
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| StoreError::Serialization(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

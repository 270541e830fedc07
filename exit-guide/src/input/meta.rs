//! The meta.csv variable index and column checks.

use std::collections::{HashMap, HashSet};

use super::error::InputError;
use super::files::InputFile;
use super::rows::MetaRow;

/// Which variables meta.csv documents for each input file.
#[derive(Debug, Clone, Default)]
pub struct MetaIndex {
    variables: HashMap<String, HashSet<String>>,
}

impl MetaIndex {
    /// Build the index. A `File` cell may name several files, comma separated.
    pub fn from_rows(rows: &[MetaRow]) -> Self {
        let mut variables: HashMap<String, HashSet<String>> = HashMap::new();
        for row in rows {
            let file = row.file.trim();
            let variable = row.variable.trim();
            if file.is_empty() || variable.is_empty() {
                continue;
            }
            for part in file.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                variables
                    .entry(part.to_string())
                    .or_default()
                    .insert(variable.to_string());
            }
        }
        Self { variables }
    }

    pub fn documents(&self, file_label: &str, variable: &str) -> bool {
        self.variables
            .get(file_label)
            .is_some_and(|vars| vars.contains(variable))
    }
}

/// Check that `headers` contains every required column of `file` and that
/// meta.csv documents each one.
pub fn check_columns(
    meta: &MetaIndex,
    file: InputFile,
    headers: &[String],
) -> Result<(), InputError> {
    let required = file.required_columns();

    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingColumns {
            file: file.label(),
            columns: missing,
        });
    }

    let undocumented: Vec<String> = required
        .iter()
        .filter(|col| !meta.documents(file.label(), col))
        .map(|col| col.to_string())
        .collect();
    if !undocumented.is_empty() {
        return Err(InputError::UndocumentedColumns {
            file: file.label(),
            columns: undocumented,
        });
    }

    Ok(())
}

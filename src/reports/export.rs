use serde::Serialize;

use super::aggregate::CountMatrix;

/// Whether exported cells carry raw counts or formatted percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    Counts,
    Percentages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Count(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportCell {
    pub key: String,
    pub value: CellValue,
}

/// One exported table row. Cells live in a `Vec` so column order is
/// deterministic by construction rather than depending on map iteration
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub cells: Vec<ExportCell>,
}

impl ExportRow {
    pub fn value(&self, key: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|cell| cell.key == key)
            .map(|cell| &cell.value)
    }
}

/// Flatten a matrix into one row per bucket: a label column first, then one
/// column per caller-ordered category.
///
/// Rows are always fully populated; a requested category missing from the
/// matrix still emits a zero cell, so every row of a table carries the same
/// keys.
pub fn to_rows(
    matrix: &CountMatrix,
    category_order: &[&str],
    label_column: &str,
    mode: ValueMode,
) -> Vec<ExportRow> {
    matrix
        .bucket_labels()
        .iter()
        .map(|bucket| {
            let mut cells = Vec::with_capacity(category_order.len() + 1);
            cells.push(ExportCell {
                key: label_column.to_string(),
                value: CellValue::Text(bucket.clone()),
            });

            for category in category_order {
                let value = match mode {
                    ValueMode::Counts => CellValue::Count(matrix.count(bucket, category)),
                    ValueMode::Percentages => {
                        CellValue::Text(format!("{}%", matrix.percentage(bucket, category)))
                    }
                };
                cells.push(ExportCell {
                    key: category.to_string(),
                    value,
                });
            }

            ExportRow { cells }
        })
        .collect()
}

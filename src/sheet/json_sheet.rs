use super::{Record, RowUpdate, Sheet};
use crate::global::SheetColumns;

use anyhow::{anyhow, Context};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// 以 JSON 数组保存的表格, 每个元素是一行
pub struct JsonSheet {
    path: PathBuf,
    columns: SheetColumns,
    rows: Vec<Record>,
}

impl JsonSheet {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::open_with_columns(path, crate::global::tracker_config().columns.clone())
    }

    pub fn open_with_columns(path: impl AsRef<Path>, columns: SheetColumns) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("读取 {} 失败", path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("解析 {} 失败", path.display()))?;
        let Value::Array(items) = value else {
            return Err(anyhow!("{} 不是 JSON 数组", path.display()));
        };
        let rows = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(anyhow!("第 {} 行不是 JSON 对象", i + 2)),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            path,
            columns,
            rows,
        })
    }
}

impl Sheet for JsonSheet {
    fn records(&self) -> anyhow::Result<Vec<Record>> {
        Ok(self.rows.clone())
    }

    fn write_row(&mut self, index: usize, update: &RowUpdate) -> anyhow::Result<()> {
        let columns = &self.columns;
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| anyhow!("行 {} 不存在", index + 2))?;
        row.insert(columns.total_solved.clone(), update.total_solved.clone());
        row.insert(columns.solved_last_24h.clone(), update.solved_last_24h.clone());
        row.insert(columns.last_online.clone(), update.last_online.clone());
        row.insert(columns.handle.clone(), update.handle.clone());
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(&self.rows)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("写入 {} 失败", self.path.display()))
    }
}

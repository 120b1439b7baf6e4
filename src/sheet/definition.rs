use serde_json::{Map, Value};

/// 表格中的一行, 以表头为键
pub type Record = Map<String, Value>;

/// 一行需要写回的四个单元格
#[derive(Debug, Clone, PartialEq)]
pub struct RowUpdate {
    pub total_solved: Value,
    pub solved_last_24h: Value,
    pub last_online: Value,
    pub handle: Value,
}

pub trait Sheet {
    fn records(&self) -> anyhow::Result<Vec<Record>>;

    /// `index` 为数据行下标, 从 0 开始, 不含表头
    fn write_row(&mut self, index: usize, update: &RowUpdate) -> anyhow::Result<()>;

    fn flush(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub updated: usize,
    pub invalid_links: usize,
    pub invalid_handles: usize,
    pub errors: usize,
}

use crate::domain::model::Table;
use crate::utils::error::Result;

/// 純函式的表格轉換：輸入表格不會被修改
pub trait TableTransform {
    fn name(&self) -> &'static str;
    fn apply(&self, table: &Table) -> Result<Table>;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[crate::adapters::table_io::OutputFormat];
    fn drill(&self) -> crate::core::drill::Drill;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<Table>;
    fn load(&self, table: Table) -> Result<Vec<String>>;
}

use crate::utils::error::Result;

/// Source of the raw menu table. Reading happens once at startup; all
/// downstream queries run against the decoded catalog.
pub trait MenuSource {
    fn read(&self) -> Result<String>;
}

pub trait ConfigProvider {
    fn menu_path(&self) -> &str;
    fn verbose(&self) -> bool;
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{file::FileMenuSource, toml_config::TomlConfig};
pub use core::cart::{Cart, CartLedger};
pub use core::catalog::MenuCatalog;
pub use core::render::{DISH_NOT_FOUND_MSG, EMPTY_CART_MSG, NO_SELECTION_MSG};
pub use domain::model::{CartLineItem, Category, DishRecord};
pub use domain::ports::{ConfigProvider, MenuSource};
pub use utils::error::{MenuError, Result};

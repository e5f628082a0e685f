pub mod cart;
pub mod catalog;
pub mod render;

pub use crate::domain::model::{CartLineItem, Category, DishRecord};
pub use crate::domain::ports::{ConfigProvider, MenuSource};
pub use crate::utils::error::Result;

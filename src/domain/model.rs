use serde::{Deserialize, Serialize};

/// Menu section a dish belongs to. Labels match the source table exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Appetizer,
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Appetizer, Category::MainCourse, Category::Dessert];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Appetizer => "Appetizer",
            Category::MainCourse => "Main Course",
            Category::Dessert => "Dessert",
        }
    }

    /// Lenient parse for user input ("main course", "desserts", ...).
    pub fn parse(input: &str) -> Option<Category> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "appetizer" | "appetizers" => Some(Category::Appetizer),
            "main course" | "main" | "mains" => Some(Category::MainCourse),
            "dessert" | "desserts" => Some(Category::Dessert),
            _ => None,
        }
    }
}

/// One row of the menu table. Immutable once loaded; `name` is unique
/// across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    #[serde(rename = "Dish Name")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: Category,

    #[serde(rename = "Calories (kcal)")]
    pub calories: u32,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,

    /// Price in the smallest currency unit (VND).
    #[serde(rename = "Price (VND)")]
    pub price: u64,

    /// Free text, may be "NONE".
    #[serde(rename = "Allergy Info")]
    pub allergy_info: String,
}

/// One cart entry, capturing a dish's price and nutrition at add time.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub dish_name: String,
    pub price: u64,
    pub calories: u32,
    pub protein: f64,
}

impl CartLineItem {
    pub(crate) fn from_dish(dish: &DishRecord) -> Self {
        Self {
            dish_name: dish.name.clone(),
            price: dish.price,
            calories: dish.calories,
            protein: dish.protein,
        }
    }
}

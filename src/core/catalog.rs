use crate::core::render;
use crate::domain::model::{Category, DishRecord};
use crate::domain::ports::MenuSource;
use crate::utils::error::{MenuError, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Read-only catalog of dishes, decoded once from the menu table.
/// Queries preserve table (load) order and never mutate the catalog.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    dishes: Vec<DishRecord>,
}

impl MenuCatalog {
    /// Builds a catalog, rejecting duplicate dish names so that lookups by
    /// name return at most one record.
    pub fn new(dishes: Vec<DishRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for dish in &dishes {
            if !seen.insert(dish.name.as_str()) {
                return Err(MenuError::SchemaError {
                    message: format!("Duplicate dish name in menu: {}", dish.name),
                });
            }
        }

        Ok(Self { dishes })
    }

    /// Decodes CSV rows with the fixed header
    /// `Dish Name,Category,Calories (kcal),Protein (g),Price (VND),Allergy Info`.
    /// Fails fast on any malformed row or unknown category label.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut dishes = Vec::new();
        for row in csv_reader.deserialize::<DishRecord>() {
            dishes.push(row?);
        }

        tracing::debug!("Decoded {} menu rows", dishes.len());
        Self::new(dishes)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} dishes from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn from_source(source: &dyn MenuSource) -> Result<Self> {
        let raw = source.read()?;
        Self::from_reader(raw.as_bytes())
    }

    /// Names of all dishes in the given category, in table order. Empty if
    /// none match.
    pub fn list_by_category(&self, category: Category) -> Vec<&str> {
        self.dishes
            .iter()
            .filter(|dish| dish.category == category)
            .map(|dish| dish.name.as_str())
            .collect()
    }

    /// Exact, case-sensitive lookup. An empty name short-circuits without
    /// scanning the table.
    pub fn find_by_name(&self, name: &str) -> Option<&DishRecord> {
        if name.is_empty() {
            return None;
        }
        self.dishes.iter().find(|dish| dish.name == name)
    }

    /// Markdown detail block for the named dish, or the fixed not-found
    /// warning. Pure: no side effects, same output for the same input.
    pub fn format_details(&self, name: &str) -> String {
        match self.find_by_name(name) {
            Some(dish) => render::dish_details(dish),
            None => render::DISH_NOT_FOUND_MSG.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn dishes(&self) -> &[DishRecord] {
        &self.dishes
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_MENU_CSV: &str = "\
Dish Name,Category,Calories (kcal),Protein (g),Price (VND),Allergy Info
Avocado and Quinoa Salad,Appetizer,250,8,345000,NONE
Smoked Salmon and Cucumber Roll,Appetizer,180,22,395000,\"Fish, Dairy\"
Grilled Salmon with Asparagus and Sweet Potato Mash,Main Course,400,40,575000,\"Fish, Dairy\"
Chicken and Avocado Lettuce Wraps,Main Course,350,28,390000,\"Dairy, Poultry\"
Chia Seed Pudding with Berries,Dessert,180,7,235000,Dairy
";

    pub(crate) fn sample_catalog() -> MenuCatalog {
        MenuCatalog::from_reader(SAMPLE_MENU_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_list_by_category_preserves_table_order() {
        let catalog = sample_catalog();

        assert_eq!(
            catalog.list_by_category(Category::Appetizer),
            vec![
                "Avocado and Quinoa Salad",
                "Smoked Salmon and Cucumber Roll"
            ]
        );
        assert_eq!(
            catalog.list_by_category(Category::MainCourse),
            vec![
                "Grilled Salmon with Asparagus and Sweet Potato Mash",
                "Chicken and Avocado Lettuce Wraps"
            ]
        );
        assert_eq!(
            catalog.list_by_category(Category::Dessert),
            vec!["Chia Seed Pudding with Berries"]
        );
    }

    #[test]
    fn test_categories_partition_the_catalog() {
        let catalog = sample_catalog();

        let union: HashSet<&str> = Category::ALL
            .iter()
            .flat_map(|&category| catalog.list_by_category(category))
            .collect();
        let all_names: HashSet<&str> = catalog
            .dishes()
            .iter()
            .map(|dish| dish.name.as_str())
            .collect();

        assert_eq!(union, all_names);
        assert_eq!(union.len(), catalog.len());
    }

    #[test]
    fn test_find_by_name_exact_match() {
        let catalog = sample_catalog();

        let dish = catalog.find_by_name("Avocado and Quinoa Salad").unwrap();
        assert_eq!(dish.price, 345000);
        assert_eq!(dish.calories, 250);
        assert_eq!(dish.protein, 8.0);

        // Case-sensitive, no partial matches.
        assert!(catalog.find_by_name("avocado and quinoa salad").is_none());
        assert!(catalog.find_by_name("Avocado").is_none());
        assert!(catalog.find_by_name("").is_none());
    }

    #[test]
    fn test_format_details_valid_dish() {
        let catalog = sample_catalog();

        let details = catalog.format_details("Chicken and Avocado Lettuce Wraps");
        assert!(details.contains("## 🥗 **Chicken and Avocado Lettuce Wraps**"));
        assert!(details.contains("- **Calories:** 350 kcal"));
        assert!(details.contains("- **Protein:** 28 g"));
        assert!(details.contains("- **Price:** 390,000 VND"));
        assert!(details.contains("- **Allergy Info:** Dairy, Poultry"));
    }

    #[test]
    fn test_format_details_not_found() {
        let catalog = sample_catalog();

        let details = catalog.format_details("Invalid Dish");
        assert!(details.contains("⚠ Dish not found :(("));
        assert!(!details.contains("Calories"));

        // Pure: repeated calls yield identical output.
        assert_eq!(details, catalog.format_details("Invalid Dish"));
    }

    #[test]
    fn test_duplicate_dish_names_rejected() {
        let csv = "\
Dish Name,Category,Calories (kcal),Protein (g),Price (VND),Allergy Info
Chia Seed Pudding with Berries,Dessert,180,7,235000,Dairy
Chia Seed Pudding with Berries,Dessert,180,7,235000,Dairy
";
        let result = MenuCatalog::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(MenuError::SchemaError { .. })));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let csv = "\
Dish Name,Category,Calories (kcal),Protein (g),Price (VND),Allergy Info
Mystery Dish,Beverage,100,1,100000,NONE
";
        let result = MenuCatalog::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(MenuError::CsvError(_))));
    }
}

use crate::domain::model::{CartLineItem, DishRecord};

/// Shown when a dish name is not in the catalog (detail lookup and add).
pub const DISH_NOT_FOUND_MSG: &str =
    "⚠ Dish not found :(( Please select a dish to discover more!!";

/// Shown when add is triggered with no dish selected.
pub const NO_SELECTION_MSG: &str = "⚠ Please select a dish to add to cart!!";

/// Shown after clearing the cart, and when viewing an empty cart.
pub const EMPTY_CART_MSG: &str = "## 🛒 **EMPTY CART**";

/// Groups an integer into thousands with commas: 1080000 -> "1,080,000".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Renders a gram amount, dropping the decimal part when integral so that
/// whole-number protein values display as "8" rather than "8.0".
pub fn format_grams(value: f64) -> String {
    if value.fract() == 0.0 {
        group_thousands(value as u64)
    } else {
        match value.to_string().split_once('.') {
            Some((int_part, frac_part)) => format!(
                "{}.{}",
                group_thousands(int_part.parse().unwrap_or(0)),
                frac_part
            ),
            None => value.to_string(),
        }
    }
}

/// Markdown detail block for a single dish. Allergy info is passed through
/// verbatim.
pub fn dish_details(dish: &DishRecord) -> String {
    format!(
        "## 🥗 **{}**\n\
         - **Calories:** {} kcal\n\
         - **Protein:** {} g\n\
         - **Price:** {} VND\n\
         - **Allergy Info:** {}",
        dish.name,
        dish.calories,
        format_grams(dish.protein),
        group_thousands(dish.price),
        dish.allergy_info,
    )
}

/// Markdown cart block: one line per entry in insertion order, then the
/// three running totals.
pub fn cart_summary(items: &[CartLineItem]) -> String {
    let total_price: u64 = items.iter().map(|item| item.price).sum();
    let total_calories: u64 = items.iter().map(|item| u64::from(item.calories)).sum();
    let total_protein: f64 = items.iter().map(|item| item.protein).sum();

    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("- {}: {} VND", item.dish_name, group_thousands(item.price)))
        .collect();

    format!(
        "## 🛍 **CART:**\n\
         {}\n\
         \n\
         ### 💰 Total price: {} VND\n\
         ### 🎯 Total calories: {} kcal\n\
         ### 🎯 Total protein: {} g",
        lines.join("\n"),
        group_thousands(total_price),
        group_thousands(total_calories),
        format_grams(total_protein),
    )
}

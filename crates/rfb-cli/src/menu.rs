use rfb_api::ApiClient;
use rfb_core::{group_by_category, MenuItem, MENU_CATEGORIES};

/// Print the menu grouped by category.
///
/// # Errors
///
/// Returns an error if the category is unknown or the menu request fails.
pub(crate) async fn run_menu(
    client: &ApiClient,
    category: Option<&str>,
    branch_filter: Option<&str>,
) -> anyhow::Result<()> {
    let category = category.map(str::to_ascii_uppercase);
    if let Some(c) = category.as_deref() {
        if !MENU_CATEGORIES.contains(&c) {
            anyhow::bail!(
                "unknown category '{c}'; expected one of {}",
                MENU_CATEGORIES.join(", ")
            );
        }
    }

    let items = client.get_menus(category.as_deref(), branch_filter).await?;
    if items.is_empty() {
        println!("no menu items found");
        return Ok(());
    }

    for (category, dishes) in group_by_category(items) {
        println!("{}", category_title(&category));
        for dish in &dishes {
            println!("{}", format_dish(dish));
        }
    }
    Ok(())
}

/// `GIFT_HAMPER` -> `Gift Hamper`.
fn category_title(category: &str) -> String {
    category
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_dish(dish: &MenuItem) -> String {
    let mut line = format!("  {:<32}Rs {:>8.2}", dish.name, dish.price);
    if let Some(branch) = &dish.branch {
        line.push_str(&format!("  [{} only]", branch.name));
    }
    if let Some(description) = dish.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!("\n    {description}"));
    }
    line
}

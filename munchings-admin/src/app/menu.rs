use munchings_admin::format;
use munchings_common::sync::LiveRecords;
use munchings_menu_service::{categories, filter_by_category, Category, MenuItem};

use super::backend_with_menu;

pub async fn main(category: Option<Category>) -> anyhow::Result<()> {
    let backend = backend_with_menu().await?;
    let menu = LiveRecords::<MenuItem>::subscribe(backend.as_ref()).records();

    let tabs = categories(&menu)
        .iter()
        .map(Category::to_string)
        .collect::<Vec<_>>();
    println!("Categories: all, {}", tabs.join(", "));

    let shown = filter_by_category(&menu, category);
    if shown.is_empty() {
        println!("No dishes in this category.");
        return Ok(());
    }
    for item in shown {
        println!(
            "{:<28} {:>8}  [{}]  {}",
            item.name,
            format::money(&item.price),
            item.category,
            item.description
        );
    }
    Ok(())
}

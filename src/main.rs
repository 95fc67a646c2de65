mod cli;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use craftdex_common::{catalog_categories, filter, item_categories, Catalog, SessionState};
use error::{CraftdexError, Result};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { data } => {
            println!("📖 craftdex - 数据校验\n");

            let catalog = load_catalog(&data)?;
            println!("✔ 解析成功: {}", data.display());

            let no_image = catalog
                .items
                .iter()
                .filter(|item| item.clean_images().is_empty())
                .count();
            let no_category = catalog
                .items
                .iter()
                .filter(|item| item_categories(item).is_empty())
                .count();

            println!("  物品数: {}", catalog.items.len());
            println!("  分类数: {}", catalog_categories(&catalog).len());
            println!("  未配图: {}", no_image);
            println!("  无分类: {}", no_category);

            if !catalog.mod_meta.version.is_empty() {
                println!("  版本: {}", catalog.mod_meta.version);
            }

            println!("\n✅ 校验完成");
        }

        Commands::Cats { data } => {
            let catalog = load_catalog(&data)?;
            for cat in catalog_categories(&catalog) {
                println!("{}", cat);
            }
        }

        Commands::List { data, category, query, json } => {
            let catalog = load_catalog(&data)?;

            let mut state = SessionState::new();
            if let Some(cat) = category {
                state.select_category(&cat);
            }
            if let Some(q) = query {
                state.set_query(&q);
            }

            let matched = filter(&catalog.items, &state);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&matched)
                        .map_err(craftdex_common::Error::from)?
                );
                return Ok(());
            }

            for item in &matched {
                let name = if item.name.is_empty() { "(未命名)" } else { &item.name };
                println!("{}  {}", item.id, name);
                if cli.verbose {
                    let tags = item_categories(item);
                    println!("    分类: {}", if tags.is_empty() { "—".to_string() } else { tags.join(" / ") });
                }
            }

            println!("\n当前展示：{} / {} 个物品", matched.len(), catalog.items.len());
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(CraftdexError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Catalog::from_json(&content)?)
}

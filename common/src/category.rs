//! 分类标签解析
//!
//! category 字段在 data.json 里既可能是数组，也可能是
//! `/`、`|`、`,`、`，` 分隔的单个字符串。这里统一解析成
//! 标签序列，顺序保留、重复不去重（与数据原貌一致）。

use crate::query::ALL_CATEGORY;
use crate::types::{value_as_text, Catalog, CategoryField, Item};

/// 解析单个物品的分类标签
///
/// 其他类型（数字、对象等）一律返回空序列，不视为错误。
/// 结果里不会出现空字符串。
pub fn item_categories(item: &Item) -> Vec<String> {
    match &item.category {
        CategoryField::Many(values) => values
            .iter()
            .filter_map(value_as_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        CategoryField::One(s) => split_tags(s),
        CategoryField::Other(_) => Vec::new(),
    }
}

/// 分类栏的候选列表
///
/// data.json 显式给出 categories 时原样使用；
/// 否则以"全部"开头，按物品首次出现顺序推导去重标签集。
pub fn catalog_categories(catalog: &Catalog) -> Vec<String> {
    if !catalog.categories.is_empty() {
        return catalog.categories.clone();
    }

    let mut cats = vec![ALL_CATEGORY.to_string()];
    for item in &catalog.items {
        for tag in item_categories(item) {
            if !cats.contains(&tag) {
                cats.push(tag);
            }
        }
    }
    cats
}

fn split_tags(s: &str) -> Vec<String> {
    s.split(['/', '|', ',', '，'])
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn item_with_category(category: CategoryField) -> Item {
        Item {
            id: "x".to_string(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn test_categories_from_array() {
        let item = item_with_category(CategoryField::Many(vec![
            serde_json::json!(" 武器 "),
            serde_json::json!("近战"),
        ]));
        assert_eq!(item_categories(&item), vec!["武器", "近战"]);
    }

    #[test]
    fn test_categories_from_delimited_string() {
        let item = item_with_category(CategoryField::One("武器/近战|稀有".to_string()));
        assert_eq!(item_categories(&item), vec!["武器", "近战", "稀有"]);
    }

    #[test]
    fn test_categories_fullwidth_comma() {
        let item = item_with_category(CategoryField::One("工具，材料, 杂项".to_string()));
        assert_eq!(item_categories(&item), vec!["工具", "材料", "杂项"]);
    }

    #[test]
    fn test_categories_drop_empty_pieces() {
        let item = item_with_category(CategoryField::One("武器//  /近战".to_string()));
        let tags = item_categories(&item);
        assert_eq!(tags, vec!["武器", "近战"]);
        assert!(tags.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_categories_keep_duplicates() {
        let item = item_with_category(CategoryField::One("武器/武器".to_string()));
        assert_eq!(item_categories(&item), vec!["武器", "武器"]);
    }

    #[test]
    fn test_categories_other_type_empty() {
        let item = item_with_category(CategoryField::Other(serde_json::json!(42)));
        assert!(item_categories(&item).is_empty());
    }

    #[test]
    fn test_catalog_categories_declared_wins() {
        let catalog = Catalog {
            categories: vec!["全部".to_string(), "武器".to_string()],
            items: vec![item_with_category(CategoryField::One("工具".to_string()))],
            ..Default::default()
        };
        assert_eq!(catalog_categories(&catalog), vec!["全部", "武器"]);
    }

    #[test]
    fn test_catalog_categories_derived_first_seen() {
        let catalog = Catalog {
            items: vec![
                item_with_category(CategoryField::One("武器/近战".to_string())),
                item_with_category(CategoryField::One("工具/武器".to_string())),
            ],
            ..Default::default()
        };
        assert_eq!(
            catalog_categories(&catalog),
            vec!["全部", "武器", "近战", "工具"]
        );
    }
}

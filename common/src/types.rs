//! 图鉴数据模型
//!
//! data.json 的结构化形式。所有字段都带默认值，
//! 残缺记录解析后走占位渲染，不会让整本图鉴加载失败。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 单个物品
///
/// `id` 是跨渲染稳定的唯一键，轮播状态以它为索引。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: CategoryField,
    pub detail: String,
    pub notes: String,
    pub images: Vec<String>,
    pub recipe: Option<Recipe>,
}

impl Item {
    /// 过滤掉空白条目后的图片列表（首张为缩略图）
    pub fn clean_images(&self) -> Vec<&str> {
        self.images
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// 缩略图（第一张图片）
    pub fn thumbnail(&self) -> Option<&str> {
        self.clean_images().first().copied()
    }

    /// 副图（除首张外的全部图片），轮播只作用于这一段
    pub fn secondary_images(&self) -> Vec<&str> {
        let imgs = self.clean_images();
        if imgs.len() > 1 {
            imgs[1..].to_vec()
        } else {
            Vec::new()
        }
    }
}

/// category 字段：数组或分隔字符串，其余类型一律视为无分类
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Many(Vec<serde_json::Value>),
    One(String),
    Other(serde_json::Value),
}

impl Default for CategoryField {
    fn default() -> Self {
        CategoryField::One(String::new())
    }
}

impl CategoryField {
    /// 参与全文检索的原始文本形式
    pub fn as_search_text(&self) -> String {
        match self {
            CategoryField::Many(values) => values
                .iter()
                .filter_map(value_as_text)
                .collect::<Vec<_>>()
                .join(","),
            CategoryField::One(s) => s.clone(),
            CategoryField::Other(_) => String::new(),
        }
    }
}

/// 数组元素转文本：字符串原样，数字/布尔转写，其余丢弃
pub(crate) fn value_as_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 配方
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub station: String,
    pub cost: Vec<CostEntry>,
}

/// 配方材料条目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEntry {
    pub name: String,
    pub count: CostCount,
}

/// 材料数量：保持原文展示，不做数值化
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostCount {
    Text(String),
    Number(serde_json::Number),
}

impl Default for CostCount {
    fn default() -> Self {
        CostCount::Text(String::new())
    }
}

impl CostCount {
    pub fn is_empty(&self) -> bool {
        matches!(self, CostCount::Text(s) if s.is_empty())
    }
}

impl std::fmt::Display for CostCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostCount::Text(s) => write!(f, "{}", s),
            CostCount::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Mod 元信息（页头・页脚展示用）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModMeta {
    pub version: String,
    pub author: String,
    pub desc: String,
    pub note: String,
    pub links: Vec<ModLink>,
}

/// 外部链接（label 为空的条目不展示）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModLink {
    pub label: String,
    pub url: String,
}

/// 整本图鉴：加载完成后只读
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    #[serde(rename = "mod")]
    pub mod_meta: ModMeta,
    pub categories: Vec<String>,
    pub items: Vec<Item>,
}

impl Catalog {
    /// 从 JSON 文本解析图鉴
    ///
    /// CLI 与 Web 端共用的唯一解析入口；格式错误归入加载失败。
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text.trim())
            .map_err(|e| Error::Load(format!("data.json 格式错误：{}", e)))
    }
}

//! 查询引擎：会话状态 + 分类闸 + 文本闸

use crate::category::item_categories;
use crate::text::normalize;
use crate::types::Item;

/// "全部"分类哨兵值：分类闸对它放行一切
pub const ALL_CATEGORY: &str = "全部";

/// 会话状态
///
/// 生命周期为一次页面会话（或一次 CLI 调用）。每种交互只有一个
/// 修改入口，`query` 永远保存裁剪后的形式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_category: String,
    pub query: String,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            active_category: ALL_CATEGORY.to_string(),
            query: String::new(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 点选分类
    pub fn select_category(&mut self, name: &str) {
        self.active_category = name.to_string();
    }

    /// 提交检索词（输入防抖后的落点），存入裁剪后的形式
    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_string();
    }

    /// 重置到"全部"分类
    pub fn reset_category(&mut self) {
        self.active_category = ALL_CATEGORY.to_string();
    }

    /// 清空检索词
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// 两项都处于默认值（对应空 URL 片段）
    pub fn is_default(&self) -> bool {
        self.active_category == ALL_CATEGORY && self.query.is_empty()
    }
}

/// 物品的全文检索串
///
/// 拼接 id、名称、原始分类、详情、配方序列化、备注后归一化。
/// 只用于子串包含判断，不会展示，键序无所谓。
pub fn search_text(item: &Item) -> String {
    let recipe_json = item
        .recipe
        .as_ref()
        .and_then(|r| serde_json::to_string(r).ok())
        .unwrap_or_else(|| "{}".to_string());

    let parts = [
        item.id.as_str(),
        item.name.as_str(),
        &item.category.as_search_text(),
        item.detail.as_str(),
        &recipe_json,
        item.notes.as_str(),
    ];
    normalize(&parts.join(" "))
}

/// 两道闸都通过才算命中
///
/// 分类闸："全部"或标签精确包含当前分类。
/// 文本闸：检索词归一化后为空则放行，否则要求全文串包含它。
pub fn matches(item: &Item, state: &SessionState) -> bool {
    let cat_ok = state.active_category == ALL_CATEGORY
        || item_categories(item)
            .iter()
            .any(|c| c == &state.active_category);
    if !cat_ok {
        return false;
    }

    let q = normalize(&state.query);
    if q.is_empty() {
        return true;
    }
    search_text(item).contains(&q)
}

/// 过滤物品列表，保持输入顺序、不重排
pub fn filter<'a>(items: &'a [Item], state: &SessionState) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(item, state)).collect()
}

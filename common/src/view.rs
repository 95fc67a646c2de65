//! 视图模型组装
//!
//! 把"当前会话状态 + 轮播状态 + 图鉴"合成一组可直接渲染的
//! 结构。这里不产出标记文本本身；带 `_html` 后缀的字段是经过
//! 转义/高亮的安全片段，其余字段都是原始值，由展示层自行转义。

use crate::carousel::CarouselStore;
use crate::category::item_categories;
use crate::query::{filter, SessionState};
use crate::text::highlight;
use crate::token::parse_inline_image_token;
use crate::types::{Catalog, Item, Recipe};

/// 单个物品卡片的视图模型
#[derive(Debug, Clone)]
pub struct ItemView {
    pub item: Item,
    /// 高亮后的名称（HTML 片段）
    pub name_html: String,
    pub category_tags: Vec<String>,
    pub icon: IconView,
    pub carousel: CarouselView,
    /// 无配方时由展示层显示 "—"
    pub recipe: Option<RecipeView>,
    /// detail 为空时回落到 notes；两者皆空则无此块
    pub detail_html: Option<String>,
}

/// 卡片角标：缩略图优先，无图时取名称首字符，名称也空用 ★
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconView {
    Image(String),
    Glyph(String),
}

/// 轮播视图：只覆盖副图（首张归缩略图）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub thumbnail: Option<String>,
    pub secondary_images: Vec<String>,
    pub current_index: usize,
    pub has_multiple: bool,
}

/// 配方视图
#[derive(Debug, Clone)]
pub struct RecipeView {
    pub station: StationView,
    /// 空列表由展示层显示 "无 / 未填写"
    pub cost: Vec<CostPill>,
}

/// 制作站展示形态
#[derive(Debug, Clone)]
pub enum StationView {
    /// 未填写，占位 "—"
    Missing,
    Text { html: String },
    Image { path: String, label_html: Option<String> },
}

/// 单个材料小签
#[derive(Debug, Clone)]
pub enum CostPill {
    Image {
        path: String,
        label_html: Option<String>,
        count: String,
    },
    Text {
        name_html: String,
        count: String,
    },
}

/// 结果统计：`当前展示 shown / total 个物品`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

/// 一次完整渲染的产出
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub items: Vec<ItemView>,
    pub summary: ResultSummary,
}

/// 全量重算：筛选 + 逐项组装视图模型
///
/// 幂等：同样的三份输入产出同样的结果。轮播条目在这里被惰性
/// 建立并钳制（首次渲染契约）。
pub fn render(catalog: &Catalog, state: &SessionState, carousel: &mut CarouselStore) -> RenderOutput {
    let matched = filter(&catalog.items, state);
    let summary = ResultSummary {
        shown: matched.len(),
        total: catalog.items.len(),
    };
    let items = matched
        .into_iter()
        .map(|item| item_view(item, state, carousel))
        .collect();
    RenderOutput { items, summary }
}

fn item_view(item: &Item, state: &SessionState, carousel: &mut CarouselStore) -> ItemView {
    let query = state.query.as_str();

    let secondary_images: Vec<String> = item
        .secondary_images()
        .into_iter()
        .map(str::to_string)
        .collect();
    let n = secondary_images.len();
    let current_index = carousel.current(&item.id, n);

    let carousel_view = CarouselView {
        thumbnail: item.thumbnail().map(str::to_string),
        secondary_images,
        current_index,
        has_multiple: n > 1,
    };

    let icon = match item.thumbnail() {
        Some(path) => IconView::Image(path.to_string()),
        None => IconView::Glyph(
            item.name
                .trim()
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "★".to_string()),
        ),
    };

    let detail_text = if !item.detail.trim().is_empty() {
        Some(item.detail.as_str())
    } else if !item.notes.trim().is_empty() {
        Some(item.notes.as_str())
    } else {
        None
    };

    ItemView {
        name_html: highlight(&item.name, query),
        category_tags: item_categories(item),
        icon,
        carousel: carousel_view,
        recipe: item.recipe.as_ref().map(|r| recipe_view(r, query)),
        detail_html: detail_text.map(|t| highlight(t, query)),
        item: item.clone(),
    }
}

fn recipe_view(recipe: &Recipe, query: &str) -> RecipeView {
    let station = recipe.station.trim();
    let station_view = if station.is_empty() {
        StationView::Missing
    } else if let Some(token) = parse_inline_image_token(station) {
        StationView::Image {
            path: token.path,
            label_html: non_empty(&token.label).map(|label| highlight(label, query)),
        }
    } else {
        StationView::Text {
            html: highlight(station, query),
        }
    };

    let cost = recipe
        .cost
        .iter()
        .map(|entry| {
            let count = entry.count.to_string();
            match parse_inline_image_token(&entry.name) {
                Some(token) => CostPill::Image {
                    path: token.path,
                    label_html: non_empty(&token.label).map(|label| highlight(label, query)),
                    count,
                },
                None => CostPill::Text {
                    name_html: highlight(&entry.name, query),
                    count,
                },
            }
        })
        .collect();

    RecipeView {
        station: station_view,
        cost,
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

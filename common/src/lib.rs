//! Craftdex 共享库
//!
//! CLI 与 Web(WASM) 共用的图鉴核心：
//! - 数据模型与防御式解析（types）
//! - 分类解析・文本筛选（category / query）
//! - 高亮与转义（text）
//! - 轮播索引状态（carousel）
//! - URL 片段同步（urlstate）
//! - 视图模型组装（view）

pub mod carousel;
pub mod category;
pub mod error;
pub mod query;
pub mod text;
pub mod token;
pub mod types;
pub mod urlstate;
pub mod view;

pub use carousel::CarouselStore;
pub use category::{catalog_categories, item_categories};
pub use error::{Error, Result};
pub use query::{filter, matches, SessionState, ALL_CATEGORY};
pub use text::{escape_html, highlight, normalize};
pub use token::{parse_inline_image_token, InlineImageToken};
pub use types::{Catalog, CategoryField, CostCount, CostEntry, Item, ModLink, ModMeta, Recipe};
pub use urlstate::{decode_fragment, encode_fragment};
pub use view::{render, CarouselView, CostPill, IconView, ItemView, RecipeView, RenderOutput, ResultSummary, StationView};

//! UI 组件

pub mod category_bar;
pub mod header;
pub mod item_card;
pub mod item_list;
pub mod search_box;

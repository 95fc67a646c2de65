//! 物品列表组件：结果统计 + 空态 + 卡片流

use crate::components::item_card::ItemCard;
use craftdex_common::{RenderOutput, SessionState};
use leptos::prelude::*;

#[component]
pub fn ItemList<FP, FN, FG>(
    output: RenderOutput,
    state: SessionState,
    on_prev: FP,
    on_next: FN,
    on_goto: FG,
) -> impl IntoView
where
    FP: Fn(String) + 'static + Clone,
    FN: Fn(String) + 'static + Clone,
    FG: Fn((String, usize)) + 'static + Clone,
{
    let summary = output.summary;
    let query_label = if state.query.is_empty() {
        "无".to_string()
    } else {
        state.query.clone()
    };
    let is_empty = output.items.is_empty();

    view! {
        <div class="result-meta">
            <span class="result-hint">
                {format!("当前展示：{} / {} 个物品", summary.shown, summary.total)}
            </span>
            <span class="active-state">
                {format!("分类：{}｜搜索：{}", state.active_category, query_label)}
            </span>
        </div>
        <section class="list">
            {is_empty
                .then(|| {
                    view! {
                        <div class="empty">
                            "没有找到匹配的内容。你可以："
                            <ul>
                                <li>"清空搜索词"</li>
                                <li>"切换到“全部”分类"</li>
                            </ul>
                        </div>
                    }
                })}
            {output
                .items
                .into_iter()
                .map(|card| {
                    let on_prev = on_prev.clone();
                    let on_next = on_next.clone();
                    let on_goto = on_goto.clone();
                    view! { <ItemCard card=card on_prev=on_prev on_next=on_next on_goto=on_goto /> }
                })
                .collect_view()}
        </section>
    }
}

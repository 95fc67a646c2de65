//! 主应用组件
//!
//! 单线程事件驱动：任何状态变更后的重渲染都是从
//! 会话状态 + 轮播状态 + 图鉴出发的全量幂等重算。

use crate::components::{
    category_bar::CategoryBar, header::Header, item_list::ItemList, search_box::SearchBox,
};
use crate::data;
use craftdex_common::{
    catalog_categories, decode_fragment, encode_fragment, render, CarouselStore, Catalog,
    RenderOutput, ResultSummary, SessionState,
};
use gloo::timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;

/// 输入防抖窗口：静默 120ms 后才提交检索词
const DEBOUNCE_MS: u32 = 120;

/// 图鉴加载状态（失败是终态，不重试）
#[derive(Clone)]
enum LoadState {
    Loading,
    Ready(Catalog),
    Failed(String),
}

#[component]
pub fn App() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    // 先从片段恢复初始状态，再开始加载数据
    let (session, set_session) = signal(decode_fragment(&current_fragment()));
    // 轮播表不参与响应式（独立于渲染存活），用纪元信号触发重算
    let carousel_store = StoredValue::new(CarouselStore::new());
    let (carousel_epoch, set_carousel_epoch) = signal(0u32);
    let pending_debounce = StoredValue::new_local(None::<Timeout>);

    leptos::task::spawn_local(async move {
        match data::load_catalog().await {
            Ok(catalog) => set_load_state.set(LoadState::Ready(catalog)),
            Err(e) => {
                web_sys::console::error_1(&e.to_string().into());
                set_load_state.set(LoadState::Failed(e.to_string()));
            }
        }
    });

    // 地址栏被外部改动：只解码比对，不回写（避免反馈环改写历史）
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        let decoded = decode_fragment(&current_fragment());
        if decoded != session.get_untracked() {
            set_session.set(decoded);
        }
    });
    on_cleanup(move || hash_listener.remove());

    // 交互落点：片段写回地址栏 + 状态更新
    let commit = move |next: SessionState| {
        write_fragment(&next);
        if next != session.get_untracked() {
            set_session.set(next);
        }
    };

    let on_select_category = move |name: String| {
        let mut next = session.get_untracked();
        next.select_category(&name);
        commit(next);
    };

    let on_reset_category = move |_: ()| {
        let mut next = session.get_untracked();
        next.reset_category();
        commit(next);
    };

    let on_clear_query = move |_: ()| {
        cancel_pending(pending_debounce);
        let mut next = session.get_untracked();
        next.clear_query();
        commit(next);
    };

    // 键入只重置计时器，落点取最后一次输入（latest-wins）
    let on_search_input = move |raw: String| {
        cancel_pending(pending_debounce);
        let timer = Timeout::new(DEBOUNCE_MS, move || {
            let mut next = session.get_untracked();
            next.set_query(&raw);
            commit(next);
        });
        pending_debounce.set_value(Some(timer));
    };

    let secondary_count = move |id: &str| {
        load_state.with_untracked(|ls| match ls {
            LoadState::Ready(catalog) => catalog
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.secondary_images().len())
                .unwrap_or(0),
            _ => 0,
        })
    };

    let on_carousel_prev = move |id: String| {
        let n = secondary_count(&id);
        carousel_store.update_value(|store| store.prev(&id, n));
        set_carousel_epoch.update(|e| *e += 1);
    };

    let on_carousel_next = move |id: String| {
        let n = secondary_count(&id);
        carousel_store.update_value(|store| store.next(&id, n));
        set_carousel_epoch.update(|e| *e += 1);
    };

    let on_carousel_goto = move |(id, index): (String, usize)| {
        let n = secondary_count(&id);
        carousel_store.update_value(|store| store.goto(&id, index, n));
        set_carousel_epoch.update(|e| *e += 1);
    };

    view! {
        <div class="container">
            {move || match load_state.get() {
                LoadState::Loading => view! { <div class="empty">"图鉴加载中……"</div> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <div class="empty">"初始化失败：" {message}</div> }.into_any()
                }
                LoadState::Ready(catalog) => {
                    let cats = catalog_categories(&catalog);
                    let state = session.get();
                    // 订阅轮播纪元，导航后触发全量重算
                    carousel_epoch.get();
                    let output = carousel_store
                        .try_update_value(|store| render(&catalog, &state, store))
                        .unwrap_or(RenderOutput {
                            items: Vec::new(),
                            summary: ResultSummary { shown: 0, total: 0 },
                        });

                    view! {
                        <Header meta=catalog.mod_meta.clone() />
                        <CategoryBar
                            cats=cats
                            active=state.active_category.clone()
                            on_select=on_select_category
                        />
                        <SearchBox
                            query=state.query.clone()
                            on_input=on_search_input
                            on_clear=on_clear_query
                            on_reset=on_reset_category
                        />
                        <ItemList
                            output=output
                            state=state
                            on_prev=on_carousel_prev
                            on_next=on_carousel_next
                            on_goto=on_carousel_goto
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// 取消尚未触发的防抖计时器
fn cancel_pending(pending: StoredValue<Option<Timeout>, LocalStorage>) {
    pending.update_value(|slot| {
        if let Some(timer) = slot.take() {
            timer.cancel();
        }
    });
}

/// 当前地址栏片段（含开头的 `#`，可能为空）
fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// 把会话状态编码进地址栏（默认状态写空片段）
fn write_fragment(state: &SessionState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let encoded = encode_fragment(state);
    let hash = if encoded.is_empty() {
        String::new()
    } else {
        format!("#{}", encoded)
    };
    let _ = window.location().set_hash(&hash);
}

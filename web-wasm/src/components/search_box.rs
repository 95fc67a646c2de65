//! 搜索框组件
//!
//! 输入回调交给 App 做防抖；清空与重置立即生效。

use leptos::prelude::*;

#[component]
pub fn SearchBox<FI, FC, FR>(
    query: String,
    on_input: FI,
    on_clear: FC,
    on_reset: FR,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="搜索名称、分类、配方、备注……"
                prop:value=query
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <button
                class="btn"
                on:click={
                    let on_clear = on_clear.clone();
                    move |_| on_clear(())
                }
            >
                "清空搜索"
            </button>
            <button
                class="btn"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "重置分类"
            </button>
        </div>
    }
}

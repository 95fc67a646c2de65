//! 分类栏组件

use leptos::prelude::*;

#[component]
pub fn CategoryBar<F>(cats: Vec<String>, active: String, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="cat-bar">
            {cats
                .into_iter()
                .map(|cat| {
                    let on_select = on_select.clone();
                    let is_active = cat == active;
                    let name = cat.clone();
                    view! {
                        <div
                            class="chip"
                            class:active=is_active
                            on:click=move |_| on_select(name.clone())
                        >
                            {cat}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

//! 物品卡片组件
//!
//! 带 `_html` 后缀的视图模型字段已经转义/高亮，用 inner_html 注入；
//! 其余字段走普通插值，由框架转义。

use craftdex_common::{CostPill, IconView, ItemView, RecipeView, StationView};
use leptos::prelude::*;

#[component]
pub fn ItemCard<FP, FN, FG>(card: ItemView, on_prev: FP, on_next: FN, on_goto: FG) -> impl IntoView
where
    FP: Fn(String) + 'static + Clone,
    FN: Fn(String) + 'static + Clone,
    FG: Fn((String, usize)) + 'static + Clone,
{
    let id = card.item.id.clone();
    let item_name = card.item.name.clone();

    let media = {
        let c = card.carousel.clone();
        if c.thumbnail.is_none() && c.secondary_images.is_empty() {
            Some(
                view! {
                    <div class="media">
                        <div class="placeholder">
                            "未配置图片：在 data.json 的 images 数组里填入 images/xxx.png"
                        </div>
                    </div>
                }
                .into_any(),
            )
        } else if c.secondary_images.is_empty() {
            None
        } else {
            let current_src = c
                .secondary_images
                .get(c.current_index)
                .cloned()
                .unwrap_or_default();
            // 副图从第 2 张起编号
            let alt = format!("{} 图片 {}", item_name, c.current_index + 2);

            let dots = c
                .secondary_images
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    let on_goto = on_goto.clone();
                    let id = id.clone();
                    view! {
                        <span
                            class="dot"
                            class:active=(i == c.current_index)
                            on:click=move |_| on_goto((id.clone(), i))
                        ></span>
                    }
                })
                .collect_view();

            let nav = c.has_multiple.then(|| {
                let on_prev = on_prev.clone();
                let on_next = on_next.clone();
                let prev_id = id.clone();
                let next_id = id.clone();
                view! {
                    <div class="car-nav">
                        <button
                            class="car-btn"
                            aria-label="上一张"
                            on:click=move |_| on_prev(prev_id.clone())
                        >
                            "‹"
                        </button>
                        <button
                            class="car-btn"
                            aria-label="下一张"
                            on:click=move |_| on_next(next_id.clone())
                        >
                            "›"
                        </button>
                    </div>
                }
            });

            Some(
                view! {
                    <div class="media">
                        <div class="carousel">
                            <img src=current_src alt=alt loading="lazy" />
                            {nav}
                        </div>
                        <div class="dots">{dots}</div>
                    </div>
                }
                .into_any(),
            )
        }
    };

    let icon = match card.icon.clone() {
        IconView::Image(path) => view! {
            <div class="icon has-img">
                <img src=path alt="" loading="lazy" />
            </div>
        }
        .into_any(),
        IconView::Glyph(glyph) => view! { <div class="icon">{glyph}</div> }.into_any(),
    };

    let tags = card
        .category_tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    let recipe = recipe_block(card.recipe.clone());

    let detail = card.detail_html.clone().map(|html| {
        view! {
            <div class="detail">
                <div class="k">"详细介绍"</div>
                <div class="v" inner_html=html></div>
            </div>
        }
    });

    view! {
        <article class="card">
            {media}
            <div class="toprow">
                {icon}
                <div class="headcol">
                    <h3 class="name" inner_html=card.name_html.clone()></h3>
                    <div class="meta">{tags}</div>
                </div>
            </div>
            <div class="box">
                <div class="k">"配方"</div>
                <div class="v">{recipe}</div>
            </div>
            {detail}
        </article>
    }
}

fn recipe_block(recipe: Option<RecipeView>) -> AnyView {
    let Some(recipe) = recipe else {
        return view! { <div class="r-muted">"—"</div> }.into_any();
    };

    let station = match recipe.station {
        StationView::Missing => {
            view! { <div class="r-station r-muted">"制作站：—"</div> }.into_any()
        }
        StationView::Text { html } => view! {
            <div class="r-station">
                <span class="r-label">"制作站："</span>
                <span class="r-name" inner_html=html></span>
            </div>
        }
        .into_any(),
        StationView::Image { path, label_html } => view! {
            <div class="r-station">
                <span class="r-label">"制作站："</span>
                <img class="r-img" src=path alt="" loading="lazy" />
                {label_html.map(|html| view! { <span class="r-name" inner_html=html></span> })}
            </div>
        }
        .into_any(),
    };

    let cost = if recipe.cost.is_empty() {
        view! { <div class="r-muted">"无 / 未填写"</div> }.into_any()
    } else {
        let pills = recipe.cost.into_iter().map(cost_pill).collect_view();
        view! { <div class="r-cost">{pills}</div> }.into_any()
    };

    view! { <div class="r-wrap">{station}{cost}</div> }.into_any()
}

fn cost_pill(pill: CostPill) -> AnyView {
    match pill {
        CostPill::Image {
            path,
            label_html,
            count,
        } => {
            let title = path.clone();
            view! {
                <span class="r-pill" title=title>
                    <img class="r-img" src=path alt="" loading="lazy" />
                    {label_html.map(|html| view! { <span class="r-name" inner_html=html></span> })}
                    <span class="r-x">{format!("x{}", count)}</span>
                </span>
            }
            .into_any()
        }
        CostPill::Text { name_html, count } => view! {
            <span class="r-pill">
                <span class="r-name" inner_html=name_html></span>
                <span class="r-x">{format!("x{}", count)}</span>
            </span>
        }
        .into_any(),
    }
}

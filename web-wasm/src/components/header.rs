//! 页头组件：Mod 元信息与外部链接

use craftdex_common::ModMeta;
use leptos::prelude::*;

#[component]
pub fn Header(meta: ModMeta) -> impl IntoView {
    let version_line = {
        let mut line = meta.version.clone();
        if !meta.author.is_empty() {
            if !line.is_empty() {
                line.push_str("  ");
            }
            line.push_str("｜作者：");
            line.push_str(&meta.author);
        }
        line
    };

    let links = meta
        .links
        .iter()
        .filter(|link| !link.label.is_empty())
        .cloned()
        .collect::<Vec<_>>();

    let desc = meta.desc.clone();
    let note = meta.note.clone();

    view! {
        <header class="header">
            <h1>"物品图鉴"</h1>
            <div class="version-line">{version_line}</div>
            <div class="chips">
                {links
                    .into_iter()
                    .map(|link| {
                        if link.url.is_empty() {
                            view! { <span class="chip">{link.label}</span> }.into_any()
                        } else {
                            view! {
                                <a class="chip" href=link.url target="_blank" rel="noreferrer">
                                    {link.label}
                                </a>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()}
            </div>
            {(!desc.is_empty()).then(|| view! { <div class="desc">{desc.clone()}</div> })}
            {(!note.is_empty()).then(|| view! { <div class="note">{note.clone()}</div> })}
        </header>
    }
}

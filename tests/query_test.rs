//! 端到端筛选测试
//!
//! 5 个物品、2 个分类的小图鉴，验证分类闸 + 文本闸组合与结果统计

use craftdex_common::{
    decode_fragment, encode_fragment, render, CarouselStore, Catalog, ResultSummary, SessionState,
};

fn fixture() -> Catalog {
    Catalog::from_json(
        r#"{
        "mod": {"version": "v1.0", "author": "星尘工坊"},
        "items": [
            {"id": "iron_axe", "name": "铁斧 axe", "category": "工具",
             "images": ["images/axe.png", "images/axe_b.png", "images/axe_c.png"]},
            {"id": "iron_pickaxe", "name": "铁镐", "category": "工具",
             "detail": "挖矿用 pickaxe"},
            {"id": "stone_hammer", "name": "石锤", "category": "工具"},
            {"id": "iron_sword", "name": "铁剑", "category": "武器",
             "notes": "新手 axe 误标"},
            {"id": "bow", "name": "短弓", "category": "武器"}
        ]
    }"#,
    )
    .expect("测试数据应能解析")
}

#[test]
fn test_category_and_query_compose() {
    let catalog = fixture();
    let mut state = SessionState::new();
    state.select_category("工具");
    state.set_query("axe");

    let mut carousel = CarouselStore::new();
    let out = render(&catalog, &state, &mut carousel);

    // "工具" 里含 "axe" 的只有铁斧（名称）和铁镐（detail 里的 pickaxe 包含 axe）
    let ids: Vec<&str> = out.items.iter().map(|v| v.item.id.as_str()).collect();
    assert_eq!(ids, vec!["iron_axe", "iron_pickaxe"]);
    assert_eq!(out.summary, ResultSummary { shown: 2, total: 5 });

    // 武器分类里的 "axe" 被分类闸挡下
    assert!(!ids.contains(&"iron_sword"));
}

#[test]
fn test_default_state_shows_everything() {
    let catalog = fixture();
    let mut carousel = CarouselStore::new();
    let out = render(&catalog, &SessionState::new(), &mut carousel);
    assert_eq!(out.summary, ResultSummary { shown: 5, total: 5 });
}

#[test]
fn test_query_only_crosses_categories() {
    let catalog = fixture();
    let mut state = SessionState::new();
    state.set_query("axe");

    let mut carousel = CarouselStore::new();
    let out = render(&catalog, &state, &mut carousel);
    let ids: Vec<&str> = out.items.iter().map(|v| v.item.id.as_str()).collect();
    // notes 也参与全文检索
    assert_eq!(ids, vec!["iron_axe", "iron_pickaxe", "iron_sword"]);
}

#[test]
fn test_fragment_roundtrip_through_interaction() {
    let mut state = SessionState::new();
    state.select_category("工具");
    state.set_query("  axe ");

    let fragment = encode_fragment(&state);
    let restored = decode_fragment(&fragment);
    assert_eq!(restored, state);
    assert_eq!(restored.query, "axe");
}

#[test]
fn test_carousel_state_outlives_filtering() {
    let catalog = fixture();
    let mut carousel = CarouselStore::new();

    // 第一次渲染建立轮播条目并前进一张
    render(&catalog, &SessionState::new(), &mut carousel);
    carousel.next("iron_axe", 2);

    // 切到只剩武器的筛选，铁斧不在结果里
    let mut state = SessionState::new();
    state.select_category("武器");
    let out = render(&catalog, &state, &mut carousel);
    assert!(out.items.iter().all(|v| v.item.id != "iron_axe"));

    // 切回来，下标仍然是 1
    let out = render(&catalog, &SessionState::new(), &mut carousel);
    let axe = out
        .items
        .iter()
        .find(|v| v.item.id == "iron_axe")
        .expect("铁斧应在结果里");
    assert_eq!(axe.carousel.current_index, 1);
}

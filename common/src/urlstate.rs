//! URL 片段 ⇄ 会话状态
//!
//! 片段是查询串风格，至多两个键：`cat`（非"全部"时出现）和
//! `q`（非空时出现），`cat` 在前。编码解码用
//! application/x-www-form-urlencoded 规则，与浏览器
//! URLSearchParams 一致（空格编码为 `+`）。

use crate::query::{SessionState, ALL_CATEGORY};

/// 会话状态 → 片段
///
/// 默认状态产出空串（此时不该往地址栏写 `#`）。
/// 对可达状态满足 `decode_fragment(encode_fragment(s)) == s`。
pub fn encode_fragment(state: &SessionState) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    if state.active_category != ALL_CATEGORY {
        ser.append_pair("cat", &state.active_category);
    }
    if !state.query.is_empty() {
        ser.append_pair("q", &state.query);
    }
    ser.finish()
}

/// 片段 → 会话状态
///
/// 允许带开头的 `#`；`cat` 缺失或为空回落到"全部"，`q` 缺失为空串，
/// 其余键忽略。外部改写的 `q` 也按裁剪后的形式存入。
/// 键重复时取第一个出现（URLSearchParams.get 语义）。
pub fn decode_fragment(fragment: &str) -> SessionState {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut state = SessionState::new();
    let mut cat_seen = false;
    let mut q_seen = false;
    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "cat" if !cat_seen => {
                cat_seen = true;
                if !value.is_empty() {
                    state.active_category = value.into_owned();
                }
            }
            "q" if !q_seen => {
                q_seen = true;
                state.set_query(&value);
            }
            _ => {}
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cat: &str, q: &str) -> SessionState {
        SessionState {
            active_category: cat.to_string(),
            query: q.to_string(),
        }
    }

    #[test]
    fn test_default_state_encodes_empty() {
        assert_eq!(encode_fragment(&SessionState::new()), "");
    }

    #[test]
    fn test_encode_category_only() {
        assert_eq!(encode_fragment(&state("武器", "")), "cat=%E6%AD%A6%E5%99%A8");
    }

    #[test]
    fn test_encode_key_order_cat_before_q() {
        let encoded = encode_fragment(&state("Weapons", "sword"));
        assert_eq!(encoded, "cat=Weapons&q=sword");
    }

    #[test]
    fn test_roundtrip() {
        let original = state("Weapons", "sword");
        assert_eq!(decode_fragment(&encode_fragment(&original)), original);

        let default = SessionState::new();
        assert_eq!(decode_fragment(&encode_fragment(&default)), default);
    }

    #[test]
    fn test_roundtrip_cjk_and_space() {
        let original = state("武器", "铁 剑");
        let encoded = encode_fragment(&original);
        // URLSearchParams 语义：空格是 +
        assert!(encoded.contains('+'));
        assert_eq!(decode_fragment(&encoded), original);
    }

    #[test]
    fn test_decode_missing_keys_defaults() {
        let state = decode_fragment("");
        assert_eq!(state.active_category, ALL_CATEGORY);
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_decode_tolerates_leading_hash() {
        let state = decode_fragment("#cat=Tools&q=axe");
        assert_eq!(state.active_category, "Tools");
        assert_eq!(state.query, "axe");
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let state = decode_fragment("cat=Tools&page=3&sort=desc");
        assert_eq!(state.active_category, "Tools");
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_decode_duplicate_keys_first_wins() {
        let state = decode_fragment("cat=Tools&cat=Weapons&q=axe&q=sword");
        assert_eq!(state.active_category, "Tools");
        assert_eq!(state.query, "axe");
    }

    #[test]
    fn test_decode_first_cat_empty_still_falls_back() {
        // 第一个 cat 为空时与 `cat` 缺失同义，后续重复键不再生效
        let state = decode_fragment("cat=&cat=Weapons");
        assert_eq!(state.active_category, ALL_CATEGORY);
    }

    #[test]
    fn test_decode_empty_cat_falls_back_to_all() {
        let state = decode_fragment("cat=&q=axe");
        assert_eq!(state.active_category, ALL_CATEGORY);
        assert_eq!(state.query, "axe");
    }

    #[test]
    fn test_decode_trims_external_query() {
        let state = decode_fragment("q=++axe++");
        assert_eq!(state.query, "axe");
    }
}

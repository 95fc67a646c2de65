//! 轮播索引状态
//!
//! 以物品 id 为键记录"当前副图下标"，独立于渲染存活。
//! 条目在首次渲染时惰性建立，只被轮播操作修改，从不删除；
//! 物品被移除后的残留条目无害。

use std::collections::HashMap;

/// 每个物品的轮播下标表
///
/// 约定：副图数为 `n` 时下标恒在 `[0, n-1]`；未记录按 0 处理；
/// 读取时钳制（两次加载之间数据变短也不会越界）。
#[derive(Debug, Clone, Default)]
pub struct CarouselStore {
    indices: HashMap<String, usize>,
}

impl CarouselStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取当前下标，并把钳制后的值写回（首次观察即记 0）
    ///
    /// `n` 为该物品当前的副图数量；`n == 0` 时不建条目，返回 0。
    pub fn current(&mut self, id: &str, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let cur = self.indices.get(id).copied().unwrap_or(0).min(n - 1);
        self.indices.insert(id.to_string(), cur);
        cur
    }

    /// 上一张（环绕）
    pub fn prev(&mut self, id: &str, n: usize) {
        if n == 0 {
            return;
        }
        let cur = self.current(id, n);
        self.indices.insert(id.to_string(), (cur + n - 1) % n);
    }

    /// 下一张（环绕）
    pub fn next(&mut self, id: &str, n: usize) {
        if n == 0 {
            return;
        }
        let cur = self.current(id, n);
        self.indices.insert(id.to_string(), (cur + 1) % n);
    }

    /// 跳到指定下标（越界钳制到 `[0, n-1]`）
    pub fn goto(&mut self, id: &str, index: usize, n: usize) {
        if n == 0 {
            return;
        }
        self.indices.insert(id.to_string(), index.min(n - 1));
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_is_zero() {
        let mut store = CarouselStore::new();
        assert_eq!(store.current("sword", 3), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut store = CarouselStore::new();
        store.next("sword", 3);
        store.next("sword", 3);
        store.next("sword", 3);
        assert_eq!(store.current("sword", 3), 0);
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut store = CarouselStore::new();
        store.prev("sword", 3);
        assert_eq!(store.current("sword", 3), 2);
    }

    #[test]
    fn test_goto_clamps() {
        let mut store = CarouselStore::new();
        store.goto("sword", 99, 3);
        assert_eq!(store.current("sword", 3), 2);
    }

    #[test]
    fn test_stale_index_clamped_on_read() {
        // 上次会话存了下标 4，数据更新后副图只剩 2 张
        let mut store = CarouselStore::new();
        store.goto("sword", 4, 5);
        assert_eq!(store.current("sword", 2), 1);
    }

    #[test]
    fn test_no_secondary_images_is_noop() {
        let mut store = CarouselStore::new();
        store.prev("bare", 0);
        store.next("bare", 0);
        store.goto("bare", 3, 0);
        assert_eq!(store.current("bare", 0), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_items_tracked_independently() {
        let mut store = CarouselStore::new();
        store.next("a", 3);
        store.next("a", 3);
        store.next("b", 2);
        assert_eq!(store.current("a", 3), 2);
        assert_eq!(store.current("b", 2), 1);
    }
}

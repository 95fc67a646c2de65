//! 错误类型定义

use thiserror::Error;

/// 共享错误类型
///
/// 加载与挂载失败是致命错误（整页只显示一条错误信息）；
/// 单个物品字段缺失一律走默认值降级，不会产生错误。
#[derive(Error, Debug)]
pub enum Error {
    /// 图鉴数据获取失败（网络非 2xx、内嵌数据缺失等），不重试
    #[error("图鉴数据加载失败：{0}")]
    Load(String),

    /// 展示层挂载点不存在
    #[error("找不到容器 {0}（请确认页面结构）")]
    MissingContainer(String),

    #[error("JSON 解析错误：{0}")]
    Json(#[from] serde_json::Error),

    #[error("IO 错误：{0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

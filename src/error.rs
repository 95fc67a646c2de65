use thiserror::Error;

#[derive(Error, Debug)]
pub enum CraftdexError {
    #[error("数据文件不存在: {0}")]
    FileNotFound(String),

    #[error("图鉴错误: {0}")]
    Catalog(#[from] craftdex_common::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CraftdexError>;

//! 内联图片标记解析
//!
//! 制作站和材料名里允许嵌入 `文字 [images/xxx.png] 文字` 形式的
//! 图片引用。方括号内是图片路径，括号外的文字拼成标签。

/// 解析出的图片路径与标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImageToken {
    pub path: String,
    pub label: String,
}

const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".webp", ".gif", ".svg"];

/// 从自由文本里取出第一个图片标记
///
/// 只认第一处非空方括号；括号内容不以图片扩展名结尾时整体视为
/// 普通文本（返回 `None`）。标签为括号前后文字去空白后用单个
/// 空格连接，空片段丢弃。
pub fn parse_inline_image_token(text: &str) -> Option<InlineImageToken> {
    let s = text.trim();
    let (open, inner, rest_at) = first_bracket(s)?;

    let path = inner.trim();
    if !has_image_extension(path) {
        return None;
    }

    let before = s[..open].trim();
    let after = s[rest_at..].trim();
    let label = [before, after]
        .iter()
        .filter(|piece| !piece.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    Some(InlineImageToken {
        path: path.to_string(),
        label,
    })
}

/// 第一个非空 `[...]` 段：返回 (左括号位置, 括号内容, 右括号之后的位置)
fn first_bracket(s: &str) -> Option<(usize, &str, usize)> {
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find('[') {
        let open = search_from + rel;
        let close = open + 1 + s[open + 1..].find(']')?;
        if close > open + 1 {
            return Some((open, &s[open + 1..close], close + 1));
        }
        // 空括号跳过，继续向后找
        search_from = open + 1;
    }
    None
}

fn has_image_extension(path: &str) -> bool {
    let lower = path.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

//! 文本工具：归一化・HTML 转义・检索词高亮

/// 归一化：去首尾空白并小写化
///
/// 只做简单大小写折叠，不做 locale 相关的比较规则。
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// HTML 转义
///
/// 所有插入页面的值（含属性值：数量、路径、标签）都必须先过这里。
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// 检索词高亮
///
/// 对 `text` 做大小写不敏感的字面子串匹配（检索词不是模式语言，
/// `.` `[` 等一律按原字符处理），命中段包上 `<span class="hl">`，
/// 其余内容全部转义。匹配从左到右、不重叠。
/// 检索词去空白后为空时等价于纯转义。
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return escape_html(text);
    }

    let mut out = String::new();
    let mut seg_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], query) {
            out.push_str(&escape_html(&text[seg_start..pos]));
            out.push_str("<span class=\"hl\">");
            out.push_str(&escape_html(&text[pos..pos + len]));
            out.push_str("</span>");
            pos += len;
            seg_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&escape_html(&text[seg_start..]));
    out
}

/// 在 `haystack` 开头尝试匹配 `needle`，命中则返回命中的字节长度
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut len = 0;
    let mut hay = haystack.chars();
    for nc in needle.chars() {
        let hc = hay.next()?;
        if !fold_eq(hc, nc) {
            return None;
        }
        len += hc.len_utf8();
    }
    Some(len)
}

/// 逐字符的简单大小写折叠比较
fn fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

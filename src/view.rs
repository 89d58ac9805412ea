//! Embedded submission page. The page is a single static template with one
//! slot for the flash banner; no template engine needed at this size.

use crate::flash::Flash;

const FLASH_SLOT: &str = "<!--flash-->";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8">
  <title>MemoryLogMonitor - 日志发送</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 3rem auto; }
    .flash { padding: .6rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
    .flash.success { background: #e6f6e6; color: #1a6b1a; }
    .flash.error { background: #fbe8e8; color: #a11a1a; }
    textarea, select { width: 100%; margin-bottom: 1rem; }
  </style>
</head>
<body>
  <h1>发送日志</h1>
  <!--flash-->
  <form method="post" action="/send-log">
    <label for="logMessage">日志内容</label>
    <textarea id="logMessage" name="logMessage" rows="4"></textarea>
    <label for="logLevel">日志级别</label>
    <select id="logLevel" name="logLevel">
      <option value="DEBUG">DEBUG</option>
      <option value="INFO" selected>INFO</option>
      <option value="WARN">WARN</option>
      <option value="ERROR">ERROR</option>
    </select>
    <button type="submit">发送</button>
  </form>
</body>
</html>
"#;

/// Render the form, with the flash banner injected when one is pending.
pub fn render_index(flash: Option<&Flash>) -> String {
    let banner = match flash {
        Some(Flash::Success(text)) => {
            format!(r#"<div class="flash success">{}</div>"#, escape_html(text))
        }
        Some(Flash::Error(text)) => {
            format!(r#"<div class="flash error">{}</div>"#, escape_html(text))
        }
        None => String::new(),
    };
    INDEX_TEMPLATE.replacen(FLASH_SLOT, &banner, 1)
}

/// Minimal escaping for flash text (a dispatch failure description can
/// contain arbitrary characters).
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_flash_has_no_banner() {
        let page = render_index(None);
        assert!(!page.contains("class=\"flash"));
        assert!(page.contains(r#"action="/send-log""#));
    }

    #[test]
    fn test_render_success_banner() {
        let flash = Flash::Success("日志已成功发送到 MemoryLogMonitor".into());
        let page = render_index(Some(&flash));
        assert!(page.contains(r#"<div class="flash success">日志已成功发送到 MemoryLogMonitor</div>"#));
    }

    #[test]
    fn test_render_escapes_error_text() {
        let flash = Flash::Error("发送日志失败: <boom> & \"quote\"".into());
        let page = render_index(Some(&flash));
        assert!(page.contains("&lt;boom&gt; &amp; &quot;quote&quot;"));
        assert!(!page.contains("<boom>"));
    }
}

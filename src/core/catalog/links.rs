//! 链接改写：高清隐私模式视频嵌入、在线表格查看

use std::sync::LazyLock;
use tracing::warn;
use url::Url;

use crate::app::error::types::Result;

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed";
const YOUTUBE_NOCOOKIE_EMBED: &str = "https://www.youtube-nocookie.com/embed";
const OFFICE_VIEWER: &str = "https://view.officeapps.live.com/op/view.aspx";

/// 无协议链接（`//host/...`）按 https 解析
static HTTPS_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://localhost/").expect("valid base url"));

/// 嵌入播放器的固定参数
const HD_VIDEO_PARAMS: [(&str, &str); 8] = [
    ("vq", "hd1080"),
    ("quality", "hd1080"),
    ("hd", "1"),
    ("rel", "0"),
    ("modestbranding", "1"),
    ("showinfo", "0"),
    ("iv_load_policy", "3"),
    ("playsinline", "1"),
];

fn is_youtube_embed(url: &str) -> bool {
    url.contains("youtube.com/embed") || url.contains("youtube-nocookie.com/embed")
}

/// YouTube 嵌入链接改为 nocookie 域名并附加高清参数，其他链接原样返回
pub fn with_hd_video_params(url: &str) -> String {
    if !is_youtube_embed(url) {
        return url.to_string();
    }

    let absolute = match Url::options().base_url(Some(&HTTPS_BASE)).parse(url) {
        Ok(absolute) => absolute,
        Err(err) => {
            warn!(url, "cannot parse video url: {err}");
            return url.replacen(YOUTUBE_EMBED, YOUTUBE_NOCOOKIE_EMBED, 1);
        }
    };
    let sanitized = absolute
        .as_str()
        .replacen(YOUTUBE_EMBED, YOUTUBE_NOCOOKIE_EMBED, 1);
    let mut parsed = match Url::parse(&sanitized) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(url, "cannot parse video url: {err}");
            return sanitized;
        }
    };

    set_query_params(&mut parsed, &HD_VIDEO_PARAMS);
    parsed.to_string()
}

/// 逐个设置查询参数：已有的键原位替换并去重，没有的追加到末尾
fn set_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = vec![false; params.len()];

    for (key, value) in url.query_pairs() {
        match params.iter().position(|(name, _)| *name == key) {
            Some(index) if replaced[index] => {}
            Some(index) => {
                replaced[index] = true;
                pairs.push((key.into_owned(), params[index].1.to_string()));
            }
            None => pairs.push((key.into_owned(), value.into_owned())),
        }
    }
    for (index, (name, value)) in params.iter().enumerate() {
        if !replaced[index] {
            pairs.push((name.to_string(), value.to_string()));
        }
    }

    url.query_pairs_mut().clear().extend_pairs(&pairs);
}

/// 把表格文件链接转成在线查看链接
///
/// `source` 可以是相对地址，按 `base` 解析成绝对地址后编码进查看器链接。
pub fn office_viewer_url(source: &str, base: &Url) -> Result<String> {
    let absolute = base.join(source)?;
    Ok(format!(
        "{OFFICE_VIEWER}?src={}",
        urlencoding::encode(absolute.as_str())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_non_youtube_urls_alone() {
        let url = "https://player.vimeo.com/video/123";
        assert_eq!(with_hd_video_params(url), url);
        assert_eq!(with_hd_video_params(""), "");
    }

    #[test]
    fn rewrites_youtube_embed_to_nocookie() {
        let rewritten =
            with_hd_video_params("https://www.youtube.com/embed/abc123");
        assert_eq!(
            rewritten,
            "https://www.youtube-nocookie.com/embed/abc123?vq=hd1080&quality=hd1080\
             &hd=1&rel=0&modestbranding=1&showinfo=0&iv_load_policy=3&playsinline=1"
        );
    }

    #[test]
    fn resolves_protocol_relative_embed() {
        let rewritten = with_hd_video_params("//www.youtube.com/embed/xyz");
        assert_eq!(
            rewritten,
            "https://www.youtube-nocookie.com/embed/xyz?vq=hd1080&quality=hd1080\
             &hd=1&rel=0&modestbranding=1&showinfo=0&iv_load_policy=3&playsinline=1"
        );
    }

    #[test]
    fn replaces_existing_params_in_place() {
        let rewritten = with_hd_video_params(
            "https://www.youtube-nocookie.com/embed/x?rel=1&start=30&rel=2",
        );
        let parsed = Url::parse(&rewritten).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("rel".to_string(), "0".to_string()));
        assert_eq!(pairs[1], ("start".to_string(), "30".to_string()));
        assert_eq!(pairs.iter().filter(|(k, _)| k == "rel").count(), 1);
        assert_eq!(pairs.len(), 9);
    }

    #[test]
    fn builds_office_viewer_link_from_relative_source() {
        let base = Url::parse("https://lk.example.org/fächer/index.html").unwrap();
        let link = office_viewer_url("../data/wahl.xlsx", &base).unwrap();
        assert_eq!(
            link,
            "https://view.officeapps.live.com/op/view.aspx?src=\
             https%3A%2F%2Flk.example.org%2Fdata%2Fwahl.xlsx"
        );
    }

    #[test]
    fn keeps_absolute_office_source() {
        let base = Url::parse("https://lk.example.org/").unwrap();
        let link =
            office_viewer_url("https://files.example.org/a b.xlsx", &base)
                .unwrap();
        assert!(link.ends_with("files.example.org%2Fa%2520b.xlsx"));
    }
}

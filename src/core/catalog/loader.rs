//! 清单加载
//!
//! 视频与资料两份清单同时请求，两者都到达后才开始渲染。

use path_absolutize::Absolutize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::models::{Catalog, Material, Video};
use crate::app::error::types::{PortalError, Result};

/// 清单来源：本地路径或 http(s) 地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    /// 解析来源，本地相对路径以 `site_root` 为基准
    pub fn resolve(source: &str, site_root: &Path) -> Result<Self> {
        if source.starts_with("http://") || source.starts_with("https://") {
            return Ok(Source::Remote(source.to_string()));
        }
        let path = Path::new(source).absolutize_from(site_root)?;
        Ok(Source::Local(path.into_owned()))
    }
}

/// 清单加载器
pub struct CatalogLoader {
    site_root: PathBuf,
    client: reqwest::Client,
}

impl CatalogLoader {
    /// 创建新的加载器
    pub fn new(site_root: &Path) -> Result<Self> {
        let site_root = site_root.absolutize()?.into_owned();
        Ok(Self {
            site_root,
            client: reqwest::Client::new(),
        })
    }

    /// 同时加载两份清单，任一失败则整体失败
    pub async fn load(&self, videos: &str, materials: &str) -> Result<Catalog> {
        let videos_source = Source::resolve(videos, &self.site_root)?;
        let materials_source = Source::resolve(materials, &self.site_root)?;

        let (videos, materials) = tokio::try_join!(
            self.fetch::<Vec<Video>>(&videos_source),
            self.fetch::<Vec<Material>>(&materials_source),
        )?;

        info!(
            videos = videos.len(),
            materials = materials.len(),
            "catalog loaded"
        );
        Ok(Catalog { videos, materials })
    }

    /// 在当前线程上运行一次加载
    pub fn load_blocking(&self, videos: &str, materials: &str) -> Result<Catalog> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.load(videos, materials))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        source: &Source,
    ) -> std::result::Result<T, PortalError> {
        match source {
            Source::Local(path) => {
                debug!(path = %path.display(), "reading catalog file");
                let bytes = tokio::fs::read(path).await?;
                Ok(serde_json::from_slice(&bytes)?)
            }
            Source::Remote(url) => {
                debug!(url = %url, "fetching catalog");
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?;
                Ok(response.json::<T>().await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VIDEOS: &str = r#"[
        {"subject": "Mathe", "title": "Mathe-LK", "url": "https://www.youtube.com/embed/m1"},
        {"subject": "Kunst", "title": "Kunst-LK", "description": "Video folgt bald."}
    ]"#;
    const MATERIALS: &str = r#"[
        {"subject": "Mathe", "title": "Klausur", "description": "", "type": "Klausur", "link": "k.pdf"}
    ]"#;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/videos.json"), VIDEOS).unwrap();
        fs::write(dir.path().join("data/materials.json"), MATERIALS).unwrap();
        dir
    }

    #[test]
    fn resolves_sources() {
        let root = Path::new("/srv/site");
        assert_eq!(
            Source::resolve("data/videos.json", root).unwrap(),
            Source::Local(PathBuf::from("/srv/site/data/videos.json"))
        );
        assert_eq!(
            Source::resolve("https://cdn.example.org/v.json", root).unwrap(),
            Source::Remote("https://cdn.example.org/v.json".to_string())
        );
    }

    #[tokio::test]
    async fn loads_both_listings_together() {
        let dir = site();
        let loader = CatalogLoader::new(dir.path()).unwrap();
        let catalog = loader
            .load("data/videos.json", "data/materials.json")
            .await
            .unwrap();
        assert_eq!(catalog.videos.len(), 2);
        assert_eq!(catalog.materials.len(), 1);
    }

    #[tokio::test]
    async fn one_missing_listing_fails_the_join() {
        let dir = site();
        let loader = CatalogLoader::new(dir.path()).unwrap();
        let result = loader.load("data/videos.json", "data/missing.json").await;
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = site();
        fs::write(dir.path().join("data/materials.json"), "{ nope").unwrap();
        let loader = CatalogLoader::new(dir.path()).unwrap();
        let err = loader
            .load_blocking("data/videos.json", "data/materials.json")
            .unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }
}

//! 命令行界面模块

pub mod args;
pub mod pill_viewer;
pub mod reports;

use chrono::{Local, NaiveTime};
use clap::Parser;
use colored::*;
use tracing::warn;
use url::Url;

use crate::app::config::settings::{CatalogSettings, Settings};
use crate::app::error::types::Result;
use crate::core::catalog::links::office_viewer_url;
use crate::core::catalog::loader::CatalogLoader;
use crate::core::catalog::markup::{
    render_overview, render_subject_page, OverviewKind, SubjectPageMarkup,
    OVERVIEW_FALLBACK,
};
use crate::core::grades::chart::{place_grade_points, GradeRange};
use crate::core::timeline::events::{parse_event_date, Timeline, TimelineFile};

use self::args::{CliArgs, Command, SourceArgs};
use self::pill_viewer::{print_pages, PillViewer};

/// 运行命令行界面
pub fn run_cli() -> Result<()> {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} 配置文件无效: {err:#}", "错误".red().bold());
            std::process::exit(1);
        }
    };

    run_command(args.command, &mut settings, !args.no_color)
}

fn run_command(command: Command, settings: &mut Settings, use_color: bool) -> Result<()> {
    match command {
        Command::Pills {
            labels,
            gap,
            min_padding,
            width,
        } => {
            if let Some(gap) = gap {
                settings.pills.gap = gap;
            }
            if let Some(min_padding) = min_padding {
                settings.pills.min_padding = min_padding;
            }

            match width {
                Some(width) => print_pages(labels, width, &settings.pills, use_color),
                None => {
                    if let Some(mut viewer) =
                        PillViewer::new(labels, &settings.pills, &settings.input, use_color)
                    {
                        viewer.run()?;
                    }
                }
            }
            Ok(())
        }

        Command::Timeline {
            events,
            today,
            width,
        } => {
            if !events.exists() {
                eprintln!("{} 文件不存在: {}", "错误".red().bold(), events.display());
                std::process::exit(1);
            }
            let now = match today {
                Some(today) => parse_event_date(&today)?.and_time(NaiveTime::MIN),
                None => Local::now().naive_local(),
            };
            let file = TimelineFile::load(&events)?;
            let timeline = Timeline::build(&file.events, now);
            if timeline.is_empty() {
                warn!("timeline has no valid events");
                return Ok(());
            }
            print!("{}", reports::render_timeline(&timeline, width));
            Ok(())
        }

        Command::Grades { values, min, max } => {
            let defaults = GradeRange {
                min: settings.grades.min,
                max: settings.grades.max,
            };
            let range = GradeRange::parse(min.as_deref(), max.as_deref(), defaults);
            let points: Vec<(Option<&str>, Option<f64>)> =
                values.iter().map(|value| (Some(value.as_str()), None)).collect();
            let placements = place_grade_points(&points, range);
            print!("{}", reports::render_grades(&placements, range, 40));
            Ok(())
        }

        Command::Overview { kind, sources } => {
            let kind: OverviewKind = kind.parse()?;
            let catalog_settings = merge_sources(&settings.catalog, sources);
            let markup = match load_catalog(&catalog_settings) {
                Ok(catalog) => render_overview(kind, &catalog),
                Err(err) => {
                    warn!("catalog unavailable: {err:#}");
                    OVERVIEW_FALLBACK.to_string()
                }
            };
            println!("{markup}");
            Ok(())
        }

        Command::Subject { name, sources } => {
            let catalog_settings = merge_sources(&settings.catalog, sources);
            let page = match load_catalog(&catalog_settings) {
                Ok(catalog) => render_subject_page(&name, &catalog),
                Err(err) => {
                    warn!("catalog unavailable: {err:#}");
                    SubjectPageMarkup::fallback()
                }
            };
            print!("{}", reports::render_subject_markup(&page));
            Ok(())
        }

        Command::OfficeLink { source, base } => {
            let base = Url::parse(&base)?;
            println!("{}", office_viewer_url(&source, &base)?);
            Ok(())
        }
    }
}

/// 命令行参数覆盖配置文件中的清单来源
fn merge_sources(catalog: &CatalogSettings, sources: SourceArgs) -> CatalogSettings {
    CatalogSettings {
        site_root: sources
            .site_root
            .unwrap_or_else(|| catalog.site_root.clone()),
        videos: sources.videos.unwrap_or_else(|| catalog.videos.clone()),
        materials: sources
            .materials
            .unwrap_or_else(|| catalog.materials.clone()),
    }
}

fn load_catalog(
    catalog: &CatalogSettings,
) -> Result<crate::core::catalog::models::Catalog> {
    let loader = CatalogLoader::new(&catalog.site_root)?;
    loader.load_blocking(&catalog.videos, &catalog.materials)
}

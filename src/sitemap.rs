use crate::{fetch::Fetcher, CrawlerError};
use tracing::info;

pub const COURSERA_SITEMAP_URL: &str = "https://www.coursera.org/sitemap~www~courses.xml";

/// Every `<loc>` text in document order, whatever namespace it is declared in.
pub fn parse_locations(xml: &str) -> Result<Vec<String>, CrawlerError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;
    Ok(doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "loc")
        .filter_map(|node| node.text())
        .map(str::trim)
        .filter(|loc| !loc.is_empty())
        .map(ToString::to_string)
        .collect())
}

pub async fn fetch_course_urls<F>(fetcher: &F, sitemap_url: &str) -> Result<Vec<String>, CrawlerError>
where
    F: Fetcher + ?Sized,
{
    let xml = fetcher.fetch_text(sitemap_url).await?;
    let urls = parse_locations(&xml)?;
    info!("Catalog size: {}", urls.len());
    Ok(urls)
}

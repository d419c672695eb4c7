use futures::{stream, StreamExt};
use rand::Rng;
use scraper::Html;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

pub mod config;
pub mod coursera;
pub mod export;
pub mod fetch;
pub mod sampler;
pub mod sitemap;

mod error;

pub use config::{Cli, Config};
pub use coursera::{CourseExtractor, CourseInfoTable, CourseRecord};
pub use error::CrawlerError;
pub use fetch::{Fetcher, HttpFetcher};

/// Samples course urls and turns each into a [`CourseRecord`].
pub struct Collector<'f, F: ?Sized> {
    fetcher: &'f F,
    extractor: CourseExtractor,
    config: Config,
}

impl<'f, F> Collector<'f, F>
where
    F: Fetcher + ?Sized,
{
    pub fn new(fetcher: &'f F, config: Config) -> Self {
        Self {
            fetcher,
            extractor: CourseExtractor,
            config,
        }
    }

    async fn visit(&self, url: &str) -> Result<CourseRecord, CrawlerError> {
        info!("Visit {}", url);
        let html = self.fetcher.fetch_text(url).await?;
        let doc = Html::parse_document(&html);
        let record = self.extractor.extract(url, &doc)?;
        debug!("Extracted {}\n{}", url, record);
        Ok(record)
    }

    /// Records come back in sampling order, also when pages are fetched concurrently.
    ///
    /// A failing course aborts the whole collection unless `skip_failed` is set,
    /// in which case it is logged and left out.
    pub async fn collect<R>(
        &self,
        rng: &mut R,
        candidates: &[String],
    ) -> Result<CourseInfoTable, CrawlerError>
    where
        R: Rng + ?Sized,
    {
        let sampled = sampler::sample(rng, candidates, self.config.sample_size)?;

        let mut visits = stream::iter(&sampled)
            .map(|url| self.visit(url))
            .buffered(self.config.concurrency.get());

        let mut table = CourseInfoTable::new();
        let mut urls = sampled.iter();
        while let Some(result) = visits.next().await {
            let url = urls.next().map(String::as_str).unwrap_or_default();
            match result {
                Ok(record) => table.push(record),
                Err(e) if self.config.skip_failed => warn!("Skip {}: {}", url, e),
                Err(e) => return Err(e),
            }
        }
        Ok(table)
    }
}

/// Catalog index, then sampling, then every sampled course page.
pub async fn collect_courses<F, R>(
    fetcher: &F,
    config: &Config,
    rng: &mut R,
) -> Result<CourseInfoTable, CrawlerError>
where
    F: Fetcher + ?Sized,
    R: Rng + ?Sized,
{
    let candidates = sitemap::fetch_course_urls(fetcher, &config.sitemap_url).await?;
    Collector::new(fetcher, config.clone())
        .collect(rng, &candidates)
        .await
}

/// Collects the sampled courses and writes them to `cli.output`.
///
/// Collection errors are returned as is. A failed export prints
/// `File writing error.` and yields [`ExitCode::FAILURE`].
pub async fn run<F, R>(cli: &Cli, fetcher: &F, rng: &mut R) -> Result<ExitCode, CrawlerError>
where
    F: Fetcher + ?Sized,
    R: Rng + ?Sized,
{
    let config = Config::from(cli);
    let courses = collect_courses(fetcher, &config, rng).await?;
    println!("Courses info obtained.");

    if let Err(e) = export::write_xlsx(&cli.output, &courses) {
        error!("{}", e);
        eprintln!("File writing error.");
        return Ok(ExitCode::FAILURE);
    }

    println!("Done.");
    Ok(ExitCode::SUCCESS)
}

use crate::{coursera::CourseRecord, CrawlerError};
use lazy_regex::regex_find;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

const E: &str = "Invalid selector";
lazy_static! {
    static ref TITLE: Selector = Selector::parse("div.title").expect(E);
    static ref LANGUAGE: Selector = Selector::parse("div.language-info").expect(E);
    static ref LD_JSON: Selector =
        Selector::parse(r#"script[type="application/ld+json"]"#).expect(E);
    static ref WEEK: Selector = Selector::parse("div.week").expect(E);
    static ref RATINGS: Selector = Selector::parse("div.ratings-text").expect(E);
}

fn extract_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Reads the fixed course fields off a course page.
///
/// `name` and `language` are required; everything else degrades to absent
/// (or zero weeks) when the page does not carry it.
#[derive(Debug, Default)]
pub struct CourseExtractor;

impl CourseExtractor {
    pub fn extract(&self, url: &str, doc: &Html) -> Result<CourseRecord, CrawlerError> {
        let name = Self::required(url, doc, &TITLE, "name")?;
        let language = Self::required(url, doc, &LANGUAGE, "language")?;

        Ok(CourseRecord {
            name,
            language,
            start_date: self.start_date(doc),
            week_count: self.week_count(doc),
            rate: self.rate(doc),
        })
    }

    fn required(
        url: &str,
        doc: &Html,
        selector: &Selector,
        field: &'static str,
    ) -> Result<String, CrawlerError> {
        doc.select(selector)
            .next()
            .map(extract_text)
            .ok_or_else(|| CrawlerError::RequiredFieldMissing {
                field,
                url: url.to_string(),
            })
    }

    /// `hasCourseInstance[0].startDate` of the first JSON-LD block.
    ///
    /// Non-string values are kept in their JSON form, `null` counts as absent.
    pub fn start_date(&self, doc: &Html) -> Option<String> {
        let script = doc.select(&LD_JSON).next()?;
        let json: Value = serde_json::from_str(&script.text().collect::<String>()).ok()?;
        match json.get("hasCourseInstance")?.get(0)?.get("startDate")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn week_count(&self, doc: &Html) -> usize {
        doc.select(&WEEK).count()
    }

    pub fn rate(&self, doc: &Html) -> Option<String> {
        let ratings = doc.select(&RATINGS).next()?;
        let text = ratings.text().collect::<String>();
        regex_find!(r"\d(\.\d)*", &text).map(ToString::to_string)
    }
}

//! Sitemap generation.

use serde::Serialize;

use crate::deck::Deck;
use crate::routes;

/// How often crawlers should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Root page first, then one entry per card.
pub fn entries(base_url: &str, deck: &Deck) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(deck.len() + 1);
    entries.push(SitemapEntry {
        url: routes::root_url(base_url),
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    });
    entries.extend(deck.iter().map(|card| SitemapEntry {
        url: routes::card_url(base_url, card),
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    }));
    entries
}

/// Render entries as sitemap XML. `last_modified` is a W3C date.
pub fn to_xml(entries: &[SitemapEntry], last_modified: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.url)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape(last_modified)));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

//! Card descriptor model.

use serde::{Deserialize, Serialize};

/// Base URL for the documentation repository.
pub const REPO_BASE_URL: &str = "https://github.com/TminusZ/zenon-developer-commons/blob/main";

/// Base URL for the gitbook rendering of the same documentation.
pub const GITBOOK_BASE_URL: &str =
    "https://zenon-developer-commons.gitbook.io/zenon-developer-commons-docs";

/// How a card is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    /// Title, subtitle, description and key points.
    Standard,
    /// Centered quotation, title and subtitle only.
    Quote,
    /// Clickable image linking out.
    Image,
    /// Embedded video player.
    Video,
}

/// Media attached to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMedia<'a> {
    /// Embeddable player URL.
    Video { embed_url: &'a str },
    /// Image source with an optional outbound link.
    Image { src: &'a str, link: Option<&'a str> },
}

/// Which documentation link a reader followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    Repository,
    Gitbook,
}

impl LinkTarget {
    /// Name used in analytics properties.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::Repository => "repository",
            LinkTarget::Gitbook => "gitbook",
        }
    }
}

/// One full-viewport card in the landing deck.
///
/// Field names serialize in camelCase so that decks authored for the web
/// front-end load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    /// Unique identifier, also the URL path segment
    pub id: String,

    /// Headline
    pub title: String,

    /// Secondary headline
    pub subtitle: String,

    /// Body text (may be empty)
    #[serde(default)]
    pub description: String,

    /// Bullet points under the description
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Path inside the documentation repository
    #[serde(default)]
    pub repo_path: String,

    /// Path inside the gitbook (empty means the gitbook root)
    #[serde(default)]
    pub gitbook_path: String,

    /// Decorative glyph
    #[serde(default)]
    pub icon: String,

    /// Video player URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_embed: Option<String>,

    /// Image source for image cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,

    /// Outbound link for image cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,

    /// Background colour override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,

    #[serde(default)]
    pub is_quote_card: bool,

    #[serde(default)]
    pub is_image_card: bool,
}

impl CardDescriptor {
    /// Create a standard card with the given id and headlines.
    pub fn new(id: impl Into<String>, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: String::new(),
            key_points: Vec::new(),
            repo_path: String::new(),
            gitbook_path: String::new(),
            icon: String::new(),
            video_embed: None,
            image_src: None,
            image_link: None,
            bg_color: None,
            is_quote_card: false,
            is_image_card: false,
        }
    }

    /// Set the body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the bullet points.
    #[must_use]
    pub fn with_key_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_points = points.into_iter().map(Into::into).collect();
        self
    }

    /// Set the documentation paths.
    #[must_use]
    pub fn with_docs(mut self, repo_path: impl Into<String>, gitbook_path: impl Into<String>) -> Self {
        self.repo_path = repo_path.into();
        self.gitbook_path = gitbook_path.into();
        self
    }

    /// Set the decorative glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Attach a video player.
    #[must_use]
    pub fn with_video(mut self, embed_url: impl Into<String>) -> Self {
        self.video_embed = Some(embed_url.into());
        self
    }

    /// Turn this into an image card.
    #[must_use]
    pub fn with_image(mut self, src: impl Into<String>, link: Option<String>) -> Self {
        self.is_image_card = true;
        self.image_src = Some(src.into());
        self.image_link = link;
        self
    }

    /// Turn this into a quote card.
    #[must_use]
    pub fn as_quote(mut self) -> Self {
        self.is_quote_card = true;
        self
    }

    /// Set the background colour.
    #[must_use]
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    /// Layout variant. Quote wins over image, image over video.
    ///
    /// An image card without an image source falls through to the next
    /// variant.
    pub fn variant(&self) -> CardVariant {
        if self.is_quote_card {
            CardVariant::Quote
        } else if self.is_image_card && self.image_src.is_some() {
            CardVariant::Image
        } else if self.video_embed.is_some() {
            CardVariant::Video
        } else {
            CardVariant::Standard
        }
    }

    /// Media matching the layout variant, if any.
    pub fn media(&self) -> Option<CardMedia<'_>> {
        match self.variant() {
            CardVariant::Image => self.image_src.as_deref().map(|src| CardMedia::Image {
                src,
                link: self.image_link.as_deref(),
            }),
            CardVariant::Video => self
                .video_embed
                .as_deref()
                .map(|embed_url| CardMedia::Video { embed_url }),
            CardVariant::Standard | CardVariant::Quote => None,
        }
    }

    /// Link into the documentation repository.
    pub fn repo_url(&self) -> String {
        format!("{}/{}", REPO_BASE_URL, self.repo_path)
    }

    /// Link into the gitbook, or the gitbook root when no path is set.
    pub fn gitbook_url(&self) -> String {
        if self.gitbook_path.is_empty() {
            GITBOOK_BASE_URL.to_string()
        } else {
            format!("{}/{}", GITBOOK_BASE_URL, self.gitbook_path)
        }
    }

    /// URL for a documentation link target.
    pub fn link_url(&self, target: LinkTarget) -> String {
        match target {
            LinkTarget::Repository => self.repo_url(),
            LinkTarget::Gitbook => self.gitbook_url(),
        }
    }

    /// Description for previews, falling back to the subtitle.
    pub fn summary(&self) -> &str {
        if self.description.is_empty() {
            &self.subtitle
        } else {
            &self.description
        }
    }
}

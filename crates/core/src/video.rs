//! Google video sitemap entry model (`video:` extension).
//!
//! A [`VideoEntry`] holds the required and optional attributes of one video
//! attached to a sitemap URL. Validation happens at assignment time, so an
//! entry that exists is always renderable by [`crate::render::render`].
//!
//! Field constraints follow Google's video sitemap documentation:
//! <https://developers.google.com/search/docs/crawling-indexing/sitemaps/video-sitemaps>

use std::fmt;

use crate::error::CoreError;
use crate::parameters::VideoParameters;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Namespace bound to the `video:` prefix by the enclosing `<urlset>`.
pub const VIDEO_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-video/1.1";

pub const PLAYER_LOC_ALLOW_EMBED_YES: &str = "yes";
pub const PLAYER_LOC_ALLOW_EMBED_NO: &str = "no";
pub const FAMILY_FRIENDLY_YES: &str = "yes";
pub const FAMILY_FRIENDLY_NO: &str = "no";
pub const RELATIONSHIP_ALLOW: &str = "allow";
pub const RELATIONSHIP_DENY: &str = "deny";
pub const PRICE_TYPE_RENT: &str = "rent";
pub const PRICE_TYPE_OWN: &str = "own";
pub const PRICE_RESOLUTION_HD: &str = "HD";
pub const PRICE_RESOLUTION_SD: &str = "SD";
pub const REQUIRES_SUBSCRIPTION_YES: &str = "yes";
pub const REQUIRES_SUBSCRIPTION_NO: &str = "no";
pub const PLATFORM_WEB: &str = "web";
pub const PLATFORM_MOBILE: &str = "mobile";
pub const PLATFORM_TV: &str = "tv";
pub const PLATFORM_RELATIONSHIP_ALLOW: &str = "allow";
pub const PLATFORM_RELATIONSHIP_DENY: &str = "deny";
pub const LIVE_YES: &str = "yes";
pub const LIVE_NO: &str = "no";

/// Maximum number of `<video:tag>` elements per video.
pub const TAG_ITEMS_LIMIT: usize = 32;

/// Longest accepted duration, in seconds (8 hours).
pub const MAX_DURATION_SECONDS: i64 = 28_800;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

/// Longest accepted category, in characters.
pub const MAX_CATEGORY_LENGTH: usize = 256;

// ---------------------------------------------------------------------------
// Yes / no flag
// ---------------------------------------------------------------------------

/// Value of the validated yes/no fields (`allow_embed`, `family_friendly`,
/// `requires_subscription`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Parse `"yes"` or `"no"`, reporting failures against `field`.
    pub fn parse(field: &'static str, s: &str) -> Result<Self, CoreError> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(CoreError::validation(field, s)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// One `<video:price>` entry. Currency, type and resolution are stored as
/// given; none of them is checked against its enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub amount: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// `rent` or `own`.
    pub price_type: Option<String>,
    /// `HD` or `SD`.
    pub resolution: Option<String>,
}

// ---------------------------------------------------------------------------
// Video entry
// ---------------------------------------------------------------------------

/// One video attached to a sitemap URL.
///
/// [`VideoEntry::new`] is the only constructor, so every entry carries a
/// content or player location from the start.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoEntry {
    thumbnail_location: String,
    title: String,
    description: String,

    content_location: Option<String>,
    player_location: Option<String>,
    player_location_allow_embed: Option<YesNo>,
    /// Flashvar string for the embed tag, e.g. `ap=1`.
    player_location_autoplay: Option<String>,
    duration: Option<i64>,
    expiration_date: Option<Timestamp>,
    rating: Option<f64>,
    view_count: Option<u64>,
    publication_date: Option<Timestamp>,
    family_friendly: Option<YesNo>,
    category: Option<String>,
    restriction_allow: Vec<String>,
    restriction_deny: Vec<String>,
    gallery_location: Option<String>,
    gallery_location_title: Option<String>,
    requires_subscription: Option<YesNo>,
    uploader: Option<String>,
    uploader_info: Option<String>,
    platforms: Vec<String>,
    platform_relationship: Option<String>,
    live: Option<String>,
    prices: Vec<Price>,
    tags: Vec<String>,
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl VideoEntry {
    fn empty() -> Self {
        Self {
            thumbnail_location: String::new(),
            title: String::new(),
            description: String::new(),
            content_location: None,
            player_location: None,
            player_location_allow_embed: None,
            player_location_autoplay: None,
            duration: None,
            expiration_date: None,
            rating: None,
            view_count: None,
            publication_date: None,
            family_friendly: None,
            category: None,
            restriction_allow: Vec::new(),
            restriction_deny: Vec::new(),
            gallery_location: None,
            gallery_location_title: None,
            requires_subscription: None,
            uploader: None,
            uploader_info: None,
            platforms: Vec::new(),
            platform_relationship: None,
            live: None,
            prices: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Create a video entry from its required fields and optional parameters.
    ///
    /// Every supplied parameter goes through its setter, so the same
    /// validation applies as for direct setter calls. Fails when neither a
    /// content location nor a player location is given, or when platforms
    /// are given without a platform relationship.
    pub fn new(
        thumbnail_location: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        parameters: VideoParameters,
    ) -> Result<Self, CoreError> {
        let mut entry = Self::empty();
        parameters.apply_to(&mut entry)?;

        entry
            .set_thumbnail_location(thumbnail_location)
            .set_title(title)
            .set_description(description);

        if !is_present(&entry.content_location) && !is_present(&entry.player_location) {
            return Err(CoreError::validation(
                "content_location or player_location",
                "",
            ));
        }
        entry.check_platform_relationship()?;

        Ok(entry)
    }

    fn check_platform_relationship(&self) -> Result<(), CoreError> {
        if !self.platforms.is_empty() && !is_present(&self.platform_relationship) {
            return Err(CoreError::validation(
                "platform_relationship",
                self.platforms.join(" "),
            ));
        }
        Ok(())
    }

    /// Render this entry as a `<video:video>` fragment.
    pub fn to_xml(&self) -> String {
        crate::render::render(self)
    }

    // -- required fields ------------------------------------------------------

    pub fn set_thumbnail_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.thumbnail_location = location.into();
        self
    }

    pub fn thumbnail_location(&self) -> &str {
        &self.thumbnail_location
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // -- locations ------------------------------------------------------------

    pub fn set_content_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.content_location = Some(location.into());
        self
    }

    pub fn content_location(&self) -> Option<&str> {
        self.content_location.as_deref()
    }

    pub fn set_player_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.player_location = Some(location.into());
        self
    }

    pub fn player_location(&self) -> Option<&str> {
        self.player_location.as_deref()
    }

    /// Whether Google may embed the video in search results (`yes` / `no`).
    pub fn set_player_location_allow_embed(
        &mut self,
        embed: &str,
    ) -> Result<&mut Self, CoreError> {
        self.player_location_allow_embed =
            Some(YesNo::parse("player_location_allow_embed", embed)?);
        Ok(self)
    }

    pub fn player_location_allow_embed(&self) -> Option<YesNo> {
        self.player_location_allow_embed
    }

    pub fn set_player_location_autoplay(&mut self, autoplay: impl Into<String>) -> &mut Self {
        self.player_location_autoplay = Some(autoplay.into());
        self
    }

    pub fn player_location_autoplay(&self) -> Option<&str> {
        self.player_location_autoplay.as_deref()
    }

    pub fn set_gallery_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.gallery_location = Some(location.into());
        self
    }

    pub fn gallery_location(&self) -> Option<&str> {
        self.gallery_location.as_deref()
    }

    pub fn set_gallery_location_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.gallery_location_title = Some(title.into());
        self
    }

    pub fn gallery_location_title(&self) -> Option<&str> {
        self.gallery_location_title.as_deref()
    }

    // -- scalar metadata ------------------------------------------------------

    /// Duration in seconds, between 0 and [`MAX_DURATION_SECONDS`] inclusive.
    pub fn set_duration(&mut self, duration: i64) -> Result<&mut Self, CoreError> {
        if !(0..=MAX_DURATION_SECONDS).contains(&duration) {
            return Err(CoreError::validation("duration", duration));
        }
        self.duration = Some(duration);
        Ok(self)
    }

    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    /// Rating between 0.0 and [`MAX_RATING`] inclusive.
    pub fn set_rating(&mut self, rating: f64) -> Result<&mut Self, CoreError> {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(CoreError::validation("rating", rating));
        }
        self.rating = Some(rating);
        Ok(self)
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn set_view_count(&mut self, view_count: u64) -> &mut Self {
        self.view_count = Some(view_count);
        self
    }

    pub fn view_count(&self) -> Option<u64> {
        self.view_count
    }

    pub fn set_expiration_date(&mut self, date: Timestamp) -> &mut Self {
        self.expiration_date = Some(date);
        self
    }

    pub fn expiration_date(&self) -> Option<Timestamp> {
        self.expiration_date
    }

    pub fn set_publication_date(&mut self, date: Timestamp) -> &mut Self {
        self.publication_date = Some(date);
        self
    }

    pub fn publication_date(&self) -> Option<Timestamp> {
        self.publication_date
    }

    /// `None` or an empty string selects `yes`.
    pub fn set_family_friendly(
        &mut self,
        family_friendly: Option<&str>,
    ) -> Result<&mut Self, CoreError> {
        let value = family_friendly
            .filter(|v| !v.is_empty())
            .unwrap_or(FAMILY_FRIENDLY_YES);
        self.family_friendly = Some(YesNo::parse("family_friendly", value)?);
        Ok(self)
    }

    pub fn family_friendly(&self) -> Option<YesNo> {
        self.family_friendly
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> Result<&mut Self, CoreError> {
        let category = category.into();
        if category.chars().count() > MAX_CATEGORY_LENGTH {
            return Err(CoreError::validation("category", category));
        }
        self.category = Some(category);
        Ok(self)
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_requires_subscription(&mut self, requires: &str) -> Result<&mut Self, CoreError> {
        self.requires_subscription = Some(YesNo::parse("requires_subscription", requires)?);
        Ok(self)
    }

    pub fn requires_subscription(&self) -> Option<YesNo> {
        self.requires_subscription
    }

    pub fn set_uploader(&mut self, uploader: impl Into<String>) -> &mut Self {
        self.uploader = Some(uploader.into());
        self
    }

    pub fn uploader(&self) -> Option<&str> {
        self.uploader.as_deref()
    }

    pub fn set_uploader_info(&mut self, info: impl Into<String>) -> &mut Self {
        self.uploader_info = Some(info.into());
        self
    }

    pub fn uploader_info(&self) -> Option<&str> {
        self.uploader_info.as_deref()
    }

    /// Accepted as given; `yes` / `no` is not enforced for this field.
    pub fn set_live(&mut self, live: impl Into<String>) -> &mut Self {
        self.live = Some(live.into());
        self
    }

    pub fn live(&self) -> Option<&str> {
        self.live.as_deref()
    }

    // -- restrictions ---------------------------------------------------------

    /// Replace the allowed country codes. Codes are not checked.
    pub fn set_restriction_allow(&mut self, countries: Vec<String>) -> &mut Self {
        self.restriction_allow = countries;
        self
    }

    pub fn restriction_allow(&self) -> &[String] {
        &self.restriction_allow
    }

    /// Replace the denied country codes. Codes are not checked.
    pub fn set_restriction_deny(&mut self, countries: Vec<String>) -> &mut Self {
        self.restriction_deny = countries;
        self
    }

    pub fn restriction_deny(&self) -> &[String] {
        &self.restriction_deny
    }

    // -- platforms ------------------------------------------------------------

    /// Replace the platform set. Names are not checked against
    /// `web` / `mobile` / `tv`.
    ///
    /// Precondition: a non-empty set requires a non-empty platform
    /// relationship to be set beforehand with
    /// [`set_platform_relationship`](Self::set_platform_relationship).
    /// Otherwise this fails with [`CoreError::Validation`] and the previous
    /// set is kept. An empty set is always accepted.
    pub fn set_platforms(&mut self, platforms: Vec<String>) -> Result<&mut Self, CoreError> {
        let previous = std::mem::replace(&mut self.platforms, platforms);
        if let Err(e) = self.check_platform_relationship() {
            self.platforms = previous;
            return Err(e);
        }
        Ok(self)
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    /// Set `allow` or `deny` for the platform set. The value is not checked
    /// against the enumeration, but it cannot be emptied while platforms are
    /// set; a rejected value keeps the previous one.
    pub fn set_platform_relationship(
        &mut self,
        relationship: impl Into<String>,
    ) -> Result<&mut Self, CoreError> {
        let previous = self.platform_relationship.replace(relationship.into());
        if let Err(e) = self.check_platform_relationship() {
            self.platform_relationship = previous;
            return Err(e);
        }
        Ok(self)
    }

    pub fn platform_relationship(&self) -> Option<&str> {
        self.platform_relationship.as_deref()
    }

    // -- repeatable elements --------------------------------------------------

    /// Append a price. Nothing about the price is validated.
    pub fn add_price(
        &mut self,
        amount: f64,
        currency: impl Into<String>,
        price_type: Option<&str>,
        resolution: Option<&str>,
    ) -> &mut Self {
        self.prices.push(Price {
            amount,
            currency: currency.into(),
            price_type: price_type.map(str::to_owned),
            resolution: resolution.map(str::to_owned),
        });
        self
    }

    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    /// Append a tag. Fails once [`TAG_ITEMS_LIMIT`] tags are present.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> Result<&mut Self, CoreError> {
        if self.tags.len() >= TAG_ITEMS_LIMIT {
            tracing::debug!(limit = TAG_ITEMS_LIMIT, "Rejected video tag");
            return Err(CoreError::TagLimitExceeded {
                limit: TAG_ITEMS_LIMIT,
            });
        }
        self.tags.push(tag.into());
        Ok(self)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn player_params() -> VideoParameters {
        VideoParameters {
            player_location: Some("http://x/player".into()),
            ..Default::default()
        }
    }

    fn entry() -> VideoEntry {
        VideoEntry::new("http://x/t.jpg", "T", "D", player_params()).unwrap()
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn new_requires_a_location() {
        let err = VideoEntry::new("t", "T", "D", VideoParameters::default()).unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
    }

    #[test]
    fn new_treats_empty_location_as_missing() {
        let params = VideoParameters {
            content_location: Some(String::new()),
            ..Default::default()
        };
        assert!(VideoEntry::new("t", "T", "D", params).is_err());
    }

    #[test]
    fn new_accepts_content_location_only() {
        let params = VideoParameters {
            content_location: Some("http://x/v.mp4".into()),
            ..Default::default()
        };
        let entry = VideoEntry::new("t", "T", "D", params).unwrap();
        assert_eq!(entry.content_location(), Some("http://x/v.mp4"));
        assert_eq!(entry.player_location(), None);
    }

    #[test]
    fn new_sets_required_fields() {
        let entry = entry();
        assert_eq!(entry.thumbnail_location(), "http://x/t.jpg");
        assert_eq!(entry.title(), "T");
        assert_eq!(entry.description(), "D");
    }

    // -- yes / no -------------------------------------------------------------

    #[test]
    fn yes_no_parse() {
        assert_eq!(YesNo::parse("f", "yes").unwrap(), YesNo::Yes);
        assert_eq!(YesNo::parse("f", "no").unwrap(), YesNo::No);
        assert!(YesNo::parse("f", "YES").is_err());
    }

    #[test]
    fn allow_embed_rejects_other_values() {
        let mut entry = entry();
        assert!(entry.set_player_location_allow_embed("maybe").is_err());
        assert_eq!(entry.player_location_allow_embed(), None);
        entry.set_player_location_allow_embed("no").unwrap();
        assert_eq!(entry.player_location_allow_embed(), Some(YesNo::No));
    }

    #[test]
    fn family_friendly_defaults_to_yes() {
        let mut entry = entry();
        entry.set_family_friendly(None).unwrap();
        assert_eq!(entry.family_friendly(), Some(YesNo::Yes));
        entry.set_family_friendly(Some("no")).unwrap();
        assert_eq!(entry.family_friendly(), Some(YesNo::No));
        entry.set_family_friendly(Some("")).unwrap();
        assert_eq!(entry.family_friendly(), Some(YesNo::Yes));
    }

    #[test]
    fn family_friendly_rejects_other_values() {
        assert!(entry().set_family_friendly(Some("kids")).is_err());
    }

    #[test]
    fn requires_subscription_validated() {
        let mut entry = entry();
        assert!(entry.set_requires_subscription("sometimes").is_err());
        entry.set_requires_subscription("yes").unwrap();
        assert_eq!(entry.requires_subscription(), Some(YesNo::Yes));
    }

    #[test]
    fn live_accepts_any_string() {
        let mut entry = entry();
        entry.set_live("perhaps");
        assert_eq!(entry.live(), Some("perhaps"));
    }

    // -- ranges ---------------------------------------------------------------

    #[test]
    fn duration_bounds() {
        let mut entry = entry();
        assert!(entry.set_duration(0).is_ok());
        assert!(entry.set_duration(MAX_DURATION_SECONDS).is_ok());
        assert!(entry.set_duration(-1).is_err());
        assert!(entry.set_duration(MAX_DURATION_SECONDS + 1).is_err());
        assert_eq!(entry.duration(), Some(MAX_DURATION_SECONDS));
    }

    #[test]
    fn rating_bounds() {
        let mut entry = entry();
        assert!(entry.set_rating(0.0).is_ok());
        assert!(entry.set_rating(5.0).is_ok());
        assert!(entry.set_rating(-0.1).is_err());
        assert!(entry.set_rating(5.1).is_err());
        assert!(entry.set_rating(f64::NAN).is_err());
        assert_eq!(entry.rating(), Some(5.0));
    }

    #[test]
    fn category_length_limit() {
        let mut entry = entry();
        assert!(entry.set_category("a".repeat(MAX_CATEGORY_LENGTH)).is_ok());
        assert!(entry.set_category("a".repeat(MAX_CATEGORY_LENGTH + 1)).is_err());
        assert_eq!(entry.category().map(str::len), Some(MAX_CATEGORY_LENGTH));
    }

    #[test]
    fn category_counts_characters_not_bytes() {
        assert!(entry().set_category("é".repeat(MAX_CATEGORY_LENGTH)).is_ok());
    }

    // -- platforms ------------------------------------------------------------

    #[test]
    fn platforms_need_relationship() {
        let mut entry = entry();
        assert!(entry.set_platforms(vec![PLATFORM_WEB.into()]).is_err());
        assert!(entry.platforms().is_empty());

        entry
            .set_platform_relationship(PLATFORM_RELATIONSHIP_ALLOW)
            .unwrap();
        entry.set_platforms(vec![PLATFORM_WEB.into(), PLATFORM_TV.into()]).unwrap();
        assert_eq!(entry.platforms(), ["web", "tv"]);
    }

    #[test]
    fn empty_platforms_need_no_relationship() {
        assert!(entry().set_platforms(Vec::new()).is_ok());
    }

    #[test]
    fn platform_names_not_checked() {
        let mut entry = entry();
        entry.set_platform_relationship("deny").unwrap();
        assert!(entry.set_platforms(vec!["console".into()]).is_ok());
    }

    #[test]
    fn rejected_platforms_render_nothing() {
        let mut entry = entry();
        assert!(entry.set_platforms(vec![PLATFORM_TV.into()]).is_err());
        assert!(!entry.to_xml().contains("<video:platform"));
    }

    #[test]
    fn rejected_platforms_keep_previous_set() {
        let mut entry = entry();
        entry.set_platform_relationship("allow").unwrap();
        entry.set_platforms(vec![PLATFORM_WEB.into()]).unwrap();

        // Only reachable by clearing the field directly.
        entry.platform_relationship = None;
        assert!(entry.set_platforms(vec![PLATFORM_TV.into()]).is_err());
        assert_eq!(entry.platforms(), ["web"]);
    }

    #[test]
    fn platforms_can_be_cleared() {
        let mut entry = entry();
        entry.set_platform_relationship("allow").unwrap();
        entry.set_platforms(vec![PLATFORM_WEB.into()]).unwrap();
        entry.set_platforms(Vec::new()).unwrap();
        assert!(entry.platforms().is_empty());
        assert!(!entry.to_xml().contains("<video:platform"));
    }

    #[test]
    fn relationship_cannot_be_emptied_while_platforms_set() {
        let mut entry = entry();
        entry.set_platform_relationship("allow").unwrap();
        entry.set_platforms(vec![PLATFORM_WEB.into()]).unwrap();

        let err = entry.set_platform_relationship("").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation { field: "platform_relationship", .. }
        ));
        assert_eq!(entry.platform_relationship(), Some("allow"));
        assert!(entry
            .to_xml()
            .contains(r#"<video:platform relationship="allow">web</video:platform>"#));
    }

    #[test]
    fn relationship_may_be_empty_without_platforms() {
        let mut entry = entry();
        entry.set_platform_relationship("").unwrap();
        assert_eq!(entry.platform_relationship(), Some(""));
    }

    #[test]
    fn constructed_entry_has_a_location() {
        let entry = entry();
        assert!(entry.content_location().is_some() || entry.player_location().is_some());
    }

    // -- repeatable elements --------------------------------------------------

    #[test]
    fn tags_capped() {
        let mut entry = entry();
        for i in 0..TAG_ITEMS_LIMIT {
            entry.add_tag(format!("tag{i}")).unwrap();
        }
        let err = entry.add_tag("overflow").unwrap_err();
        assert!(matches!(err, CoreError::TagLimitExceeded { limit: 32 }));
        assert_eq!(entry.tags().len(), TAG_ITEMS_LIMIT);
        assert_eq!(entry.tags()[0], "tag0");
        assert_eq!(entry.tags()[31], "tag31");
    }

    #[test]
    fn prices_keep_insertion_order() {
        let mut entry = entry();
        entry
            .add_price(10.0, "USD", Some(PRICE_TYPE_RENT), Some(PRICE_RESOLUTION_HD))
            .add_price(5.0, "EUR", None, None);
        let prices = entry.prices();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].currency, "USD");
        assert_eq!(prices[0].price_type.as_deref(), Some("rent"));
        assert_eq!(prices[1].resolution, None);
    }

    #[test]
    fn restrictions_replace_whole_list() {
        let mut entry = entry();
        entry
            .set_restriction_allow(vec!["FR".into(), "DE".into()])
            .set_restriction_allow(vec!["US".into()])
            .set_restriction_deny(vec!["not-a-code".into()]);
        assert_eq!(entry.restriction_allow(), ["US"]);
        assert_eq!(entry.restriction_deny(), ["not-a-code"]);
    }

    #[test]
    fn failed_setter_keeps_other_fields() {
        let mut entry = entry();
        entry.set_duration(60).unwrap();
        assert!(entry.set_rating(9.0).is_err());
        assert_eq!(entry.duration(), Some(60));
        assert_eq!(entry.rating(), None);
    }
}

//! Optional parameters accepted when constructing a [`VideoEntry`].
//!
//! Field names match the keys of the sitemap configuration map
//! (`content_location`, `player_location`, ...). Unknown keys in JSON input
//! are ignored.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::video::VideoEntry;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoParameters {
    pub content_location: Option<String>,
    pub player_location: Option<String>,
    pub player_location_allow_embed: Option<String>,
    pub player_location_autoplay: Option<String>,
    pub duration: Option<i64>,
    pub expiration_date: Option<Timestamp>,
    pub rating: Option<f64>,
    pub view_count: Option<u64>,
    pub publication_date: Option<Timestamp>,
    /// `Some(None)` requests the `yes` default; `None` leaves the field unset.
    #[serde(deserialize_with = "present")]
    pub family_friendly: Option<Option<String>>,
    pub category: Option<String>,
    pub restriction_allow: Option<Vec<String>>,
    pub restriction_deny: Option<Vec<String>>,
    pub gallery_location: Option<String>,
    pub gallery_location_title: Option<String>,
    pub requires_subscription: Option<String>,
    pub uploader: Option<String>,
    pub uploader_info: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub platform_relationship: Option<String>,
    pub live: Option<String>,
}

/// Distinguish an explicit `null` from an absent key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl VideoParameters {
    /// Decode parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Route every supplied parameter through the matching setter.
    ///
    /// Stops at the first rejected value; earlier assignments stay applied.
    pub(crate) fn apply_to(self, entry: &mut VideoEntry) -> Result<(), CoreError> {
        if let Some(v) = self.content_location {
            entry.set_content_location(v);
        }
        if let Some(v) = self.player_location {
            entry.set_player_location(v);
        }
        if let Some(v) = self.player_location_allow_embed {
            entry.set_player_location_allow_embed(&v)?;
        }
        if let Some(v) = self.player_location_autoplay {
            entry.set_player_location_autoplay(v);
        }
        if let Some(v) = self.duration {
            entry.set_duration(v)?;
        }
        if let Some(v) = self.expiration_date {
            entry.set_expiration_date(v);
        }
        if let Some(v) = self.rating {
            entry.set_rating(v)?;
        }
        if let Some(v) = self.view_count {
            entry.set_view_count(v);
        }
        if let Some(v) = self.publication_date {
            entry.set_publication_date(v);
        }
        if let Some(v) = self.family_friendly {
            entry.set_family_friendly(v.as_deref())?;
        }
        if let Some(v) = self.category {
            entry.set_category(v)?;
        }
        if let Some(v) = self.restriction_allow {
            entry.set_restriction_allow(v);
        }
        if let Some(v) = self.restriction_deny {
            entry.set_restriction_deny(v);
        }
        if let Some(v) = self.gallery_location {
            entry.set_gallery_location(v);
        }
        if let Some(v) = self.gallery_location_title {
            entry.set_gallery_location_title(v);
        }
        if let Some(v) = self.requires_subscription {
            entry.set_requires_subscription(&v)?;
        }
        if let Some(v) = self.uploader {
            entry.set_uploader(v);
        }
        if let Some(v) = self.uploader_info {
            entry.set_uploader_info(v);
        }
        // The relationship must be in place before a non-empty platform set.
        if let Some(v) = self.platform_relationship {
            entry.set_platform_relationship(v)?;
        }
        if let Some(v) = self.platforms {
            entry.set_platforms(v)?;
        }
        if let Some(v) = self.live {
            entry.set_live(v);
        }
        Ok(())
    }
}

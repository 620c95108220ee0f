//! `<video:video>` fragment rendering.
//!
//! Element order is fixed: required fields, simple optional fields, dates,
//! player location, restrictions, gallery, tags, prices, uploader, platform.
//! Optional values that are empty or zero are omitted.

use chrono::SecondsFormat;

use crate::encoding::{attributes, cdata, encode};
use crate::types::Timestamp;
use crate::video::VideoEntry;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn element(xml: &mut String, name: &str, attrs: &str, text: &str) {
    xml.push_str("<video:");
    xml.push_str(name);
    xml.push_str(attrs);
    xml.push('>');
    xml.push_str(text);
    xml.push_str("</video:");
    xml.push_str(name);
    xml.push('>');
}

fn format_date(date: &Timestamp) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Render a validated entry as a `<video:video>` fragment.
///
/// The `video:` prefix is expected to be bound by the enclosing document.
pub fn render(entry: &VideoEntry) -> String {
    let mut xml = String::from("<video:video>");

    // Required
    element(&mut xml, "thumbnail_loc", "", &encode(entry.thumbnail_location()));
    element(&mut xml, "title", "", &cdata(entry.title()));
    element(&mut xml, "description", "", &cdata(entry.description()));

    // Simple optional
    if let Some(category) = non_empty(entry.category()) {
        element(&mut xml, "category", "", &cdata(category));
    }
    if let Some(location) = non_empty(entry.content_location()) {
        element(&mut xml, "content_loc", "", &encode(location));
    }
    if let Some(duration) = entry.duration().filter(|d| *d != 0) {
        element(&mut xml, "duration", "", &duration.to_string());
    }
    if let Some(rating) = entry.rating().filter(|r| *r != 0.0) {
        element(&mut xml, "rating", "", &rating.to_string());
    }
    if let Some(view_count) = entry.view_count().filter(|c| *c != 0) {
        element(&mut xml, "view_count", "", &view_count.to_string());
    }
    if let Some(family_friendly) = entry.family_friendly() {
        element(&mut xml, "family_friendly", "", family_friendly.as_str());
    }
    if let Some(requires) = entry.requires_subscription() {
        element(&mut xml, "requires_subscription", "", requires.as_str());
    }
    if let Some(live) = non_empty(entry.live()) {
        element(&mut xml, "live", "", live);
    }

    // Dates
    if let Some(date) = entry.expiration_date() {
        element(&mut xml, "expiration_date", "", &format_date(&date));
    }
    if let Some(date) = entry.publication_date() {
        element(&mut xml, "publication_date", "", &format_date(&date));
    }

    // Player
    if let Some(location) = non_empty(entry.player_location()) {
        let mut attrs = Vec::new();
        if let Some(embed) = entry.player_location_allow_embed() {
            attrs.push(("allow_embed", encode(embed.as_str())));
        }
        if let Some(autoplay) = non_empty(entry.player_location_autoplay()) {
            attrs.push(("autoplay", encode(autoplay)));
        }
        element(&mut xml, "player_loc", &attributes(&attrs), &encode(location));
    }

    // Restrictions
    if !entry.restriction_allow().is_empty() {
        element(
            &mut xml,
            "restriction",
            r#" relationship="allow""#,
            &entry.restriction_allow().join(" "),
        );
    }
    if !entry.restriction_deny().is_empty() {
        element(
            &mut xml,
            "restriction",
            r#" relationship="deny""#,
            &entry.restriction_deny().join(" "),
        );
    }

    // Gallery
    if let Some(location) = non_empty(entry.gallery_location()) {
        let mut attrs = Vec::new();
        if let Some(title) = non_empty(entry.gallery_location_title()) {
            attrs.push(("title", encode(title)));
        }
        element(&mut xml, "gallery_loc", &attributes(&attrs), &encode(location));
    }

    for tag in entry.tags() {
        element(&mut xml, "tag", "", &cdata(tag));
    }

    for price in entry.prices() {
        let attrs: Vec<(&str, String)> = [
            ("currency", Some(price.currency.as_str())),
            ("type", price.price_type.as_deref()),
            ("resolution", price.resolution.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| non_empty(value).map(|v| (name, v.to_owned())))
        .collect();
        element(&mut xml, "price", &attributes(&attrs), &price.amount.to_string());
    }

    // Uploader text and info are written as stored, without encoding.
    if let Some(uploader) = non_empty(entry.uploader()) {
        let mut attrs = Vec::new();
        if let Some(info) = non_empty(entry.uploader_info()) {
            attrs.push(("info", info.to_owned()));
        }
        element(&mut xml, "uploader", &attributes(&attrs), uploader);
    }

    if !entry.platforms().is_empty() {
        let relationship = entry.platform_relationship().unwrap_or_default();
        element(
            &mut xml,
            "platform",
            &attributes(&[("relationship", relationship.to_owned())]),
            &entry.platforms().join(" "),
        );
    }

    xml.push_str("</video:video>");
    tracing::trace!(bytes = xml.len(), "Rendered video fragment");
    xml
}

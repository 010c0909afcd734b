//! URL query-parameter state
//!
//! The filter term lives in the location's query string so listing views are
//! shareable and survive reloads. This module keeps that string in sync: pure
//! helpers that edit a [`Url`] in place, plus document-level operations that
//! route every location change through the page history. When the history does
//! not support pushes the write is skipped silently and the in-memory location
//! stays put.

use log::debug;
use url::Url;

use crate::page::Document;

/// Decoded value of the first `key` occurrence in the URL's query
#[must_use]
pub fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Sets `key` to `value` in the URL's query
///
/// The first existing occurrence is replaced in place so parameter order is
/// stable; later duplicates are dropped. A missing key is appended at the end.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let mut replaced = false;
    pairs.retain_mut(|(name, existing)| {
        if name.as_str() != key {
            return true;
        }
        if replaced {
            return false;
        }
        *existing = value.to_string();
        replaced = true;
        true
    });
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }
    write_pairs(url, &pairs);
}

/// Removes every `key` occurrence from the URL's query
///
/// Dropping the last pair removes the `?` separator entirely.
pub fn remove_query_param(url: &mut Url, key: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    pairs.retain(|(name, _)| name != key);
    write_pairs(url, &pairs);
}

fn write_pairs(url: &mut Url, pairs: &[(String, String)]) {
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

/// Reads `key` from the document's current location
#[must_use]
pub fn get_param(doc: &Document, key: &str) -> Option<String> {
    query_param(doc.location(), key)
}

/// Writes `key=value` into the document's location via a history push
pub fn set_param(doc: &mut Document, key: &str, value: &str) {
    let mut url = doc.location().clone();
    set_query_param(&mut url, key, value);
    if doc.push_location(url) {
        debug!("pushed location {}", doc.location());
    } else {
        debug!("history unsupported, not persisting {key}={value}");
    }
}

/// Removes `key` from the document's location via a history push
pub fn remove_param(doc: &mut Document, key: &str) {
    let mut url = doc.location().clone();
    remove_query_param(&mut url, key);
    if doc.push_location(url) {
        debug!("pushed location {}", doc.location());
    } else {
        debug!("history unsupported, not removing {key}");
    }
}

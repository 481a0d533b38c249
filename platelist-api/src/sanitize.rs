//! Input sanitization for untrusted review data
//!
//! Used by the import pipeline and slug derivation. All helpers are pure;
//! dangerous input is neutralized silently rather than reported, so the
//! filter gives an attacker nothing to probe.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Maximum length for free-text fields after tag stripping
pub const MAX_TEXT_LEN: usize = 10_000;
/// Maximum length for image URLs
pub const MAX_IMAGE_LEN: usize = 2_000;
/// Maximum length for visit dates
pub const MAX_VISIT_DATE_LEN: usize = 50;
/// Maximum length for slugs
pub const MAX_SLUG_LEN: usize = 100;
/// Maximum elements kept from a string-list field
pub const MAX_LIST_ITEMS: usize = 20;
/// Maximum length of a single string-list element
pub const MAX_LIST_ITEM_LEN: usize = 500;

static SCRIPT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static VISIT_DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s,.\-]+$").unwrap());

/// URL schemes that must never survive sanitization, checked after
/// percent-decoding to catch obfuscated payloads
const FORBIDDEN_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Truncate to a character count (not bytes, so multi-byte input stays valid)
fn clamp_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    input.chars().take(max_chars).collect()
}

/// Strip `<script>` blocks, then any remaining HTML tags, and trim
pub fn strip_tags(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_RE.replace_all(input, "");
    let without_tags = HTML_TAG_RE.replace_all(&without_scripts, "");
    without_tags.trim().to_string()
}

/// Sanitize a free-text field: tag stripping plus the length cap
pub fn clean_text(input: &str) -> String {
    clamp_chars(&strip_tags(input), MAX_TEXT_LEN)
}

/// Generate a slug from a display name: lowercase, runs of non-alphanumeric
/// characters collapse to a single hyphen, leading/trailing hyphens trimmed
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Sanitize a caller-provided slug to `[a-z0-9-]`, capped at 100 chars
///
/// May return an empty string; callers treat that as "no usable slug".
pub fn sanitize_slug(raw: &str) -> String {
    let filtered: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    clamp_chars(filtered.trim_matches('-'), MAX_SLUG_LEN)
}

/// Decode percent-encoded sequences; malformed escapes pass through verbatim
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Validate an image URL from untrusted input
///
/// Accepts only `http://`, `https://` and site-relative (`/`) references,
/// rejects anything whose percent-decoded form smuggles a script scheme,
/// and caps the result at 2,000 characters. Returns `None` when the field
/// should be dropped.
pub fn sanitize_image_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with('/'))
    {
        return None;
    }

    let decoded = percent_decode(trimmed).to_lowercase();
    if FORBIDDEN_SCHEMES.iter().any(|scheme| decoded.contains(scheme)) {
        return None;
    }

    Some(clamp_chars(trimmed, MAX_IMAGE_LEN))
}

/// Validate a free-text visit date: `[a-zA-Z0-9\s,.-]` only, max 50 chars
pub fn sanitize_visit_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_VISIT_DATE_LEN {
        return None;
    }
    if !VISIT_DATE_RE.is_match(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Validate a rating: must land in [1, 5], rounded to one decimal place
pub fn sanitize_rating(value: f64) -> Option<f64> {
    if !value.is_finite() || !(1.0..=5.0).contains(&value) {
        return None;
    }
    Some((value * 10.0).round() / 10.0)
}

/// Filter a JSON array down to primitive strings under the element length
/// cap, keeping at most 20 elements, each tag-stripped
///
/// Objects and arrays disguised as elements are dropped.
pub fn sanitize_string_list(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| v.as_str())
        .filter(|s| s.chars().count() < MAX_LIST_ITEM_LEN)
        .map(strip_tags)
        .filter(|s| !s.is_empty())
        .take(MAX_LIST_ITEMS)
        .collect()
}

use std::str::FromStr;

use agora_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let tz = get_timezone();
        chrono_tz::Tz::from_str(&tz).unwrap_or_else(|e| {
            tracing::warn!(%tz, %e, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// Event start, in the viewer's time zone
pub fn event_date(t: &Time) -> String {
    t.with_timezone(&local_tz())
        .format("%a, %b %-d · %-I:%M %p")
        .to_string()
}

/// Map search for a free-form event location
pub fn map_url(location: &str) -> Option<reqwest::Url> {
    reqwest::Url::parse_with_params(
        "https://www.openstreetmap.org/search",
        &[("query", location.trim())],
    )
    .map_err(|e| tracing::warn!(%location, %e, "failed building map url"))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_url_encodes_location() {
        let url = map_url(" Community Center, 12 Main St & 3rd ").unwrap();
        assert_eq!(url.host_str(), Some("www.openstreetmap.org"));
        let pairs = url.query_pairs().into_owned().collect::<Vec<(String, String)>>();
        assert_eq!(
            pairs,
            vec![(
                String::from("query"),
                String::from("Community Center, 12 Main St & 3rd")
            )]
        );
        assert!(!url.as_str().contains(' '));
    }
}

use lasso_types::SearchEngine;
use url::Url;

use crate::error::CoreError;

const GOOGLE_SEARCH: &str = "https://www.google.com/search";
const BING_SEARCH: &str = "https://www.bing.com/search";
const BING_IMAGES: &str = "https://www.bing.com/images/search";
const GOOGLE_LENS: &str = "https://lens.google.com/";
const BING_VISUAL: &str = "https://www.bing.com/visualsearch";
const GOOGLE_TRANSLATE: &str = "https://translate.google.com/";

/// Stateless search-URL builder. Formats strings only; opening the browser
/// is the caller's concern.
///
/// Queries are form-encoded (space becomes `+`).
pub fn text_url(engine: SearchEngine, query: &str) -> Result<Url, CoreError> {
    let base = match engine {
        SearchEngine::Google => GOOGLE_SEARCH,
        SearchEngine::Bing => BING_SEARCH,
    };
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair("q", query.trim());
    Ok(url)
}

/// Image *results* for a text query (Google `tbm=isch`, Bing image search).
pub fn image_results_url(engine: SearchEngine, query: &str) -> Result<Url, CoreError> {
    match engine {
        SearchEngine::Google => {
            let mut url = Url::parse(GOOGLE_SEARCH)?;
            url.query_pairs_mut()
                .append_pair("tbm", "isch")
                .append_pair("q", query.trim());
            Ok(url)
        }
        SearchEngine::Bing => {
            let mut url = Url::parse(BING_IMAGES)?;
            url.query_pairs_mut().append_pair("q", query.trim());
            Ok(url)
        }
    }
}

/// Reverse-image search landing page.
///
/// A bare browser-open cannot upload a file, so the captured image is put
/// on the clipboard / saved to disk separately and the user pastes it here.
pub fn reverse_image_url(engine: SearchEngine) -> Result<Url, CoreError> {
    let base = match engine {
        SearchEngine::Google => GOOGLE_LENS,
        SearchEngine::Bing => BING_VISUAL,
    };
    Ok(Url::parse(base)?)
}

/// Google Translate with source auto-detection, target English.
pub fn translate_url(text: &str) -> Result<Url, CoreError> {
    let mut url = Url::parse(GOOGLE_TRANSLATE)?;
    url.query_pairs_mut()
        .append_pair("sl", "auto")
        .append_pair("tl", "en")
        .append_pair("text", text.trim());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_text_query_is_plus_encoded() {
        let url = text_url(SearchEngine::Google, "a b").unwrap();
        assert_eq!(url.as_str(), "https://www.google.com/search?q=a+b");
    }

    #[test]
    fn bing_text_query_uses_bing_domain() {
        let url = text_url(SearchEngine::Bing, "a b").unwrap();
        assert_eq!(url.host_str(), Some("www.bing.com"));
        assert_eq!(url.query(), Some("q=a+b"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = text_url(SearchEngine::Google, "c++ & rust?").unwrap();
        assert_eq!(url.query(), Some("q=c%2B%2B+%26+rust%3F"));
    }

    #[test]
    fn query_is_trimmed() {
        let url = text_url(SearchEngine::Google, "  hello  ").unwrap();
        assert_eq!(url.query(), Some("q=hello"));
    }

    #[test]
    fn google_image_results_set_tbm() {
        let url = image_results_url(SearchEngine::Google, "cat").unwrap();
        assert_eq!(url.query(), Some("tbm=isch&q=cat"));
    }

    #[test]
    fn reverse_image_landing_pages() {
        assert_eq!(
            reverse_image_url(SearchEngine::Google).unwrap().as_str(),
            "https://lens.google.com/"
        );
        assert_eq!(
            reverse_image_url(SearchEngine::Bing).unwrap().host_str(),
            Some("www.bing.com")
        );
    }

    #[test]
    fn translate_url_carries_text_and_langs() {
        let url = translate_url("bonjour le monde").unwrap();
        assert_eq!(url.host_str(), Some("translate.google.com"));
        assert_eq!(url.query(), Some("sl=auto&tl=en&text=bonjour+le+monde"));
    }
}

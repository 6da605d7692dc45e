//! LinkedIn URLs, URL markers, and DOM selectors.
//!
//! These are tied to LinkedIn's current page structure and will break when
//! the site changes; keeping them in one place makes that breakage cheap to
//! fix.

use url::form_urlencoded;

pub const LOGIN_URL: &str = "https://www.linkedin.com/login";

/// Substring of the post-login URL that indicates an authenticated session.
pub const FEED_URL_MARKER: &str = "/feed/";

/// Substring of the URL that indicates the people search results page.
pub const PEOPLE_RESULTS_MARKER: &str = "/search/results/people/";

const PEOPLE_SEARCH_BASE: &str = "https://www.linkedin.com/search/results/people/";

pub mod selectors {
    /// Login form fields.
    pub const USERNAME_INPUT: &str = "#username";
    pub const PASSWORD_INPUT: &str = "#password";
    pub const SUBMIT_BUTTON: &str = "button[type='submit']";

    /// Profile photo in the global nav, present only when logged in.
    pub const NAV_PROFILE_PHOTO: &str = "img.global-nav__me-photo";

    /// Connect buttons are located by their visible label span, then walked
    /// up to the enclosing button.
    pub const CONNECT_BUTTONS_XPATH: &str = "//span[text()='Connect']/ancestor::button";

    pub const DIALOG_XPATH: &str = "//div[@role='dialog']";
    pub const ADD_NOTE_BUTTON_XPATH: &str = "//button[contains(normalize-space(), 'Add a note')]";
    pub const NOTE_TEXTAREA: &str = "textarea[name='message']";
}

/// Build the people search results URL for a free-text query.
pub fn people_search_url(query: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("keywords", query)
        .finish();
    format!("{}?{}", PEOPLE_SEARCH_BASE, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_search_url_encodes_spaces() {
        let url = people_search_url("technical recruiter");

        assert_eq!(
            url,
            "https://www.linkedin.com/search/results/people/?keywords=technical+recruiter"
        );
        assert!(url.contains("keywords=technical+recruiter"));
    }

    #[test]
    fn test_people_search_url_encodes_special_characters() {
        let url = people_search_url("C++ & Rust");

        assert!(url.starts_with(PEOPLE_SEARCH_BASE));
        assert!(url.contains("keywords=C%2B%2B+%26+Rust"));
    }

    #[test]
    fn test_people_search_url_matches_results_marker() {
        // The search poll compares the current URL against this marker, so
        // the URL we navigate to must itself contain it.
        assert!(people_search_url("anyone").contains(PEOPLE_RESULTS_MARKER));
    }
}

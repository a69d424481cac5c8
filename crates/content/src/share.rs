//! Social share links for articles.

use serde::{Deserialize, Serialize};

/// Notification shown after a copy-to-clipboard share.
pub const COPY_NOTICE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Twitter,
    Linkedin,
    Copy,
}

/// What the client should do when a share button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open `url` in a popup window.
    Open { url: String },
    /// Put the article URL on the clipboard and show [`COPY_NOTICE`].
    CopyToClipboard { url: String },
}

/// Builds the share action for an article.
///
/// Twitter gets the encoded title and URL as intent parameters; LinkedIn
/// only takes the URL. The copy platform passes the URL through untouched.
pub fn share_article(platform: SharePlatform, title: &str, url: &str) -> ShareAction {
    match platform {
        SharePlatform::Twitter => ShareAction::Open {
            url: format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(title),
                urlencoding::encode(url)
            ),
        },
        SharePlatform::Linkedin => ShareAction::Open {
            url: format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                urlencoding::encode(url)
            ),
        },
        SharePlatform::Copy => ShareAction::CopyToClipboard {
            url: url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://lumen.example/blog/multimodal-ai";

    #[test]
    fn twitter_intent_carries_title_and_url() {
        let action = share_article(SharePlatform::Twitter, "Multimodal AI & You", URL);
        let expected = "https://twitter.com/intent/tweet?text=Multimodal%20AI%20%26%20You&url=https%3A%2F%2Flumen.example%2Fblog%2Fmultimodal-ai";
        assert_eq!(
            action,
            ShareAction::Open {
                url: expected.to_string()
            }
        );
    }

    #[test]
    fn linkedin_takes_only_the_url() {
        let action = share_article(SharePlatform::Linkedin, "ignored", URL);
        let ShareAction::Open { url } = action else {
            panic!("expected popup");
        };
        let expected = "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Flumen.example%2Fblog%2Fmultimodal-ai";
        assert_eq!(url, expected);
    }

    #[test]
    fn copy_leaves_the_url_unencoded() {
        let action = share_article(SharePlatform::Copy, "title", URL);
        assert_eq!(
            action,
            ShareAction::CopyToClipboard {
                url: URL.to_string()
            }
        );
    }

    #[test]
    fn platform_names_deserialize_lowercase() {
        let p: SharePlatform = serde_json::from_str("\"twitter\"").unwrap();
        assert_eq!(p, SharePlatform::Twitter);
    }
}

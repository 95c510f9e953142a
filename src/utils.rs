// Utility functions
use url::form_urlencoded;

/// How `key=value` pairs are joined into a POST body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormEncoding {
    /// `application/x-www-form-urlencoded` escaping.
    #[default]
    Encoded,
    /// Pairs pasted verbatim. `&` or `=` inside a value will corrupt the body.
    Raw,
}

/// Builds a form body from `pairs` in order.
pub fn encode_form(pairs: &[(&str, &str)], encoding: FormEncoding) -> String {
    match encoding {
        FormEncoding::Encoded => form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish(),
        FormEncoding::Raw => pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&"),
    }
}

/// Hides the bot token in an API URL before it reaches the logs.
pub fn mask_token(url: &str) -> String {
    match url.find("/bot") {
        Some(start) => {
            let token_start = start + "/bot".len();
            let token_end = url[token_start..]
                .find('/')
                .map(|i| token_start + i)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..token_start], &url[token_end..])
        }
        None => url.to_string(),
    }
}

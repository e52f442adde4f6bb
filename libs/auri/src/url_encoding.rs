use pct_str::{PctString, URIReserved, InvalidPctString, PctStr};

/// Percent-encode everything that is reserved in URIs.
pub fn url_encode(s: &str) -> String {
    let p = PctString::encode(s.chars(), URIReserved);
    p.to_string()
}

// Own the message instead of carrying pct_str's InvalidPctString<&str>,
// which would tie the error to the lifetime of the input.
#[derive(Debug, thiserror::Error)]
#[error("url decoding error: {0}")]
pub struct UrlDecodingError(Box<String>);

impl From<InvalidPctString<&str>> for UrlDecodingError {
    fn from(e: InvalidPctString<&str>) -> Self {
        Self(Box::new(format!("{}", e)))
    }
}

pub fn url_decode(s: &str) -> Result<String, UrlDecodingError> {
    let p = PctStr::new(s)?;
    Ok(p.decode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_encode() {
        assert_eq!(url_encode("OWNER_EDIT"), "OWNER_EDIT");
        assert_eq!(url_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(url_encode("ça"), "%C3%A7a");
    }

    #[test]
    fn t_decode() {
        assert_eq!(url_decode("a%20b%26c").unwrap(), "a b&c");
        assert!(url_decode("%zz").is_err());
    }
}

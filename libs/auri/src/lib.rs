//! Building the URLs carried by action descriptors: percent
//! encoding, query strings, and appending parameters to URLs that may
//! or may not already have a query part.

pub mod url_encoding;
pub mod querystring;

pub use querystring::{QueryString, append_query_param, append_query};
pub use url_encoding::{url_encode, url_decode, UrlDecodingError};

use crate::{
    common::{Header, Headers, Method},
    error::Result,
    r#const::{
        ACCEPT, CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, CRLF, DEFAULT_ACCEPT,
        DEFAULT_CONNECTION, DEFAULT_CONTENT_TYPE, HOST, HTTP_VERSION,
    },
};

/// Merge the default headers, the raw `-H` strings and the body-dependent
/// headers into one set. Later steps overwrite earlier ones.
///
/// Names match case-insensitively, so a user `host: x` replaces the default
/// `Host` in place and is sent with the user's spelling.
///
/// Fails on the first user header that has no `:`.
pub fn assemble<I, S>(host: &str, user_headers: I, data: &str) -> Result<Headers>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut headers = Headers::new();
    headers.insert(HOST, host);
    headers.insert(ACCEPT, DEFAULT_ACCEPT);
    headers.insert(CONNECTION, DEFAULT_CONNECTION);

    for raw in user_headers {
        let header: Header = raw.as_ref().parse()?;
        headers.insert_header(header);
    }

    if !data.is_empty() {
        headers.insert(CONTENT_LENGTH, &data.len().to_string());
        if !headers.contains(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
        }
    }

    Ok(headers)
}

/// Accumulates the wire form of a request.
#[derive(Debug, Default)]
pub struct ReqBuilder {
    req: String,
}

impl ReqBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner: Build the req method line like: GET /path HTTP/1.1
    fn __build_request_line(method: &Method, path: &str, http_version: &str) -> String {
        format!("{method} {path} {http_version}")
    }

    pub fn request_line(mut self, method: &Method, path: &str) -> Self {
        self.req = Self::__build_request_line(method, path, HTTP_VERSION);
        self.req.push_str(CRLF);
        self
    }

    /// Writes every header and then the blank line that closes the head.
    pub fn headers<'a, I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = &'a Header>,
    {
        for h in headers {
            self.req.push_str(&h.to_string());
            self.req.push_str(CRLF);
        }
        self.req.push_str(CRLF);

        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.req.push_str(data);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.req.into_bytes()
    }
}

pub fn serialize(method: &Method, path: &str, headers: &Headers, body: &str) -> Vec<u8> {
    ReqBuilder::new()
        .request_line(method, path)
        .headers(headers)
        .data(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const NO_HEADERS: [&str; 0] = [];

    fn lines(headers: &Headers) -> Vec<String> {
        headers.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_defaults_only() {
        let headers = assemble("example.com", NO_HEADERS, "").unwrap();
        assert_eq!(
            lines(&headers),
            vec!["Host: example.com", "Accept: */*", "Connection: close"]
        );
    }

    #[test]
    fn test_user_header_overrides_default() {
        let user = ["Accept: application/json", "X-Id:  7 "];
        let headers = assemble("example.com", user, "").unwrap();
        assert_eq!(headers.get("Accept"), Some("application/json"));
        assert_eq!(headers.get("X-Id"), Some("7"));
        assert_eq!(headers.iter().count(), 4);
    }

    #[test]
    fn test_user_host_replaces_default() {
        let headers = assemble("example.com", ["host: other.test"], "").unwrap();
        assert_eq!(
            lines(&headers),
            vec!["host: other.test", "Accept: */*", "Connection: close"]
        );
    }

    #[test]
    fn test_last_duplicate_wins() {
        let headers = assemble("h", ["X-A: 1", "X-A: 2"], "").unwrap();
        assert_eq!(headers.get("X-A"), Some("2"));
    }

    #[test]
    fn test_data_sets_length_and_default_type() {
        let headers = assemble("h", NO_HEADERS, r#"{"key":"value"}"#).unwrap();
        assert_eq!(headers.get("Content-Length"), Some("15"));
        assert_eq!(
            headers.get("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_content_length_counts_bytes() {
        let headers = assemble("h", NO_HEADERS, r#"{"key": "value"}"#).unwrap();
        assert_eq!(headers.get("Content-Length"), Some("16"));

        let headers = assemble("h", NO_HEADERS, "héllo").unwrap();
        assert_eq!(headers.get("Content-Length"), Some("6"));
    }

    #[test]
    fn test_user_content_type_is_kept() {
        let headers = assemble("h", ["Content-Type: text/plain"], "abc").unwrap();
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));

        let headers = assemble("h", ["content-type: text/plain"], "abc").unwrap();
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(headers.iter().count(), 5);
    }

    #[test]
    fn test_content_type_without_data_is_left_alone() {
        let headers = assemble("h", ["Content-Type: text/plain"], "").unwrap();
        assert!(!headers.contains("Content-Length"));
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn test_invalid_header_aborts() {
        let err = assemble("h", ["Good: 1", "InvalidHeaderFormat"], "x").unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderFormat(raw) if raw == "InvalidHeaderFormat"));
    }

    #[test]
    fn test_serialize_delete() {
        let headers = assemble("example.com", NO_HEADERS, "").unwrap();
        let req = serialize(&Method::delete(), "/delete", &headers, "");
        assert_eq!(
            String::from_utf8(req).unwrap(),
            "DELETE /delete HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn test_serialize_with_body() {
        let headers = assemble("example.com", ["Content-Type: application/json"], "{}").unwrap();
        let req = serialize(&Method::post(), "/items?a=1", &headers, "{}");
        assert_eq!(
            String::from_utf8(req).unwrap(),
            "POST /items?a=1 HTTP/1.1\r\n\
             Host: example.com\r\n\
             Accept: */*\r\n\
             Connection: close\r\n\
             Content-Type: application/json\r\n\
             Content-Length: 2\r\n\
             \r\n\
             {}"
        );
    }

    #[test]
    fn test_builder_keeps_raw_method_token() {
        let req = ReqBuilder::new()
            .request_line(&Method::Other("PURGE".into()), "/cache")
            .headers(&Headers::new())
            .build();
        assert_eq!(req, b"PURGE /cache HTTP/1.1\r\n\r\n");
    }
}

pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const CRLF: &str = "\r\n";

pub const HTTP_SCHEME: &str = "http";
pub const HTTPS_SCHEME: &str = "https";
pub const HTTP_PORT: &str = "80";
pub const HTTPS_PORT: &str = "443";

pub const HOST: &str = "Host";
pub const ACCEPT: &str = "Accept";
pub const CONNECTION: &str = "Connection";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";

pub const DEFAULT_ACCEPT: &str = "*/*";
pub const DEFAULT_CONNECTION: &str = "close";
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

/// Landing page: where the two dashboards live.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    #[serde(flatten)]
    pub response: Response,
    #[serde(rename = "authorHomepage")]
    pub author_homepage: &'static str,
    #[serde(rename = "readerHomepage")]
    pub reader_homepage: &'static str,
}

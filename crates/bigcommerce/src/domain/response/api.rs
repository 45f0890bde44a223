use reqwest::{StatusCode, header::HeaderMap};

/// Decoded payload together with the status and headers of the raw response.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

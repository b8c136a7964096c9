use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Js(String),
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
    #[error("could not encode request: {0}")]
    Encode(serde_json::Error),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for ApiError {
    fn from(v: JsValue) -> Self {
        ApiError::Js(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_url() {
        let e = ApiError::Status {
            status: 502,
            url: "/api/grid/select".into(),
        };
        assert_eq!(e.to_string(), "/api/grid/select answered with status 502");
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: ApiError = err.into();
        assert!(matches!(e, ApiError::Decode(_)));
        assert!(e.to_string().starts_with("could not decode response"));
    }
}

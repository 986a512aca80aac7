// Chunked HTML streaming: one body chunk per page section
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use bytes::Bytes;
use futures::stream::{self, Stream};
use std::convert::Infallible;

/// Create a chunked HTML response from pre-rendered chunks
pub fn chunked_html_stream<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = Result<Bytes, Infallible>> + Send + 'static,
{
    // No Content-Length: hyper switches to chunked transfer encoding for a streamed body.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::X_CONTENT_TYPE_OPTIONS, "nosniff")
        .body(Body::from_stream(stream))
        .map_err(|e| {
            tracing::error!("Stream response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Document shell, each section, then the closing tags, as separate chunks
pub fn document_chunks(open: String, sections: Vec<String>, close: &'static str) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(sections.len() + 2);
    chunks.push(Bytes::from(open));
    chunks.extend(sections.into_iter().map(Bytes::from));
    chunks.push(Bytes::from_static(close.as_bytes()));
    chunks
}

pub fn stream_chunks(chunks: Vec<Bytes>) -> Result<Response<Body>, StatusCode> {
    chunked_html_stream(stream::iter(chunks.into_iter().map(Ok)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_chunks_order() {
        let chunks = document_chunks(
            "<html><body>".to_string(),
            vec!["<header></header>".to_string(), "<footer></footer>".to_string()],
            "</body></html>",
        );
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], Bytes::from_static(b"<html><body>"));
        assert_eq!(chunks[3], Bytes::from_static(b"</body></html>"));
    }

    #[tokio::test]
    async fn test_streamed_body_concatenates_chunks() {
        let chunks = document_chunks("<a>".to_string(), vec!["b".to_string()], "</a>");
        let response = stream_chunks(chunks).unwrap();
        assert!(response.headers().get(header::CONTENT_LENGTH).is_none());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<a>b</a>");
    }
}

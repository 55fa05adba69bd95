//! Download of the text document to be analyzed

use crate::{progress::DownloadProgress, Document, Result};
use anyhow::Context;
use futures::stream::StreamExt;
use reqwest::Response;
use std::{
    io::{self, ErrorKind},
    pin::pin,
};
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;

/// Largest body buffer that is allocated upfront based on `Content-Length`
///
/// Servers may announce any length, so beyond this the buffer grows as bytes
/// actually arrive.
const MAX_PREALLOCATION: usize = 16 * 1024 * 1024;

/// Download a text document and decode it
///
/// Any network failure, unsuccessful HTTP status, or interrupted transfer is
/// reported as an error. Invalid UTF-8 sequences in the body are replaced with
/// U+FFFD instead.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Document> {
    // Start the download
    let context = || format!("downloading {url}");
    log::info!("Downloading {url}");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(Response::error_for_status)
        .with_context(context)?;
    let content_length = response.content_length();
    log::debug!("Server announced a document of {content_length:?} bytes");
    let progress = DownloadProgress::new("Downloading document", content_length);

    // Receive the body as a stream of byte blocks
    let body_progress = progress.clone();
    let mut body = pin!(StreamReader::new(response.bytes_stream().map(move |res| {
        res
            // Track how many bytes have been downloaded so far
            .inspect(|bytes_block| body_progress.add_bytes(bytes_block.len()))
            // Translate reqwest errors into I/O errors
            .map_err(|e| io::Error::new(ErrorKind::Other, e))
    })));
    let capacity = content_length.map_or(0, |len| {
        usize::try_from(len).unwrap_or(usize::MAX).min(MAX_PREALLOCATION)
    });
    let mut bytes = Vec::with_capacity(capacity);
    let result = body.read_to_end(&mut bytes).await;
    progress.finish();
    result.with_context(context)?;
    log::info!("Downloaded {} bytes from {url}", progress.bytes());

    // Decode the text
    Ok(String::from_utf8_lossy(&bytes).into())
}

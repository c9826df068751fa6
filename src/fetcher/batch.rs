use super::SourceFetcher;
use crate::errors::AppResult;
use crate::models::Source;
use futures::stream::{self, Stream, StreamExt};
use tracing::info;

/// Fetches every source with at most `concurrency` requests in flight.
///
/// Results are yielded in the order of `sources`, whatever order the requests
/// complete in, so consumers see a deterministic sequence. Each source is attempted
/// exactly once and a failure is yielded as an `Err` without affecting the others.
/// A `concurrency` of 0 is treated as 1.
pub fn fetch_in_order<'a, F: SourceFetcher + 'a>(
    fetcher: &'a F,
    sources: &'a [Source],
    concurrency: usize,
) -> impl Stream<Item = (&'a Source, AppResult<String>)> + 'a {
    let total = sources.len();

    stream::iter(sources.iter().enumerate())
        .map(move |(index, source)| async move {
            info!(
                source = index + 1,
                total = total,
                url = %source,
                "Fetching source"
            );
            (source, fetcher.fetch(source).await)
        })
        .buffered(concurrency.max(1))
}

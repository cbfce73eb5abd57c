pub mod clean;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod traverse;

#[cfg(test)]
pub(crate) mod test_server;

pub use clean::{clean, Page};
pub use extract::extract;
pub use fetch::{FetchConfig, Fetcher};

use cwikli_model::{Entry, LookupError, LookupRequest};

/// Look up one word: fetch its page, strip the noise, and extract the
/// entries tagged with the requested language.
///
/// An empty result means the page exists but has nothing in that language.
pub async fn lookup(fetcher: &Fetcher, request: &LookupRequest) -> Result<Vec<Entry>, LookupError> {
    tracing::info!(word = %request.word, lang = %request.language_code, "Looking up word");

    let raw = fetcher.fetch(&request.word).await?;
    let page = clean(&raw)?;
    let entries = extract(&page, &request.language_code)?;

    if entries.is_empty() {
        tracing::info!(
            word = %request.word,
            lang = %request.language_code,
            "No entries in the requested language"
        );
    } else {
        tracing::info!(entries = entries.len(), "Extracted entries");
    }

    Ok(entries)
}

use deskryptor::core::io::source::{Collection, DatasetDocuments, DatasetLayout, SourceError};
use deskryptor::engine::error::LoadError;
use reqwest::Client;
use tracing::{debug, info};

pub fn document_url(base_url: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}

/// Fetches the three documents concurrently. The first failure aborts the whole fetch.
pub async fn fetch_documents(
    base_url: &str,
    layout: &DatasetLayout,
) -> Result<DatasetDocuments, LoadError> {
    info!("Fetching dataset documents from {}", base_url);
    let client = Client::new();

    let (donors, acceptors, complexes) = tokio::try_join!(
        fetch_collection(&client, base_url, layout, Collection::Donors),
        fetch_collection(&client, base_url, layout, Collection::Acceptors),
        fetch_collection(&client, base_url, layout, Collection::Complexes),
    )?;

    Ok(DatasetDocuments {
        donors,
        acceptors,
        complexes,
    })
}

async fn fetch_collection(
    client: &Client,
    base_url: &str,
    layout: &DatasetLayout,
    collection: Collection,
) -> Result<String, LoadError> {
    let location = document_url(base_url, layout.file_name(collection));
    debug!("Requesting {} document from {}", collection, &location);

    let remote_error = |e: reqwest::Error| LoadError::Source {
        collection,
        source: SourceError::Remote {
            location: location.clone(),
            reason: e.to_string(),
        },
    };

    let response = client
        .get(&location)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(&remote_error)?;
    let body = response.text().await.map_err(&remote_error)?;

    debug!("Received {} bytes of {} data.", body.len(), collection);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_url_joins_with_a_single_slash() {
        assert_eq!(
            document_url("https://example.org/data/", "hbd.json"),
            "https://example.org/data/hbd.json"
        );
        assert_eq!(
            document_url("https://example.org/data", "/complexes.json"),
            "https://example.org/data/complexes.json"
        );
    }

    #[tokio::test]
    async fn unreachable_host_fails_with_remote_source_error() {
        let result = fetch_documents("http://127.0.0.1:9", &DatasetLayout::default()).await;

        match result {
            Err(LoadError::Source {
                source: SourceError::Remote { location, .. },
                ..
            }) => assert!(location.starts_with("http://127.0.0.1:9/")),
            other => panic!("Expected a remote source error, got {:?}", other),
        }
    }
}

//! Public ingestion entry points.
//!
//! - [`ingest`] - Ingest a single file with the default configuration
//! - [`ingest_with_config`] - Ingest a single file
//! - [`batch_ingest`] - Ingest many files concurrently on the Tokio blocking pool
//! - [`batch_ingest_sync`] - Ingest many files in parallel with rayon
//!
//! Every call is independent. Nothing is cached between calls.

use crate::core::assemble::assemble;
use crate::core::classify::classify;
use crate::core::config::IngestConfig;
use crate::types::IngestionRecord;
use crate::Result;
use rayon::prelude::*;
use std::path::Path;

/// Ingest a file using [`IngestConfig::default`].
///
/// # Errors
///
/// Returns `IngestError::NotFound` if `path` does not exist, or
/// `IngestError::Io` if its metadata cannot be read. Every extraction failure
/// is reported through the record's `notes` instead.
///
/// # Example
///
/// ```rust,no_run
/// let record = docingest::ingest("notebook.ipynb")?;
/// println!("{}", record.to_json_pretty()?);
/// # Ok::<(), docingest::IngestError>(())
/// ```
pub fn ingest(path: impl AsRef<Path>) -> Result<IngestionRecord> {
    ingest_with_config(path, &IngestConfig::default())
}

/// Ingest a file: classify, dispatch to the category's extractor, assemble.
#[cfg_attr(feature = "otel", tracing::instrument(
    skip(config, path),
    fields(
        ingest.path = %path.as_ref().display(),
    )
))]
pub fn ingest_with_config(path: impl AsRef<Path>, config: &IngestConfig) -> Result<IngestionRecord> {
    let path = path.as_ref();
    let classification = classify(path)?;

    let extractor = classification.category.extractor();
    tracing::debug!(
        path = %path.display(),
        category = ?classification.category,
        extractor = extractor.name(),
        "dispatching"
    );

    let outcome = extractor.extract(path, classification.category, config);
    Ok(assemble(classification, outcome))
}

/// Ingest multiple files concurrently.
///
/// Each file runs on Tokio's blocking pool. At most
/// [`IngestConfig::concurrency_limit`] files are in flight at once. The output
/// has one entry per input path, in input order; a missing file only fails its
/// own entry.
#[cfg(feature = "tokio-runtime")]
#[cfg_attr(feature = "otel", tracing::instrument(
    skip(config, paths),
    fields(
        ingest.batch_size = paths.len(),
    )
))]
pub async fn batch_ingest(paths: Vec<impl AsRef<Path>>, config: &IngestConfig) -> Vec<Result<IngestionRecord>> {
    use crate::IngestError;
    use std::sync::Arc;
    use tokio::sync::Semaphore;
    use tokio::task::JoinSet;

    if paths.is_empty() {
        return vec![];
    }

    let config = Arc::new(config.clone());
    let semaphore = Arc::new(Semaphore::new(config.concurrency_limit()));

    let mut tasks = JoinSet::new();

    for (index, path) in paths.into_iter().enumerate() {
        let path_buf = path.as_ref().to_path_buf();
        let config = Arc::clone(&config);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => return (index, Err(IngestError::Other(format!("Semaphore closed: {}", e)))),
            };

            let result = tokio::task::spawn_blocking(move || ingest_with_config(&path_buf, &config))
                .await
                .unwrap_or_else(|join_err| Err(IngestError::Other(format!("Task panicked: {}", join_err))));

            (index, result)
        });
    }

    let mut results: Vec<Option<Result<IngestionRecord>>> = (0..tasks.len()).map(|_| None).collect();

    while let Some(task_result) = tasks.join_next().await {
        match task_result {
            Ok((index, result)) => results[index] = Some(result),
            Err(join_err) => tracing::debug!(error = %join_err, "batch task aborted"),
        }
    }

    results
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| Err(IngestError::Other("Batch task aborted".to_string()))))
        .collect()
}

/// Ingest multiple files in parallel on the rayon thread pool.
///
/// Same contract as [`batch_ingest`] without requiring an async runtime.
#[cfg_attr(feature = "otel", tracing::instrument(
    skip(config, paths),
    fields(
        ingest.batch_size = paths.len(),
    )
))]
pub fn batch_ingest_sync<P>(paths: &[P], config: &IngestConfig) -> Vec<Result<IngestionRecord>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| ingest_with_config(path, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IngestError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_ingest_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("readme.md");
        fs::write(&path, "# Hello\n").unwrap();

        let record = ingest(&path).unwrap();
        assert_eq!(record.filename, "readme.md");
        assert_eq!(record.extension, ".md");
        assert_eq!(record.size_bytes, 8);
        assert_eq!(record.extracted_content.as_deref(), Some("# Hello\n"));
        assert!(record.is_clean());
    }

    #[test]
    fn test_ingest_missing_file() {
        let err = ingest("/nonexistent/file.txt").unwrap_err();
        assert!(matches!(err, IngestError::NotFound { .. }));
    }

    #[test]
    fn test_ingest_with_config_uses_preview_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.dat");
        fs::write(&path, [0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

        let config = IngestConfig {
            binary_preview_bytes: 2,
            ..Default::default()
        };
        let record = ingest_with_config(&path, &config).unwrap();
        assert_eq!(record.extracted_content.as_deref(), Some("dead"));
        assert_eq!(record.size_bytes, 4);
    }

    #[test]
    fn test_batch_ingest_sync_preserves_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.txt");
        let missing = dir.path().join("missing.txt");
        let last = dir.path().join("c.txt");
        fs::write(&first, "first").unwrap();
        fs::write(&last, "last").unwrap();

        let results = batch_ingest_sync(&[first, missing, last], &IngestConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().extracted_content.as_deref(), Some("first"));
        assert!(matches!(results[1], Err(IngestError::NotFound { .. })));
        assert_eq!(results[2].as_ref().unwrap().extracted_content.as_deref(), Some("last"));
    }

    #[cfg(feature = "tokio-runtime")]
    #[tokio::test]
    async fn test_batch_ingest_preserves_order() {
        let dir = tempdir().unwrap();
        let mut paths = Vec::new();
        for i in 0..10 {
            let path = dir.path().join(format!("file_{}.txt", i));
            fs::write(&path, format!("content {}", i)).unwrap();
            paths.push(path);
        }

        let config = IngestConfig {
            max_concurrent_ingestions: Some(3),
            ..Default::default()
        };
        let results = batch_ingest(paths, &config).await;

        assert_eq!(results.len(), 10);
        for (i, result) in results.iter().enumerate() {
            let record = result.as_ref().unwrap();
            assert_eq!(record.filename, format!("file_{}.txt", i));
            assert_eq!(record.extracted_content, Some(format!("content {}", i)));
        }
    }

    #[cfg(feature = "tokio-runtime")]
    #[tokio::test]
    async fn test_batch_ingest_empty() {
        let results = batch_ingest(Vec::<&str>::new(), &IngestConfig::default()).await;
        assert!(results.is_empty());
    }
}

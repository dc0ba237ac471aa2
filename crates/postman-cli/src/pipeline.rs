//! Fetch, convert and write, strictly in that order

use crate::config::Config;
use crate::error::{CliError, CliResult};
use openapi_source::SpecFetcher;
use postman_collection::{Collection, CollectionBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub folders: usize,
    pub requests: usize,
}

/// Run the whole conversion, printing progress to stdout
///
/// Nothing is written unless fetching and converting both succeed.
pub async fn run(config: &Config, cwd: &Path) -> CliResult<RunSummary> {
    let docs_url = config.api_docs_url();
    let output_path = config.output_path(cwd);

    println!("Generating Postman Collection from Swagger/OpenAPI...");
    println!("Fetching from: {}", docs_url);
    println!("Output file: {}", config.output.display());

    let fetcher = SpecFetcher::new()?;
    let document = fetcher.fetch_document(&docs_url).await?;
    println!("Fetched OpenAPI spec successfully");

    let collection = CollectionBuilder::new(&document, &config.base_url).build()?;
    println!(
        "Generated Postman collection with {} folders",
        collection.folder_count()
    );
    println!("Total requests: {}", collection.request_count());

    write_collection(&collection, &output_path)?;
    println!("Postman collection saved to: {}", output_path.display());
    println!();
    println!("Done! Import the collection file into Postman to start testing.");

    Ok(RunSummary {
        output_path,
        folders: collection.folder_count(),
        requests: collection.request_count(),
    })
}

fn write_collection(collection: &Collection, path: &Path) -> CliResult<()> {
    let json = serde_json::to_string_pretty(collection)?;
    debug!("Writing {} bytes to {}", json.len(), path.display());

    std::fs::write(path, json).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved collection to {}", path.display());
    Ok(())
}

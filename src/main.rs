use anyhow::Context;
use semantic_search::config::Config;
use semantic_search::infrastructure::data_file::{load_documents, sample_documents};
use semantic_search::SemanticSearch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    let search = SemanticSearch::new(&config).context("Failed to initialize search pipeline")?;

    let documents = match &config.data_file {
        Some(path) => load_documents(path)?,
        None => sample_documents(),
    };

    let count = search.ingest(&documents).await.context("Ingest failed")?;
    println!("Data uploaded ({count} records)");

    let matches = search.search(&config.query, config.top_k).await.context("Search failed")?;
    println!("Results for \"{}\" ({}):", config.query, search.metric());
    for m in &matches {
        println!("{m}");
    }
    Ok(())
}

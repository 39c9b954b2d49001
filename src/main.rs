//! `prism` command-line entrypoint.

mod cli;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

use prism::analysis::{analyze_selection, render_report};
use prism::artifact::{
    EmbeddingFile, QueryFile, SelectionFile, embeddings_path_for, generated_queries_path,
    write_json_atomic,
};
use prism::batch::{BatchDriver, BatchResult, BudgetSpec, CandidatePool};
use prism::config::Config;
use prism::provider::{
    CachingEmbedder, GenaiQueryGenerator, JinaEmbedder, QueryGenerator, embed_query_file,
};
use prism::selector::SelectorConfig;

use cli::{Cli, Command};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const EMBEDDING_CACHE_CAPACITY: u64 = 10_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Budget syntax is checked here, before anything touches the filesystem.
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Config::from_env()?;

    match cli.command {
        Command::Select {
            budget,
            queries,
            embeddings,
            output,
            group,
        } => {
            if let Some(path) = queries {
                config.queries_path = path;
            }
            if let Some(path) = embeddings {
                config.embeddings_path = path;
            }
            if let Some(path) = output {
                config.output_path = path;
            }
            if let Some(group) = group {
                config.candidate_group = group;
            }
            config.validate()?;
            run_select(&config, budget)
        }
        Command::Generate {
            template,
            query,
            count,
        } => run_generate(&config, &template, &query, count).await,
        Command::Embed { input } => run_embed(&config, &input).await,
        Command::Analyze { file } => {
            let path = file.unwrap_or_else(|| config.output_path.clone());
            run_analyze(&path)
        }
    }
}

fn run_select(config: &Config, budget: BudgetSpec) -> anyhow::Result<()> {
    tracing::info!(
        budget = %budget,
        group = %config.candidate_group,
        alpha = config.alpha,
        "Starting selection"
    );

    let queries = QueryFile::load(&config.queries_path)?;
    let embeddings = EmbeddingFile::load(&config.embeddings_path)?;
    let pool = CandidatePool::from_artifacts(&queries, &embeddings, &config.candidate_group)?;

    let selector = config
        .deadline
        .map(SelectorConfig::with_deadline)
        .unwrap_or_default();
    let driver = BatchDriver::new(config.alpha).with_selector_config(selector);

    let result = driver.run(&pool, budget)?;
    print_selections(&result);

    write_json_atomic(&config.output_path, &SelectionFile::from(&result))?;
    println!("\nResults saved to {}", config.output_path.display());
    Ok(())
}

fn print_selections(result: &BatchResult) {
    for selection in result.iter() {
        println!("\n=== Selecting {} queries ===", selection.k);
        for (rank, text) in selection.texts().enumerate() {
            println!("{}. {}", rank + 1, text);
        }
        println!("Time taken: {}ms", selection.elapsed.as_millis());
    }
}

async fn run_generate(
    config: &Config,
    template_path: &Path,
    query: &str,
    count: usize,
) -> anyhow::Result<()> {
    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;

    let generator = GenaiQueryGenerator::new(config.generation_model.clone());
    let queries = generator.generate(&template, query, count).await?;

    let output = generated_queries_path(template_path);
    write_json_atomic(&output, &QueryFile::from_queries(query, queries))?;
    println!("Generated {} queries, saved to {}", count, output.display());
    Ok(())
}

async fn run_embed(config: &Config, input: &Path) -> anyhow::Result<()> {
    let api_key = config.require_embedding_api_key()?;
    let file = QueryFile::load(input)?;

    let jina = JinaEmbedder::new(
        config.embedding_url.clone(),
        config.embedding_model.clone(),
        api_key,
    )?;
    let embedder = CachingEmbedder::new(jina, EMBEDDING_CACHE_CAPACITY);

    let embedded = embed_query_file(&embedder, &file).await?;

    let output = embeddings_path_for(input);
    write_json_atomic(&output, &embedded)?;
    println!("Embeddings saved to {}", output.display());
    Ok(())
}

fn run_analyze(path: &Path) -> anyhow::Result<()> {
    let file = EmbeddingFile::load(path)?;
    let report = analyze_selection(&file);
    if report.is_empty() {
        tracing::warn!(path = %path.display(), "No '<n>_queries' groups to analyze");
    }
    println!("Original query: {}\n", file.original_query);
    print!("{}", render_report(&report));
    Ok(())
}

use std::path::{Path, PathBuf};

use prism::artifact::{EmbeddingFile, QueryFile, write_json_atomic};

pub const ORIGINAL_QUERY: &str = "rust ownership";
pub const GROUP: &str = "6_queries";

/// Three tight topic pairs; the reference leans towards the first.
pub fn clustered_texts() -> Vec<String> {
    [
        "rust borrow checker explained",
        "how does the rust borrow checker work",
        "rust async runtime comparison",
        "tokio vs async-std",
        "rust error handling patterns",
        "thiserror vs anyhow",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn clustered_embeddings() -> Vec<Vec<f32>> {
    vec![
        vec![1.0, 0.05, 0.0],
        vec![1.0, -0.05, 0.02],
        vec![0.1, 1.0, 0.0],
        vec![0.05, 0.95, 0.1],
        vec![0.0, 0.1, 1.0],
        vec![0.05, 0.0, 0.9],
    ]
}

pub fn reference_embedding() -> Vec<f32> {
    vec![1.0, 0.2, 0.1]
}

/// Topic (0, 1 or 2) of a fixture embedding: its dominant axis.
pub fn topic_of(embedding: &[f32]) -> usize {
    embedding
        .iter()
        .enumerate()
        .fold((0, f32::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}

pub fn query_file() -> QueryFile {
    QueryFile::from_queries(ORIGINAL_QUERY, clustered_texts())
}

pub fn embedding_file() -> EmbeddingFile {
    let mut file = EmbeddingFile::new(ORIGINAL_QUERY, reference_embedding());
    file.groups.insert(GROUP.to_string(), clustered_embeddings());
    file
}

pub struct ArtifactPaths {
    pub queries: PathBuf,
    pub embeddings: PathBuf,
    pub output: PathBuf,
}

/// Writes the query and embedding fixtures into `dir`.
pub fn write_artifacts(dir: &Path) -> ArtifactPaths {
    let paths = ArtifactPaths {
        queries: dir.join("output-prompt-v1.txt.json"),
        embeddings: dir.join("output-prompt-v1.txt.embeddings.json"),
        output: dir.join("output-prompt-v1.txt.submodular.embeddings.json"),
    };
    write_json_atomic(&paths.queries, &query_file()).expect("write query fixture");
    write_json_atomic(&paths.embeddings, &embedding_file()).expect("write embedding fixture");
    paths
}

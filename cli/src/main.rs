use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use temu_cli::{execute, RunConfig};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "temu")]
#[command(about = "Rank plain-text documents by TF-IDF cosine similarity to a query", long_about = None)]
struct Args {
    /// Free-text query to score the corpus against
    query: String,
    /// Directory containing the .txt corpus
    #[arg(long, default_value = "./documents")]
    dir: PathBuf,
    /// Base-form dictionary, one word per line
    #[arg(long, default_value = "./helper/dictionary.txt")]
    dictionary: PathBuf,
    /// Stopword CSV, one stopword in the first field of each row
    #[arg(long, default_value = "./helper/stopword.csv")]
    stopwords: PathBuf,
    /// Snowball stemmer language (omit to use tokens as-is)
    #[arg(long)]
    language: Option<String>,
    /// Show only the top K results
    #[arg(long)]
    top: Option<usize>,
    /// Emit results as JSON instead of a plain listing
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config = RunConfig {
        directory: args.dir,
        dictionary: args.dictionary,
        stopwords: args.stopwords,
        query: args.query,
        language: args.language,
        top: args.top,
    };
    let hits = execute(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        for (i, hit) in hits.iter().enumerate() {
            println!("{}. {}  {:.4}", i + 1, hit.doc_id, hit.score);
        }
    }
    Ok(())
}

//! Command-line configuration

use clap::Parser;
use openapi_source::api_docs_url;
use std::path::{Path, PathBuf};

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_OUTPUT: &str = "phonehub.postman.json";

/// Generate a Postman collection from a running server's OpenAPI document
#[derive(Parser, Debug, Clone)]
#[command(name = "generate-postman")]
#[command(version)]
#[command(about = "Generate a Postman Collection v2.1 from a server's /api-docs")]
#[command(after_help = "Arguments other than --url and --output are ignored; \
    a flag given without a value is rejected.")]
pub struct Args {
    /// Base URL of the running server
    #[arg(long, env = "POSTMAN_GEN_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Where to write the collection
    #[arg(long, env = "POSTMAN_GEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Args {
    /// Parse `argv` keeping only the first `--url` and `--output` with the
    /// argument that follows each, plus help and version requests
    ///
    /// Unknown arguments are dropped rather than rejected, and a following
    /// argument is taken as the value even when it looks like a flag.
    pub fn try_parse_lenient<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let (program, rest) = match argv.split_first() {
            Some((program, rest)) => (program.clone(), rest),
            None => ("generate-postman".to_string(), &[][..]),
        };

        let mut kept = vec![program];

        if let Some(request) = rest
            .iter()
            .find(|arg| matches!(arg.as_str(), "--help" | "-h" | "--version" | "-V"))
        {
            kept.push(request.clone());
        }

        for flag in ["--url", "--output"] {
            if let Some(index) = rest.iter().position(|arg| arg.as_str() == flag) {
                match rest.get(index + 1) {
                    Some(value) => kept.push(format!("{}={}", flag, value)),
                    None => kept.push(flag.to_string()),
                }
            }
        }

        Self::try_parse_from(kept)
    }
}

/// Resolved settings for a single run
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub output: PathBuf,
}

impl Config {
    pub fn new(base_url: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            output: output.into(),
        }
    }

    pub fn api_docs_url(&self) -> String {
        api_docs_url(&self.base_url)
    }

    /// Output path resolved against `cwd` when relative
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.output)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::new(args.url, args.output)
    }
}

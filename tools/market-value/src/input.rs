//! Resolves the CLI input record from an argument, a JSON file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::state::InputState;

/// Builds the input record.
///
/// `path` wins over `article`; with neither, the article is read from `stdin`.
/// A blank article is rejected before any model call.
pub fn read_input(
    article: Option<String>,
    path: Option<&Path>,
    mut stdin: impl Read,
) -> Result<InputState> {
    let input = if let Some(path) = path {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?
    } else {
        let article = match article {
            Some(a) => a,
            None => {
                let mut buf = String::new();
                stdin
                    .read_to_string(&mut buf)
                    .context("read article from stdin")?;
                buf
            }
        };
        InputState { article }
    };
    if input.article.trim().is_empty() {
        anyhow::bail!("article is empty");
    }
    Ok(input)
}

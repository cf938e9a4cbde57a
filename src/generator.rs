use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, info};

use crate::{frontmatter, markdown, renderer};

pub(crate) const DEFAULT_INPUT: &str = "docs/PrivacyPolicy.md";
pub(crate) const DEFAULT_OUTPUT: &str = "dist/index.html";

#[derive(Debug, Clone)]
pub(crate) struct BuildConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Renders `config.input` into a standalone page at `config.output`.
///
/// Nothing is written unless the input could be read.
pub(crate) fn generate(config: &BuildConfig) -> anyhow::Result<PathBuf> {
    if !config.input.exists() {
        bail!("Could not find {:?}", config.input);
    }

    let source = std::fs::read_to_string(&config.input)
        .with_context(|| format!("while reading {:?}", config.input))?;
    let (metadata, body) = frontmatter::split(&source);
    debug!(
        "{} metadata key(s), body of {} bytes",
        metadata.len(),
        body.len()
    );

    let body_html = markdown::to_html(body);
    let page = renderer::render_page(&metadata, &body_html);

    write_page(&config.output, &page)?;
    info!("Generated {}", config.output.display());

    Ok(config.output.clone())
}

fn write_page(out_path: &Path, page: &str) -> anyhow::Result<()> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs_extra::dir::create_all(parent, false)
                .with_context(|| format!("while creating {parent:?}"))?;
        }
    }
    std::fs::write(out_path, page).with_context(|| format!("while writing {out_path:?}"))?;

    Ok(())
}

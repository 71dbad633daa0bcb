//! Two streaming passes over the HTML with `lol_html`: one to collect Mermaid sources, one to
//! swap each block for its SVG. Both passes see blocks in the same document order.
//!
//! Blocks nested inside other blocks (e.g. `pre.mermaid > code.language-mermaid`) are not
//! supported; each matching element counts as its own block.

use crate::{Error, Result};
use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use std::cell::{Cell, RefCell};

pub const MERMAID_BLOCK_SELECTORS: [&str; 3] =
    ["pre.mermaid", "div.mermaid", "code.language-mermaid"];

fn rewrite_error(err: impl std::fmt::Display) -> Error {
    Error::Rewrite {
        message: err.to_string(),
    }
}

/// Returns the decoded, trimmed source text of every Mermaid block in document order.
pub fn collect_mermaid_blocks(html: &str) -> Result<Vec<String>> {
    let blocks: RefCell<Vec<String>> = RefCell::new(Vec::new());

    let mut handlers = Vec::new();
    for selector in MERMAID_BLOCK_SELECTORS {
        handlers.push(element!(selector, |_el| {
            blocks.borrow_mut().push(String::new());
            Ok(())
        }));
        handlers.push(text!(selector, |chunk| {
            if let Some(current) = blocks.borrow_mut().last_mut() {
                current.push_str(chunk.as_str());
            }
            Ok(())
        }));
    }

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )
    .map_err(rewrite_error)?;

    // `lol_html` hands out raw text, so entities like `--&gt;` are still escaped.
    Ok(blocks
        .into_inner()
        .into_iter()
        .map(|raw| htmlize::unescape(raw.as_str()).trim().to_string())
        .collect())
}

/// Replaces the `i`-th Mermaid block with `svgs[i]`.
pub fn inline_svgs(html: &str, svgs: &[String]) -> Result<String> {
    let next = Cell::new(0usize);

    let mut handlers = Vec::new();
    for selector in MERMAID_BLOCK_SELECTORS {
        handlers.push(element!(selector, |el| {
            let idx = next.get();
            next.set(idx + 1);
            let svg = svgs
                .get(idx)
                .ok_or("more Mermaid blocks than rendered diagrams")?;
            el.replace(svg, ContentType::Html);
            Ok(())
        }));
    }

    let out = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )
    .map_err(rewrite_error)?;

    if next.get() != svgs.len() {
        return Err(Error::BlockCountMismatch {
            blocks: next.get(),
            rendered: svgs.len(),
        });
    }
    Ok(out)
}

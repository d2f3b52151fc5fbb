//! Two-pass placeholder expansion.
//!
//! Rendering is a pure text transformation: no files are written, no jobs
//! are submitted. A pass resolves every `{name}` token against its
//! parameter set and collapses `{{name}}` to a literal `{name}` for the
//! next pass. A pass that cannot resolve every due token fails closed;
//! partially substituted text is never returned as a success.

use crate::error::{TmplError, TmplResult};
use crate::params::ParamSet;
use crate::scan::{Segment, scan};
use crate::template::Template;

/// Apply one rendering pass over `text`.
///
/// Unresolved names are collected (all of them, deduplicated, in order of
/// first appearance) into a single [`TmplError::UnresolvedPlaceholder`].
pub fn expand(text: &str, params: &ParamSet) -> TmplResult<String> {
    let segments = scan(text)?;
    let mut out = String::with_capacity(text.len());
    let mut missing: Vec<String> = Vec::new();

    for segment in segments {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Placeholder(name) => match params.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                }
            },
            Segment::Deferred(name) => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
    }

    if !missing.is_empty() {
        return Err(TmplError::UnresolvedPlaceholder { names: missing });
    }
    Ok(out)
}

/// Render a template through one pass per parameter set, in order.
///
/// The text is rescanned between passes, so a `{{name}}` token collapsed
/// by pass 1 is resolved by pass 2 exactly like a first-class placeholder,
/// possibly against a different mapping (e.g. per-partition overrides).
pub fn render(template: &Template, passes: &[ParamSet]) -> TmplResult<String> {
    if passes.is_empty() {
        return Err(TmplError::InvalidParams(
            "at least one parameter set is required".to_string(),
        ));
    }

    let mut text = template.body().to_string();
    for (i, params) in passes.iter().enumerate() {
        tracing::debug!(
            template = template.name(),
            pass = i + 1,
            params = params.len(),
            "rendering pass"
        );
        text = expand(&text, params)?;
    }
    Ok(text)
}

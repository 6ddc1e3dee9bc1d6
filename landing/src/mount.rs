use sycamore::{prelude::*, web::DomNode};

use crate::{store, utils, Error, Result};

/// Mounts `widget` into the element matching `selector`.
///
/// A fresh [`store::Store`] is created for the mounted widget tree and
/// provided as reactive context before the widget renders into the anchor
/// element; interactivity from then on is entirely the widget's own.
/// The anchor is expected to be an empty placeholder owned by the page
/// template, rendering appends to it.
///
/// A missing anchor is a template/script mismatch and reported as
/// [`Error::AnchorNotFound`], callers are not expected to recover from it.
pub fn mount<F>(widget: F, selector: &str) -> Result<()>
where
    F: for<'a> FnOnce(Scope<'a>) -> View<DomNode>,
{
    let anchor = resolve_anchor(selector)?;

    sycamore::render_to(
        move |cx| {
            store::provide_store(cx);
            widget(cx)
        },
        &anchor,
    );

    tracing::debug!("mounted widget at '{}'", selector);

    Ok(())
}

fn resolve_anchor(selector: &str) -> Result<web_sys::Element> {
    utils::document()
        .query_selector(selector)
        .map_err(|_| Error::InvalidSelector(selector.to_owned()))?
        .ok_or_else(|| Error::AnchorNotFound(selector.to_owned()))
}

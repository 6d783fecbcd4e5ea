//! Splits content blocks into numbered pages.

use crate::page::{ContentBlock, Page, PageMetadata};
use std::num::NonZeroUsize;

/// `Page {index}/{total}`, 1-based.
pub fn page_label(index: usize, total: usize) -> String {
    format!("Page {index}/{total}")
}

/// Groups `blocks` into pages of at most `per_page` fields, preserving order.
///
/// Every page starts from its own clone of `template`. Once all pages are
/// built each one is titled with [`page_label`]. No blocks, no pages.
pub fn paginate<I>(blocks: I, per_page: NonZeroUsize, template: &PageMetadata) -> Vec<Page>
where
    I: IntoIterator<Item = ContentBlock>,
{
    let per_page = per_page.get();
    let mut pages = Vec::new();
    let mut current = Page::new(template.clone());

    for block in blocks {
        current.push(block);
        if current.len() == per_page {
            pages.push(std::mem::replace(&mut current, Page::new(template.clone())));
        }
    }
    if !current.is_empty() {
        pages.push(current);
    }

    let total = pages.len();
    for (index, page) in pages.iter_mut().enumerate() {
        page.title = Some(page_label(index + 1, total));
    }
    pages
}

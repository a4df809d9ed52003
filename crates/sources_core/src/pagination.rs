/// Number of pages for `total` records, never less than 1.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Page reached by Next, or `None` when already on the last page.
pub fn next_page(page: u32, total_pages: u32) -> Option<u32> {
    (page < total_pages).then(|| page + 1)
}

/// Page reached by Previous, or `None` on the first page.
pub fn previous_page(page: u32) -> Option<u32> {
    (page > 1).then(|| page - 1)
}

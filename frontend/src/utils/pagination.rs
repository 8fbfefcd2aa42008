/// Whether Next should be offered. An unknown total (0) leaves it enabled.
pub fn has_next_page(page: u32, total_pages: i64) -> bool {
    total_pages <= 0 || i64::from(page) + 1 < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_disabled_on_last_known_page() {
        assert!(has_next_page(0, 2));
        assert!(!has_next_page(1, 2));
        assert!(!has_next_page(4, 2));
        assert!(has_next_page(3, 0));
    }
}

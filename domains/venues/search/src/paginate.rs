use venues_queries::PageRequest;

/// The items on a 1-indexed page; empty when the page is out of range.
pub fn paginate<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    let Some(offset) = page.offset()
    else {
        return Vec::new();
    };
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);

    items.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages() {
        let items: Vec<u32> = (1..=5).collect();

        assert_eq!(paginate(items.clone(), PageRequest::new(1, 2)), vec![1, 2]);
        assert_eq!(paginate(items.clone(), PageRequest::new(3, 2)), vec![5]);
        assert!(paginate(items.clone(), PageRequest::new(4, 2)).is_empty());
        assert!(paginate(items, PageRequest::new(0, 2)).is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// Fixed page size for all paginated listings.
pub const PAGE_SIZE: i64 = 10;

/// Pagination envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "totalRecords")]
    pub total_records: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, current_page: i64, total_records: i64) -> Self {
        Self {
            data,
            current_page,
            total_pages: total_pages(total_records, PAGE_SIZE),
            total_records,
        }
    }
}

/// 1-indexed page number with the fixed page size.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
}

impl PageParams {
    pub fn new(page: Option<i64>) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(1),
        }
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * PAGE_SIZE
    }
}

pub fn total_pages(total_records: i64, page_size: i64) -> i64 {
    if total_records <= 0 {
        0
    } else {
        (total_records + page_size - 1) / page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn page_params_default_to_first_page() {
        let params = PageParams::new(None);
        assert_eq!(params.page, 1);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn page_params_compute_offset() {
        let params = PageParams::new(Some(3));
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn envelope_reports_page_math() {
        let page = Page::new(vec![1, 2, 3, 4, 5], 3, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_records, 25);
        assert_eq!(page.data.len(), 5);
    }

    #[test]
    fn envelope_serializes_camel_case_keys() {
        let page = Page::new(Vec::<i32>::new(), 1, 0);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("currentPage").is_some());
        assert!(json.get("totalPages").is_some());
        assert!(json.get("totalRecords").is_some());
    }
}

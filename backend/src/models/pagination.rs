use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_SIZE: i64 = 20;

/// Raw query string values, kept as text so malformed numbers surface as our
/// own validation error instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PageQuery {
    #[validate(range(min = 0))]
    pub page: i64,
    #[validate(range(min = 1, max = 1000))]
    pub size: i64,
    pub sort: Option<String>,
}

impl PageParams {
    pub fn into_query(self) -> Result<PageQuery, AppError> {
        let query = PageQuery {
            page: parse_number("page", self.page.as_deref(), DEFAULT_PAGE)?,
            size: parse_number("size", self.size.as_deref(), DEFAULT_SIZE)?,
            sort: self.sort.filter(|s| !s.trim().is_empty()),
        };
        query.validate()?;
        Ok(query)
    }
}

impl PageQuery {
    /// Query pairs forwarded to the upstream collection endpoint.
    pub fn upstream_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

fn parse_number(field: &str, raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| AppError::Validation(vec![format!("{}: must be an integer", field)])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, size: Option<&str>, sort: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(String::from),
            size: size.map(String::from),
            sort: sort.map(String::from),
        }
    }

    #[test]
    fn defaults_to_first_page_of_twenty() {
        let query = PageParams::default().into_query().unwrap();
        assert_eq!(query.page, 0);
        assert_eq!(query.size, 20);
        assert!(query.sort.is_none());
        assert_eq!(
            query.upstream_pairs(),
            vec![("page", "0".to_string()), ("size", "20".to_string())]
        );
    }

    #[test]
    fn sort_is_forwarded_verbatim() {
        let query = params(Some("2"), Some("50"), Some("eventTime,desc"))
            .into_query()
            .unwrap();
        assert_eq!(query.upstream_pairs()[2], ("sort", "eventTime,desc".to_string()));
    }

    #[test]
    fn rejects_negative_page_and_out_of_range_size() {
        assert!(matches!(
            params(Some("-1"), None, None).into_query(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            params(None, Some("0"), None).into_query(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            params(None, Some("1001"), None).into_query(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_values() {
        match params(Some("abc"), None, None).into_query() {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors, vec!["page: must be an integer".to_string()])
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

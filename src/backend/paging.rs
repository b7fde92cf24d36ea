use crate::error::{ApiError, ApiResult};

/// One page of a listing plus the token for the next page, if any.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

/// Slice a creation-ordered listing into a page.
///
/// The continuation token is an opaque decimal offset into the full
/// sequence. Without `max_results` the whole remainder is a single page.
pub fn paginate<T: Clone>(
    items: &[T],
    next_token: Option<&str>,
    max_results: Option<usize>,
) -> ApiResult<Page<T>> {
    let offset = match next_token {
        None => 0,
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| ApiError::invalid_next_token())?,
    };
    if offset > items.len() {
        return Err(ApiError::invalid_next_token());
    }

    let remainder = &items[offset..];
    let take = max_results.unwrap_or(remainder.len());
    let page: Vec<T> = remainder.iter().take(take).cloned().collect();
    let consumed = offset + page.len();
    let next_token = if consumed < items.len() {
        Some(consumed.to_string())
    } else {
        None
    };
    Ok(Page {
        items: page,
        next_token,
    })
}

use crate::config::Config;
use crate::hooks::use_fetch::{FetchHandle, use_fetch};
use crate::models::sales::SalesRows;
use crate::services::api::{RowsQuery, fetch_rows};
use yew::prelude::*;

/// Query issued by the table view for a given server-side filter
pub const fn table_query(invalid_only: bool) -> RowsQuery {
    RowsQuery {
        limit: Some(Config::TABLE_FETCH_LIMIT),
        offset: Some(Config::TABLE_FETCH_OFFSET),
        invalid_only,
    }
}

#[hook]
pub fn use_rows(invalid_only: bool) -> FetchHandle<SalesRows> {
    use_fetch("rows", invalid_only, |invalid_only| async move {
        fetch_rows(table_query(invalid_only))
            .await
            .map(SalesRows::new)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_query() {
        let query = table_query(true);
        assert_eq!(query.limit, Some(300));
        assert_eq!(query.offset, Some(0));
        assert!(query.invalid_only);
        assert!(!table_query(false).invalid_only);
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Number of records returned per index page
pub const PER_PAGE: u64 = 10;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a write is rejected because of invalid fields
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    /// Error messages keyed by the offending field
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Query parameters accepted by index routes
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number, defaults to the first page
    pub page: Option<u64>,
}

impl PageParams {
    /// Requested page, treating a missing or zero page as the first page
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// One page of an ordered record listing
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PageDto<T> {
    /// Convert the items of the page, keeping its position
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageDto<U> {
        PageDto {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Record counts shown on the landing page
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryDto {
    pub clients: u64,
    pub attorneys: u64,
    pub affairs: u64,
    pub assignments: u64,
}

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the book title search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TitleSearchParam {
    /// Fragment the title must contain.
    pub title: String,
}

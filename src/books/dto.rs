use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::{listing_line, Book};
use crate::books::domain::model::{BookEntity, BookKind};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::opt_day_serializer;

// BookDto is a point-in-time snapshot of a catalogued book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub name: String,
    pub author: String,
    pub price: f64,
    pub category: String,
    #[serde(flatten)]
    pub kind: BookKind,
    pub book_status: BookStatus,
    #[serde(with = "opt_day_serializer")]
    pub issue_date: Option<NaiveDate>,
    #[serde(with = "opt_day_serializer")]
    pub return_date: Option<NaiveDate>,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            name: other.name.to_string(),
            author: other.author.to_string(),
            price: other.price,
            category: other.category.to_string(),
            kind: other.kind,
            book_status: other.status(),
            issue_date: other.issue_date,
            return_date: other.return_date,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn is_comic(&self) -> bool {
        matches!(self.kind, BookKind::Comic { .. })
    }
}

// listing line
impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", listing_line(self))
    }
}

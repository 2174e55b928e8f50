use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

time::serde::format_description!(
    start_at_format,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]"
);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    /// Unset until the store assigns one on the first save.
    pub id: Option<i64>,
    pub customer_id: i64,
    /// `None` when the submitted timestamp did not parse.
    #[serde(with = "start_at_format::option")]
    pub start_at: Option<PrimitiveDateTime>,
    /// `None` when the submitted guest count was not numeric.
    pub num_guests: Option<i64>,
    /// `None` when the form field was left empty.
    pub notes: Option<String>,
}

use axum::extract::Path;
use axum::response::Redirect;
use axum::routing::post;
use axum::{Extension, Form, Router};
use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::controller::AppState;
use crate::errors::Error;
use crate::models::reservation::Reservation;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/:id/add-reservation/", post(add_reservation))
        .route_layer(Extension(app_state))
}

/// Raw reservation form. Everything arrives as text; coercion into the
/// domain types happens in [`ReservationForm::into_input`].
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    #[serde(default)]
    pub start_at: String,
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub notes: String,
}

/// Coerced form values, ready to build a [`Reservation`] from.
#[derive(Debug)]
pub struct ReservationInput {
    pub start_at: Option<PrimitiveDateTime>,
    pub num_guests: Option<i64>,
    pub notes: Option<String>,
}

// What a datetime-local input submits, with and without seconds.
static START_AT_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");
static START_AT_FORMAT_WITH_SECONDS: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

impl ReservationForm {
    /// Permissive mode stores unparsable startAt/numGuests as `None`
    /// sentinels; strict mode rejects them before any entity exists.
    /// Empty notes normalize to `None` in both modes.
    pub fn into_input(self, strict: bool) -> Result<ReservationInput, Error> {
        let start_at = parse_start_at(&self.start_at);
        let num_guests = parse_num_guests(&self.num_guests);

        if strict {
            if start_at.is_none() {
                return Err(Error::InvalidInput(format!(
                    "startAt is not a valid timestamp: {:?}",
                    self.start_at
                )));
            }
            if num_guests.is_none() {
                return Err(Error::InvalidInput(format!(
                    "numGuests is not a number: {:?}",
                    self.num_guests
                )));
            }
        }

        let notes = match self.notes.is_empty() {
            true => None,
            false => Some(self.notes),
        };

        Ok(ReservationInput {
            start_at,
            num_guests,
            notes,
        })
    }
}

fn parse_start_at(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    PrimitiveDateTime::parse(raw, START_AT_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(raw, START_AT_FORMAT_WITH_SECONDS))
        .ok()
}

fn parse_num_guests(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub async fn add_reservation(
    Extension(state): Extension<AppState>,
    Path(customer_id): Path<i64>,
    Form(form): Form<ReservationForm>,
) -> Result<Redirect, Error> {
    let input = form.into_input(state.strict_forms)?;

    let mut reservation = Reservation {
        id: None,
        customer_id,
        start_at: input.start_at,
        num_guests: input.num_guests,
        notes: input.notes,
    };
    state.reservations.save(&mut reservation).await?;

    Ok(Redirect::to(&format!("/{customer_id}/")))
}

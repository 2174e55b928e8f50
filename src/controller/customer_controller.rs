use anyhow::anyhow;
use axum::extract::Path;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Extension, Form, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::controller::AppState;
use crate::errors::Error;
use crate::models::customer::Customer;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(list_customers))
        .route("/add/", get(new_customer_form).post(add_customer))
        .route("/:id/", get(show_customer))
        .route("/:id/edit/", get(edit_customer_form).post(edit_customer))
        .route_layer(Extension(app_state))
}

/// Form fields shared by the add and edit flows. Field names follow the
/// HTML form inputs.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Homepage: list of all customers.
pub async fn list_customers(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, Error> {
    let customers = state.customers.all().await?;
    state
        .views
        .render("customer_list.html", json!({ "customers": customers }))
}

/// Blank form for creating a customer.
pub async fn new_customer_form(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, Error> {
    state.views.render("customer_new_form.html", json!({}))
}

pub async fn add_customer(
    Extension(state): Extension<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, Error> {
    let mut customer = Customer::new(form.first_name, form.last_name, form.phone, form.notes);
    state.customers.save(&mut customer).await?;

    let id = customer
        .id
        .ok_or_else(|| anyhow!("save did not assign a customer id"))?;
    Ok(Redirect::to(&format!("/{id}/")))
}

/// Detail page for one customer, including its reservations.
pub async fn show_customer(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, Error> {
    let customer = state.customers.get(id).await?;
    let reservations = state.customers.reservations(id).await?;

    state.views.render(
        "customer_detail.html",
        json!({ "customer": customer, "reservations": reservations }),
    )
}

pub async fn edit_customer_form(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, Error> {
    let customer = state.customers.get(id).await?;
    state
        .views
        .render("customer_edit_form.html", json!({ "customer": customer }))
}

/// Full overwrite of the four text fields, then back to the detail page.
pub async fn edit_customer(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, Error> {
    let mut customer = state.customers.get(id).await?;
    customer.first_name = form.first_name;
    customer.last_name = form.last_name;
    customer.phone = form.phone;
    customer.notes = form.notes;
    state.customers.save(&mut customer).await?;

    Ok(Redirect::to(&format!("/{id}/")))
}

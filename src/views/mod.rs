use axum::response::Html;
use serde_json::Value;

use crate::errors::Error;

/// Rendering seam. Controllers hand over a template name and a JSON
/// context; what comes back is a complete HTML page.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: &str, context: Value) -> Result<Html<String>, Error>;
}

/// Built-in renderer covering the four pages the controllers request.
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render(&self, template: &str, context: Value) -> Result<Html<String>, Error> {
        let body = match template {
            "customer_list.html" => customer_list(&context),
            "customer_new_form.html" => customer_form("Add a customer", "/add/", &Value::Null),
            "customer_detail.html" => customer_detail(&context),
            "customer_edit_form.html" => {
                let customer = &context["customer"];
                let id = customer["id"].as_i64().unwrap_or_default();
                customer_form("Edit customer", &format!("/{id}/edit/"), customer)
            }
            other => return Err(Error::UnknownTemplate(other.to_string())),
        };
        Ok(Html(page(&body)))
    }
}

fn page(body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><title>Reservation Desk</title></head>\n\
         <body>\n<nav><a href=\"/\">Customers</a> | <a href=\"/add/\">Add customer</a></nav>\n\
         {body}\n</body>\n</html>\n"
    )
}

fn customer_list(context: &Value) -> String {
    let mut items = String::new();
    if let Some(customers) = context["customers"].as_array() {
        for customer in customers {
            let id = customer["id"].as_i64().unwrap_or_default();
            items.push_str(&format!(
                "<li><a href=\"/{id}/\">{}</a></li>\n",
                escape(&display_name(customer))
            ));
        }
    }
    format!("<h1>Customers</h1>\n<ul>\n{items}</ul>")
}

fn customer_detail(context: &Value) -> String {
    let customer = &context["customer"];
    let id = customer["id"].as_i64().unwrap_or_default();
    let mut rows = String::new();
    if let Some(reservations) = context["reservations"].as_array() {
        for reservation in reservations {
            let start = reservation["start_at"].as_str().unwrap_or("invalid date");
            let guests = match reservation["num_guests"].as_i64() {
                Some(n) => n.to_string(),
                None => "unknown".to_string(),
            };
            let notes = reservation["notes"].as_str().unwrap_or("");
            rows.push_str(&format!(
                "<li>{} for {} guests {}</li>\n",
                escape(start),
                escape(&guests),
                escape(notes)
            ));
        }
    }
    format!(
        "<h1>{name}</h1>\n<p>Phone: {phone}</p>\n<p>Notes: {notes}</p>\n\
         <p><a href=\"/{id}/edit/\">Edit</a></p>\n\
         <h2>Reservations</h2>\n<ul>\n{rows}</ul>\n\
         <h2>Add a reservation</h2>\n\
         <form method=\"POST\" action=\"/{id}/add-reservation/\">\n\
         <input type=\"datetime-local\" name=\"startAt\">\n\
         <input type=\"number\" name=\"numGuests\">\n\
         <input type=\"text\" name=\"notes\">\n\
         <button>Save</button>\n</form>",
        name = escape(&display_name(customer)),
        phone = escape(customer["phone"].as_str().unwrap_or("")),
        notes = escape(customer["notes"].as_str().unwrap_or("")),
    )
}

fn customer_form(title: &str, action: &str, customer: &Value) -> String {
    let field = |name: &str, key: &str| {
        format!(
            "<label>{name} <input type=\"text\" name=\"{name}\" value=\"{}\"></label>\n",
            escape(customer[key].as_str().unwrap_or(""))
        )
    };
    format!(
        "<h1>{}</h1>\n<form method=\"POST\" action=\"{}\">\n{}{}{}{}<button>Save</button>\n</form>",
        escape(title),
        escape(action),
        field("firstName", "first_name"),
        field("lastName", "last_name"),
        field("phone", "phone"),
        field("notes", "notes"),
    )
}

fn display_name(customer: &Value) -> String {
    format!(
        "{} {}",
        customer["first_name"].as_str().unwrap_or(""),
        customer["last_name"].as_str().unwrap_or("")
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_links_each_customer_by_id() {
        let html = HtmlRenderer
            .render(
                "customer_list.html",
                json!({ "customers": [
                    { "id": 7, "first_name": "Maya", "last_name": "Chen" },
                ]}),
            )
            .unwrap();
        assert!(html.0.contains("<a href=\"/7/\">Maya Chen</a>"));
    }

    #[test]
    fn detail_escapes_user_text() {
        let html = HtmlRenderer
            .render(
                "customer_detail.html",
                json!({
                    "customer": { "id": 1, "first_name": "<b>", "last_name": "x", "phone": "", "notes": "" },
                    "reservations": [],
                }),
            )
            .unwrap();
        assert!(html.0.contains("&lt;b&gt;"));
        assert!(!html.0.contains("<b>"));
    }

    #[test]
    fn edit_form_is_prefilled_and_posts_back() {
        let html = HtmlRenderer
            .render(
                "customer_edit_form.html",
                json!({ "customer": {
                    "id": 3, "first_name": "Maya", "last_name": "Chen",
                    "phone": "555-0100", "notes": "vip",
                }}),
            )
            .unwrap();
        assert!(html.0.contains("action=\"/3/edit/\""));
        assert!(html.0.contains("value=\"Maya\""));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let err = HtmlRenderer
            .render("customer_delete.html", json!({}))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate(_)));
    }
}

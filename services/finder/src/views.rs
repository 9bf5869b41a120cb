//! HTML views rendered by the request handlers

use askama::Template;
use axum::response::Html;

use crate::{error::AppResult, models::LostItem};

/// Render a template into an HTML body
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// Landing page with the sign-in form and a link to registration
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "choice.html")]
pub struct ChoiceTemplate {
    pub user_id: i64,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "registration_success.html")]
pub struct RegistrationSuccessTemplate {
    pub name: String,
}

/// Shown for an unknown sign-in pair and for a repeated registration
#[derive(Template)]
#[template(path = "invalid_user.html")]
pub struct InvalidUserTemplate;

#[derive(Template)]
#[template(path = "entry_form.html")]
pub struct EntryFormTemplate {
    pub user_id: i64,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "thank_you.html")]
pub struct ThankYouTemplate {
    pub user_id: i64,
}

#[derive(Template)]
#[template(path = "find.html")]
pub struct FindTemplate {
    pub user_id: i64,
    pub error: Option<String>,
}

/// Search results; `notice` is set when the fallback listing is shown
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub user_id: i64,
    pub items: Vec<LostItem>,
    pub notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_escape_user_input() {
        let template = ResultsTemplate {
            user_id: 1,
            items: vec![LostItem {
                id: 1,
                user_id: 1,
                name: "<script>alert(1)</script>".to_string(),
                stream: "CS".to_string(),
                year: "2".to_string(),
                contact: "555".to_string(),
                item_name: "Wallet".to_string(),
                found_date: "2024-01-01".to_string(),
            }],
            notice: None,
        };

        let html = template.render().unwrap();
        assert!(html.contains("Wallet"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("<td>&#60;script&#62;alert(1)&#60;/script&#62;</td>"));
    }

    #[test]
    fn test_entry_form_keeps_user_id_and_error() {
        let html = EntryFormTemplate {
            user_id: 7,
            error: Some("All fields are required".to_string()),
        }
        .render()
        .unwrap();

        assert!(html.contains("/entry_form/7"));
        assert!(html.contains("All fields are required"));
    }

    #[test]
    fn test_find_without_error_has_no_notice() {
        let html = FindTemplate {
            user_id: 3,
            error: None,
        }
        .render()
        .unwrap();

        assert!(html.contains("/find/3"));
        assert!(!html.contains("class=\"error\""));
    }
}

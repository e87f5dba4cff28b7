//! HTML rendering of the team builder page.
//!
//! The page is rebuilt from a [`SessionView`] after every intent. Each control
//! posts one form to `/ui/intent` and the server redirects back to `/`.

use minijinja::{context, Environment};

use crate::errors::AppError;
use crate::models::SessionView;

/// Path every control posts to.
pub const INTENT_PATH: &str = "/ui/intent";

const PAGE_TEMPLATE: &str = include_str!("page.html");

/// Render the whole page. Record text is HTML-escaped by the template engine.
pub fn render_page(view: &SessionView) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    let html = env.get_template("page.html")?.render(context! {
        view => view,
        intent_path => INTENT_PATH,
    })?;
    Ok(html)
}

//! Server-rendered page shell around the reimbursement form.
//!
//! Templates are compiled into the binary and loaded once into a
//! [`minijinja::Environment`] at startup.

use chrono::Datelike;
use minijinja::{context, Environment};
use reimburse_core::form;
use reimburse_core::receipt::ACCEPTED_EXTENSIONS;

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Title shown in the document head and the page header.
pub const APP_TITLE: &str = "Receipt Reimbursement System";

/// Path the form posts to.
pub const SUBMIT_URL: &str = "/api/reimbursements";

/// Holds the compiled page templates.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile all page templates. Fails on a template syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the form page for the given footer year.
    pub fn render_index(&self, year: i32) -> Result<String, minijinja::Error> {
        let accept = ACCEPTED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",");

        self.env.get_template("index.html")?.render(context! {
            title => APP_TITLE,
            year => year,
            accept => accept,
            min_amount => form::MIN_AMOUNT,
            min_description_length => form::MIN_DESCRIPTION_LENGTH,
            success_message => form::SUCCESS_MESSAGE,
            error_message => form::SUBMIT_ERROR_MESSAGE,
            missing_receipt_message => form::MISSING_RECEIPT_MESSAGE,
            submit_label => form::SUBMIT_LABEL,
            submitting_label => form::SUBMITTING_LABEL,
            submit_url => SUBMIT_URL,
        })
    }

    /// Render the form page with the current year in the footer.
    pub fn render_index_now(&self) -> Result<String, minijinja::Error> {
        self.render_index(chrono::Utc::now().year())
    }
}

//! HTML rendering for the vehicle listing page.
//!
//! The page is small enough to build with `format!` directly. Every piece of
//! user-supplied text passes through [`escape`].

use crate::models::{
    service_record::{FieldError, ServiceRecordForm},
    vehicle::VehicleWithRecords,
};

/// Everything the index page displays.
#[derive(Debug, Default)]
pub struct IndexPage<'a> {
    pub vehicles: &'a [VehicleWithRecords],

    /// Field errors from a rejected submission
    pub errors: &'a [FieldError],

    /// Values to re-populate the form with after a rejected submission
    pub form: Option<&'a ServiceRecordForm>,
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

impl IndexPage<'_> {
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str(concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>Vehicle Service Ledger</title>\n",
            "<link rel=\"stylesheet\" href=\"/static/style.css\">\n",
            "</head>\n",
            "<body>\n",
            "<h1>Vehicle Service Ledger</h1>\n",
        ));

        self.render_errors(&mut html);
        self.render_vehicles(&mut html);
        self.render_form(&mut html);

        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_errors(&self, html: &mut String) {
        if self.errors.is_empty() {
            return;
        }

        html.push_str("<div class=\"error\" role=\"alert\">\n<ul>\n");
        for error in self.errors {
            html.push_str(&format!(
                "<li data-field=\"{}\">{}</li>\n",
                error.field,
                escape(&error.message)
            ));
        }
        html.push_str("</ul>\n</div>\n");
    }

    fn render_vehicles(&self, html: &mut String) {
        html.push_str("<h2>Vehicles</h2>\n");

        if self.vehicles.is_empty() {
            html.push_str("<p class=\"empty\">No vehicles recorded yet.</p>\n");
            return;
        }

        for vehicle in self.vehicles {
            html.push_str(&format!(
                "<section class=\"vehicle\" data-vin=\"{vin}\">\n<h3>{model} ({year})</h3>\n<p>VIN: {vin}</p>\n",
                vin = escape(&vehicle.vin),
                model = escape(&vehicle.model),
                year = vehicle.year,
            ));

            if vehicle.records.is_empty() {
                html.push_str("<p class=\"empty\">No service records.</p>\n");
            } else {
                html.push_str(
                    "<table>\n<thead><tr><th>Date</th><th>Description</th><th>Cost</th></tr></thead>\n<tbody>\n",
                );
                for record in &vehicle.records {
                    html.push_str(&format!(
                        "<tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
                        escape(&record.date),
                        escape(&record.description),
                        record.cost
                    ));
                }
                html.push_str(&format!(
                    "</tbody>\n<tfoot><tr><td colspan=\"2\">Total</td><td>{:.2}</td></tr></tfoot>\n</table>\n",
                    vehicle.total_cost()
                ));
            }

            html.push_str("</section>\n");
        }
    }

    fn render_form(&self, html: &mut String) {
        let empty = ServiceRecordForm::default();
        let form = self.form.unwrap_or(&empty);

        html.push_str("<h2>Add service record</h2>\n<form method=\"post\" action=\"/add\">\n");
        for (name, label, value) in [
            ("model", "Model", &form.model),
            ("year", "Year", &form.year),
            ("vin", "VIN", &form.vin),
            ("date", "Date", &form.date),
            ("description", "Description", &form.description),
            ("cost", "Cost", &form.cost),
        ] {
            html.push_str(&format!(
                "<label>{label} <input name=\"{name}\" value=\"{}\"></label>\n",
                escape(value)
            ));
        }
        html.push_str("<button type=\"submit\">Add</button>\n</form>\n");
    }
}

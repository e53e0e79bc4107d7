//! HTML rendering of a single receipt.
//!
//! Produces a standalone, printable page: business header, bill-to and project
//! blocks, the line-item table (driven by the template's column flags) and the
//! footer terms. Every value taken from the database or template is escaped.

use super::format::{
    due_date, escape_text, format_currency, format_date, format_dimensions, html_escape,
    short_id,
};
use crate::{
    config::receipt_template::{ColumnVisibility, ReceiptTemplate},
    core::order::OrderDetails,
    entities::{order_item, receipt},
};
use chrono::NaiveDate;

const STYLE: &str = r"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f9fafb; color: #4b5563; padding: 32px 16px; }
        .receipt { max-width: 896px; margin: 0 auto; background: white; border-radius: 8px; box-shadow: 0 10px 15px rgba(0,0,0,0.1); overflow: hidden; }
        .section { padding: 32px; border-bottom: 1px solid #e5e7eb; }
        .section:last-child { border-bottom: none; }
        .header { display: flex; justify-content: space-between; align-items: flex-start; }
        .business-name { font-size: 24px; font-weight: 700; color: #111827; margin-bottom: 16px; }
        .contact div { margin-bottom: 8px; }
        .badge { display: inline-block; background: #eef2ff; border-radius: 8px; padding: 8px 16px; text-align: right; }
        .badge h2 { font-size: 18px; font-weight: 600; color: #4338ca; }
        .badge p { font-size: 14px; color: #4f46e5; }
        .dates { margin-top: 16px; font-size: 14px; text-align: right; }
        .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
        h3.title { font-size: 18px; font-weight: 600; color: #111827; margin-bottom: 16px; }
        .client-name { font-weight: 500; color: #111827; }
        .label { font-weight: 500; }
        .pre-line { white-space: pre-line; }
        table { width: 100%; border-collapse: collapse; }
        th { text-align: left; padding: 12px 16px; font-size: 14px; font-weight: 600; color: #111827; border-bottom: 1px solid #e5e7eb; }
        td { padding: 16px; color: #111827; }
        .right { text-align: right; }
        tfoot td { border-top: 1px solid #e5e7eb; }
        .amount { font-size: 20px; font-weight: 700; color: #4f46e5; margin-top: 8px; }
        .footer { font-size: 14px; }
        .terms { margin-bottom: 24px; }
        .terms h4 { font-weight: 600; color: #111827; margin-bottom: 8px; }
        .notes { background: #f9fafb; border-radius: 8px; padding: 16px; text-align: center; font-style: italic; }
";

/// Renders the receipt page for `receipt` on `details`, dated as printed on `today`.
#[must_use]
pub fn render_receipt(
    template: &ReceiptTemplate,
    details: &OrderDetails,
    receipt: &receipt::Model,
    today: NaiveDate,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <title>Receipt #{} - {}</title>\n",
        escape_text(&short_id(&receipt.id)),
        escape_text(&template.business_info.name)
    ));
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n<div class=\"receipt\">\n");

    html.push_str(&render_header(template, receipt, today));
    html.push_str(&render_client(details, receipt));
    if template.columns.space_name {
        html.push_str(&render_items(template.columns, &details.items, receipt));
    }
    html.push_str(&render_footer(template));

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_header(
    template: &ReceiptTemplate,
    receipt: &receipt::Model,
    today: NaiveDate,
) -> String {
    let info = &template.business_info;
    format!(
        r#"<div class="section header">
    <div>
        <h1 class="business-name">{name}</h1>
        <div class="contact">
            <div class="pre-line">{address}</div>
            <div>{phone}</div>
            <div>{email}</div>
            <div>{website}</div>
        </div>
    </div>
    <div>
        <div class="badge">
            <h2>RECEIPT</h2>
            <p>#{receipt_ref}</p>
        </div>
        <div class="dates">
            <p>Date: {date}</p>
            <p>Due Date: {due}</p>
        </div>
    </div>
</div>
"#,
        name = escape_text(&info.name),
        address = escape_text(&info.address),
        phone = escape_text(&info.phone),
        email = escape_text(&info.email),
        website = escape_text(&info.website),
        receipt_ref = escape_text(&short_id(&receipt.id)),
        date = format_date(receipt.created_at.date_naive()),
        due = format_date(due_date(today)),
    )
}

fn render_client(details: &OrderDetails, receipt: &receipt::Model) -> String {
    let order = &details.order;
    format!(
        r#"<div class="section grid">
    <div>
        <h3 class="title">Bill To</h3>
        <p class="client-name">{client}</p>
        <p class="pre-line">{address}</p>
        <p>{phone}</p>
        <p>{email}</p>
    </div>
    <div>
        <h3 class="title">Project Details</h3>
        <p><span class="label">Order ID:</span> {order_ref}</p>
        <p><span class="label">Project Name:</span> {project}</p>
        <p><span class="label">Payment Status:</span> {status}</p>
    </div>
</div>
"#,
        client = escape_text(&order.client_name),
        address = escape_text(&order.installation_address),
        phone = escape_text(&order.phone),
        email = escape_text(&order.email),
        order_ref = escape_text(&short_id(&order.id)),
        project = escape_text(&order.project_name),
        status = escape_text(&receipt.status.to_uppercase()),
    )
}

fn visible_column_count(columns: ColumnVisibility) -> usize {
    [
        columns.space_name,
        columns.product_type,
        columns.material_name,
        columns.dimensions,
        columns.price,
    ]
    .into_iter()
    .filter(|shown| *shown)
    .count()
}

fn render_items(
    columns: ColumnVisibility,
    items: &[order_item::Model],
    receipt: &receipt::Model,
) -> String {
    let mut html = String::from("<div class=\"section\">\n<table>\n<thead>\n<tr>\n");
    html.push_str("    <th>Space</th>\n");
    if columns.product_type {
        html.push_str("    <th>Product</th>\n");
    }
    if columns.material_name {
        html.push_str("    <th>Material</th>\n");
    }
    if columns.dimensions {
        html.push_str("    <th>Dimensions</th>\n");
    }
    if columns.price {
        html.push_str("    <th class=\"right\">Price</th>\n");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for item in items {
        html.push_str(&format!(
            "<tr data-item-id=\"{}\">\n    <td>{}</td>\n",
            html_escape(&item.id),
            escape_text(&item.space_name)
        ));
        if columns.product_type {
            html.push_str(&format!("    <td>{}</td>\n", escape_text(&item.product_id)));
        }
        if columns.material_name {
            html.push_str(&format!("    <td>{}</td>\n", escape_text(&item.material)));
        }
        if columns.dimensions {
            html.push_str(&format!(
                "    <td>{}</td>\n",
                escape_text(&format_dimensions(item.height, item.width, item.depth))
            ));
        }
        if columns.price {
            html.push_str(&format!(
                "    <td class=\"right\">{}</td>\n",
                format_currency(item.price)
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str(&format!(
        r#"</tbody>
<tfoot>
<tr>
    <td colspan="{span}" class="right">
        <p>Payment ({percentage}% of total order)</p>
        <p class="amount">{amount}</p>
    </td>
</tr>
</tfoot>
</table>
</div>
"#,
        span = visible_column_count(columns),
        percentage = receipt.payment_percentage,
        amount = format_currency(receipt.amount),
    ));
    html
}

fn render_footer(template: &ReceiptTemplate) -> String {
    format!(
        r#"<div class="section footer">
    <div class="terms">
        <h4>Terms &amp; Conditions</h4>
        <p class="pre-line">{terms}</p>
    </div>
    <div class="notes">
        <p class="pre-line">{notes}</p>
    </div>
</div>
"#,
        terms = escape_text(&template.footer.terms_and_conditions),
        notes = escape_text(&template.footer.notes),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::order;
    use chrono::{TimeZone, Utc};

    fn sample_details() -> (OrderDetails, receipt::Model) {
        let order = order::Model {
            id: "O1-7d9c2f00-aaaa".to_string(),
            client_name: "Jane Doe".to_string(),
            installation_address: "42 Elm Street\nSpringfield".to_string(),
            phone: "555-0199".to_string(),
            email: "jane@example.com".to_string(),
            project_name: "Kitchen Remodel".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        };
        let item = |id: &str, position: i32, space: &str, price: f64| order_item::Model {
            id: id.to_string(),
            order_id: order.id.clone(),
            position,
            space_name: space.to_string(),
            product_id: "Base Cabinet".to_string(),
            material: "Solid Wood".to_string(),
            height: 30.0,
            width: 24.0,
            depth: 12.0,
            price,
        };
        let receipt = receipt::Model {
            id: "R1".to_string(),
            order_id: order.id.clone(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 15, 30, 0).unwrap(),
            status: "paid".to_string(),
            payment_percentage: 50.0,
            amount: 299.99,
        };
        let details = OrderDetails {
            items: vec![item("I1", 0, "Kitchen", 299.99), item("I2", 1, "Pantry", 150.0)],
            receipts: vec![receipt.clone()],
            order,
        };
        (details, receipt)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_render_shows_business_client_and_items() {
        let (details, receipt) = sample_details();
        let html = render_receipt(&ReceiptTemplate::default(), &details, &receipt, today());

        assert!(html.contains("Cabinet Shop"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Kitchen Remodel"));
        assert_eq!(html.matches("<tr data-item-id=").count(), 2);
        assert!(html.contains("30\"H x 24\"W x 12\"D"));
        assert!(html.contains("$299.99"));
        assert!(html.contains("$150.00"));
        assert!(html.contains("Payment (50% of total order)"));
        assert!(html.contains("Payment Status:</span> PAID"));
        assert!(html.contains("#R1"));
        assert!(html.contains("Order ID:</span> O1-7d9c2"));
    }

    #[test]
    fn test_render_dates() {
        let (details, receipt) = sample_details();
        let html = render_receipt(&ReceiptTemplate::default(), &details, &receipt, today());

        assert!(html.contains("Date: 3/5/2024"));
        assert!(html.contains("Due Date: 3/24/2024"));
    }

    #[test]
    fn test_hidden_columns_are_omitted() {
        let (details, receipt) = sample_details();
        let mut template = ReceiptTemplate::default();
        template.columns.product_type = false;
        template.columns.dimensions = false;

        let html = render_receipt(&template, &details, &receipt, today());
        assert!(html.contains("<th>Space</th>"));
        assert!(html.contains("<th>Material</th>"));
        assert!(!html.contains("<th>Product</th>"));
        assert!(!html.contains("<th>Dimensions</th>"));
        assert!(!html.contains("H x "));
        assert!(html.contains("colspan=\"3\""));
    }

    #[test]
    fn test_table_hidden_without_space_column() {
        let (details, receipt) = sample_details();
        let mut template = ReceiptTemplate::default();
        template.columns.space_name = false;

        let html = render_receipt(&template, &details, &receipt, today());
        assert!(!html.contains("<table>"));
        assert!(!html.contains("Payment ("));
        assert!(html.contains("Terms &amp; Conditions"));
    }

    #[test]
    fn test_item_id_attribute_is_fully_escaped() {
        let (mut details, receipt) = sample_details();
        details.items[0].id = "I1\" onclick=\"x".to_string();

        let html = render_receipt(&ReceiptTemplate::default(), &details, &receipt, today());
        assert!(html.contains("data-item-id=\"I1&quot; onclick=&quot;x\""));
        assert!(!html.contains("onclick=\"x"));
    }

    #[test]
    fn test_dynamic_text_is_escaped() {
        let (mut details, receipt) = sample_details();
        details.order.client_name = "<script>alert(1)</script>".to_string();

        let html = render_receipt(&ReceiptTemplate::default(), &details, &receipt, today());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}

//!
//! Self contained HTML receipt stored together with the ticket
//!

use super::dto::Receipt;
use rust_decimal::Decimal;
use time::{macros::format_description, OffsetDateTime};

pub fn render_receipt(receipt: &Receipt) -> String {
    let issued_at = format_issued_at(receipt.issued_at);

    let mut rows = String::new();
    rows.push_str(&row("Ticket No.", receipt.ticket_number));
    rows.push_str(&row("Date", &issued_at));
    rows.push_str(&row("Customer", receipt.customer_name));
    rows.push_str(&row("Phone", receipt.customer_phone));
    if let Some(member_number) = receipt.member_number {
        rows.push_str(&row("Member No.", member_number));
    }
    rows.push_str(&row("Payment mode", receipt.payment_mode.as_ref()));
    if let Some(bank_receipt_number) = receipt.bank_receipt_number {
        rows.push_str(&row("Bank receipt", bank_receipt_number));
    }
    rows.push_str(&row("Branch", receipt.branch));
    rows.push_str(&row("Issued by", receipt.issued_by_name));

    let description = receipt
        .description
        .filter(|description| !description.trim().is_empty())
        .map(|description| format!(r#"<p class="note">{}</p>"#, esc(description)))
        .unwrap_or_default();

    let body = format!(
        r#"<div class="receipt">
<h1 class="center">{organization}</h1>
<h2 class="center">PAYMENT RECEIPT</h2>
<table>{rows}</table>
<div class="amount"><span>Amount</span><strong>TZS {amount}</strong></div>
{description}
<p class="center note">Thank you for saving with {organization}</p>
</div>"#,
        organization = esc(receipt.organization_name),
        amount = format_amount(receipt.amount),
    );

    html_shell(
        &format!("Receipt {}", receipt.ticket_number),
        &body,
    )
}

///
/// Amount rounded to cents with thousands separators, e.g. `150,000.50`
///
pub fn format_amount(amount: Decimal) -> String {
    let formatted = format!("{:.2}", amount.round_dp(2));
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

fn row(label: &str, value: &str) -> String {
    format!("<tr><th>{}</th><td>{}</td></tr>", esc(label), esc(value))
}

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn html_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>{}</title>
<style>
body {{ font-family: Helvetica, Arial, sans-serif; margin: 0; padding: 24px; background: #f4f4f4; color: #111; }}
.receipt {{ max-width: 420px; margin: 0 auto; background: #fff; padding: 20px; border-top: 6px solid #0b5; }}
h1 {{ font-size: 18px; margin: 0; }}
h2 {{ font-size: 13px; letter-spacing: 2px; color: #555; }}
table {{ width: 100%; border-collapse: collapse; font-size: 13px; }}
th {{ text-align: left; color: #555; font-weight: normal; padding: 4px 0; }}
td {{ text-align: right; padding: 4px 0; }}
.amount {{ display: flex; justify-content: space-between; border-top: 1px dashed #111; margin-top: 12px; padding-top: 8px; font-size: 16px; }}
.note {{ color: #666; font-size: 11px; }}
.center {{ text-align: center; }}
</style>
</head>
<body>{}</body>
</html>"#,
        esc(title),
        body
    )
}

///
/// Falls back to the default representation so the receipt never loses its date
///
fn format_issued_at(issued_at: OffsetDateTime) -> String {
    issued_at
        .format(format_description!(
            "[day]/[month]/[year] [hour]:[minute] UTC"
        ))
        .unwrap_or_else(|err| {
            tracing::warn!(%err, %issued_at, "failed to format receipt date");
            issued_at.to_string()
        })
}

use std::io::Write;

use crate::errors::Result;
use crate::schedule::Schedule;

/// CSV column order, fixed by the table layout
pub const CSV_HEADER: [&str; 10] = [
    "installment",
    "opening_balance",
    "interest",
    "vat",
    "principal",
    "base_installment",
    "insurance",
    "admin_fee",
    "total_payment",
    "prepayment",
];

/// render a schedule as CSV, one line per installment, raw unrounded values
pub fn to_csv_string(schedule: &Schedule) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for row in schedule {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            row.installment_number,
            row.opening_balance,
            row.interest,
            row.vat,
            row.principal_portion,
            row.base_installment,
            row.insurance,
            row.admin_fee,
            row.total_payment,
            row.prepayment_applied,
        ));
    }

    out
}

/// write a schedule as CSV to any writer
pub fn write_csv<W: Write>(schedule: &Schedule, writer: &mut W) -> Result<()> {
    writer.write_all(to_csv_string(schedule).as_bytes())?;
    Ok(())
}

//! Statistics and display projections
//!
//! Everything here is a pure function of the challenge state; nothing in
//! this module mutates or persists.

mod engine;
mod report;
mod status;

pub use engine::Statistics;
pub use report::render_report;
pub use status::{ChartData, StatusView};

/// Format a count with thousands separators (`1234567` -> `1,234,567`)
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

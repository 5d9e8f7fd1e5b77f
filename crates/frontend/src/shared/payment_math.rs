//! Advance/balance arithmetic for service bookings.

use contracts::domain::booking::PaymentTerms;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaymentBreakdown {
    pub total: f64,
    pub advance: f64,
    pub balance: f64,
    pub advance_percent: f64,
    pub balance_percent: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Split `total` into the paid advance and the outstanding balance.
///
/// The advance is clamped to `[0, total]`. A non-positive total has no
/// meaningful percentages and yields zeros.
pub fn breakdown(total: f64, advance: f64) -> PaymentBreakdown {
    if !total.is_finite() || total <= 0.0 {
        return PaymentBreakdown {
            total: 0.0,
            advance: 0.0,
            balance: 0.0,
            advance_percent: 0.0,
            balance_percent: 0.0,
        };
    }
    let advance = if advance.is_finite() { advance.clamp(0.0, total) } else { 0.0 };
    let balance = total - advance;
    let advance_percent = round2(advance / total * 100.0);
    PaymentBreakdown {
        total: round2(total),
        advance: round2(advance),
        balance: round2(balance),
        advance_percent,
        balance_percent: round2(100.0 - advance_percent),
    }
}

pub fn breakdown_terms(terms: &PaymentTerms) -> PaymentBreakdown {
    breakdown(terms.total_amount, terms.advance_paid)
}

/// Advance amount for a chosen percentage of `total` (percent clamped to 0..=100).
pub fn advance_for_percent(total: f64, percent: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 || !percent.is_finite() {
        return 0.0;
    }
    round2(total * percent.clamp(0.0, 100.0) / 100.0)
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

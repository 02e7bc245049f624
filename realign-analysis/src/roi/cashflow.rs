//! Discounted-cashflow math: NPV, interpolated payback, IRR.

use realign_core::errors::InputError;

/// Outcome of a single cashflow projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projection {
    pub npv: f64,
    pub roi_pct: f64,
    pub payback_months: Option<f64>,
}

/// The cost base ROI percentages are computed against: the
/// implementation cost when one exists, otherwise the baseline annual
/// cost. A change with neither is unanswerable as a percentage.
pub(crate) fn cost_base(implementation_cost: f64, baseline_annual_cost: f64) -> Result<f64, InputError> {
    if implementation_cost > 0.0 {
        Ok(implementation_cost)
    } else if baseline_annual_cost > 0.0 {
        Ok(baseline_annual_cost)
    } else {
        Err(InputError::NonFiniteNumber {
            field: "cost_base".to_string(),
            value: 0.0,
        })
    }
}

/// Undiscounted projection: total benefit over the horizon against the
/// implementation cost, annualized with no time value of money.
pub(crate) fn simple_projection(
    implementation_cost: f64,
    annual_benefit: f64,
    horizon_months: i64,
    base: f64,
) -> Projection {
    let years = horizon_months as f64 / 12.0;
    let total_benefit = annual_benefit * years;
    let roi_pct = (total_benefit - implementation_cost) / base * 100.0;
    let payback_months = if annual_benefit > 0.0 && implementation_cost > 0.0 {
        let months = implementation_cost / annual_benefit * 12.0;
        (months <= horizon_months as f64).then_some(months)
    } else if implementation_cost == 0.0 && annual_benefit > 0.0 {
        Some(0.0)
    } else {
        None
    };
    Projection {
        npv: total_benefit - implementation_cost,
        roi_pct,
        payback_months,
    }
}

/// Discounted projection over annual periods.
///
/// NPV sums `cashflow_t / (1 + r)^t` for each year in the horizon (a
/// trailing partial year contributes proportionally). Payback is the
/// first period where cumulative discounted cashflow turns
/// non-negative, with linear interpolation inside the crossing period
/// for a fractional month.
pub(crate) fn detailed_projection(
    implementation_cost: f64,
    annual_benefit: f64,
    discount_rate: f64,
    horizon_months: i64,
    base: f64,
) -> Projection {
    let years = horizon_months as f64 / 12.0;
    let whole_years = years.floor() as i64;
    let trailing_fraction = years - whole_years as f64;

    let mut discounted_total = 0.0;
    let mut cumulative = -implementation_cost;
    let mut payback_months = if cumulative >= 0.0 { Some(0.0) } else { None };

    for t in 1..=whole_years {
        let cashflow = annual_benefit / (1.0 + discount_rate).powi(t as i32);
        discounted_total += cashflow;
        let before = cumulative;
        cumulative += cashflow;
        if payback_months.is_none() && cumulative >= 0.0 && cashflow > 0.0 {
            // Interpolate within the crossing year.
            let fraction = -before / cashflow;
            payback_months = Some(((t - 1) as f64 + fraction) * 12.0);
        }
    }
    if trailing_fraction > 0.0 {
        let t = whole_years + 1;
        let cashflow =
            annual_benefit * trailing_fraction / (1.0 + discount_rate).powi(t as i32);
        discounted_total += cashflow;
        let before = cumulative;
        cumulative += cashflow;
        if payback_months.is_none() && cumulative >= 0.0 && cashflow > 0.0 {
            let fraction = -before / cashflow;
            payback_months =
                Some((whole_years as f64 + fraction * trailing_fraction) * 12.0);
        }
    }

    let npv = discounted_total - implementation_cost;
    let roi_pct = npv / base * 100.0;

    Projection {
        npv,
        roi_pct,
        payback_months,
    }
}

/// Internal rate of return via Newton-Raphson over annual periods.
/// Returns `None` when the iteration fails to converge or the inputs
/// leave the derivative degenerate.
pub(crate) fn irr(implementation_cost: f64, annual_benefit: f64, horizon_months: i64) -> Option<f64> {
    if implementation_cost <= 0.0 || annual_benefit <= 0.0 {
        return None;
    }
    let years = (horizon_months as f64 / 12.0).ceil() as i32;
    if years < 1 {
        return None;
    }

    let max_iterations = 100;
    let tolerance = 1e-4;
    let mut rate: f64 = 0.1;

    for _ in 0..max_iterations {
        let mut npv = -implementation_cost;
        let mut derivative = 0.0;
        for t in 1..=years {
            let factor = (1.0 + rate).powi(t);
            npv += annual_benefit / factor;
            derivative -= t as f64 * annual_benefit / (factor * (1.0 + rate));
        }
        if derivative.abs() < f64::EPSILON {
            return None;
        }
        let next = rate - npv / derivative;
        if !next.is_finite() || next <= -1.0 {
            return None;
        }
        if (next - rate).abs() < tolerance {
            return Some(next);
        }
        rate = next;
    }
    None
}

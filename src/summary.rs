//! Human-readable run summary.

use crate::analyzer::{AnalysisReport, FitResult};
use crate::dataset::REFERENCE_MODULUS;
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Format an integer with comma thousands separators.
///
/// # Example
/// ```rust
/// use quadruplet_zeta::summary::group_thousands;
///
/// assert_eq!(group_thousands(1996430175), "1,996,430,175");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(n: u64) -> String {
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

/// Scientific notation with a signed exponent of at least two digits, e.g.
/// `2.10e-08`.
///
/// # Example
/// ```rust
/// use quadruplet_zeta::summary::format_scientific;
///
/// assert_eq!(format_scientific(2.1e-8, 2), "2.10e-08");
/// assert_eq!(format_scientific(1.5e-123, 1), "1.5e-123");
/// ```
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

fn write_fit_line(f: &mut fmt::Formatter<'_>, fit: &FitResult) -> fmt::Result {
    writeln!(
        f,
        "   r = {:.4}, p = {}",
        fit.correlation,
        format_scientific(fit.p_value, 2)
    )
}

/// The four numbered result sections plus the effective modulus comparison.
impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let alpha = self.optimal_alpha();
        let q_eff = self.effective_modulus();
        let q_third = REFERENCE_MODULUS / 3.0;

        writeln!(f, "{}", rule)?;
        writeln!(f, "Q47 Quadruplet - Riemann Zero Correlation Analysis")?;
        writeln!(f, "{}", rule)?;

        writeln!(f, "\n1. Scaled Position Correlation:")?;
        write_fit_line(f, &self.scaled_linear)?;

        writeln!(f, "\n2. Optimal Power Transform:")?;
        writeln!(f, "   α = {:.2}", alpha)?;
        write_fit_line(f, &self.power_transform)?;

        writeln!(f, "\n3. Log-Linear Fit (ln(n) vs γ):")?;
        write_fit_line(f, &self.log_linear)?;
        writeln!(
            f,
            "   γ ≈ {:.3} * ln(n) + {:.3}",
            self.log_linear_slope(),
            self.log_linear_intercept()
        )?;

        writeln!(f, "\n4. Effective Modulus:")?;
        writeln!(f, "   q_eff = e^{:.2} = {:.1}", alpha, q_eff)?;
        writeln!(f, "   q/3 = {}/3 = {:.2}", REFERENCE_MODULUS, q_third)?;
        writeln!(f, "   Ratio: q_eff / (q/3) = {:.3}", q_eff / q_third)?;

        writeln!(f, "\n{}", rule)?;
        writeln!(
            f,
            "KEY RESULT: n^(1/{:.2}) ~ γ with r = {:.3}",
            alpha, self.power_transform.correlation
        )?;
        writeln!(f, "CONJECTURE: q_eff ≈ q/3 (triplet dimensional reduction)")?;
        write!(f, "{}", rule)
    }
}

/// Render the report as printed at the end of a run.
pub fn format_report(report: &AnalysisReport) -> String {
    report.to_string()
}

/// Numbered listing of quadruplet positions
#[derive(Debug, Clone, Copy)]
pub struct QuadrupletListing<'a>(pub &'a [u64]);

impl fmt::Display for QuadrupletListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quadruplet positions:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for (i, &n) in self.0.iter().enumerate() {
            writeln!(f, "  k={:2}: n = {:>13} [verified]", i + 1, group_thousands(n))?;
        }
        write!(f, "\nTotal: {} quadruplets", self.0.len())
    }
}

/// Numbered listing of the quadruplet positions.
pub fn format_quadruplet_listing(positions: &[u64]) -> String {
    QuadrupletListing(positions).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::FitMethod;
    use std::collections::BTreeMap;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(23159557), "23,159,557");
        assert_eq!(group_thousands(123456), "123,456");
    }

    #[test]
    fn test_listing_alignment() {
        let listing = format_quadruplet_listing(&[23159557, 1996430175]);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[2], "  k= 1: n =    23,159,557 [verified]");
        assert_eq!(lines[3], "  k= 2: n = 1,996,430,175 [verified]");
        assert!(listing.ends_with("Total: 2 quadruplets"));
    }

    #[test]
    fn test_report_sections() {
        let mut log_params = BTreeMap::new();
        log_params.insert("slope".to_string(), 11.70986);
        log_params.insert("intercept".to_string(), -192.7982);
        let report = AnalysisReport {
            scaled_linear: FitResult {
                method: FitMethod::ScaledLinear,
                correlation: 0.95827,
                p_value: 2.1e-8,
                parameters: BTreeMap::new(),
            },
            power_transform: FitResult {
                method: FitMethod::PowerTransform,
                correlation: 0.99353,
                p_value: 1.5e-13,
                parameters: BTreeMap::new(),
            },
            log_linear: FitResult {
                method: FitMethod::LogLinear,
                correlation: 0.96683,
                p_value: 4.4e-9,
                parameters: log_params,
            },
            optimal_alpha: 2.7417,
            effective_modulus: 2.7417_f64.exp(),
        };

        let text = format_report(&report);
        assert!(text.contains("   r = 0.9583, p = 2.10e-08"));
        assert!(text.contains("   r = 0.9935, p = 1.50e-13"));
        assert_eq!(text, report.to_string());
        assert!(text.contains("   α = 2.74"));
        assert!(text.contains("   γ ≈ 11.710 * ln(n) + -192.798"));
        assert!(text.contains("   q_eff = e^2.74 = 15.5"));
        assert!(text.contains("   q/3 = 47/3 = 15.67"));
        assert!(text.contains("Ratio: q_eff / (q/3) = 0.990"));
    }

    #[test]
    fn test_scientific_exponent_padding() {
        assert_eq!(format_scientific(4.4e-9, 2), "4.40e-09");
        assert_eq!(format_scientific(1.0, 2), "1.00e+00");
        assert_eq!(format_scientific(0.0, 2), "0.00e+00");
        assert_eq!(format_scientific(12345.0, 1), "1.2e+04");
        assert_eq!(format_scientific(f64::NAN, 2), "NaN");
    }
}

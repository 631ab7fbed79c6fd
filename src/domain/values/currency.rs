use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quote currency for prices and market caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    /// Lowercase code used by the upstream API (`vs_currency`, map keys).
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "inr",
            Currency::Usd => "usd",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }

    /// Render an amount with magnitude suffixes.
    ///
    /// INR uses the Indian tiers (lakh `L`, crore `Cr`) below a billion and
    /// lakh-style digit grouping below one lakh. USD uses `M` and thousands
    /// grouping. Sub-unit amounts keep six decimals so that micro-cap prices
    /// stay readable.
    pub fn format_amount(&self, value: Option<f64>) -> String {
        let Some(num) = value.filter(|v| v.is_finite()) else {
            return "N/A".to_string();
        };
        let sign = if num < 0.0 { "-" } else { "" };
        let abs = num.abs();
        let sym = self.symbol();

        let body = match self {
            Currency::Inr => {
                if abs >= 1e12 {
                    format!("{:.2}T", abs / 1e12)
                } else if abs >= 1e9 {
                    format!("{:.2}B", abs / 1e9)
                } else if abs >= 1e7 {
                    format!("{:.2}Cr", abs / 1e7)
                } else if abs >= 1e5 {
                    format!("{:.2}L", abs / 1e5)
                } else if abs >= 1.0 {
                    grouped(abs, 2, Grouping::Indian)
                } else {
                    format!("{abs:.6}")
                }
            }
            Currency::Usd => {
                if abs >= 1e12 {
                    format!("{:.2}T", abs / 1e12)
                } else if abs >= 1e9 {
                    format!("{:.2}B", abs / 1e9)
                } else if abs >= 1e6 {
                    format!("{:.2}M", abs / 1e6)
                } else if abs >= 1.0 {
                    grouped(abs, 2, Grouping::Western)
                } else {
                    format!("{abs:.6}")
                }
            }
        };

        format!("{sign}{sym}{body}")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inr" => Ok(Currency::Inr),
            "usd" => Ok(Currency::Usd),
            _ => Err(format!("Unsupported currency: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 12,34,567
    Indian,
    /// 1,234,567
    Western,
}

/// Digit-grouped rendering of a non-negative number with at most
/// `max_fraction` decimals and no trailing zeros.
pub fn grouped(value: f64, max_fraction: usize, grouping: Grouping) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = digits.len();
    let mut width = 3;
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(digits[start..end].iter().collect());
        end = start;
        if grouping == Grouping::Indian {
            width = 2;
        }
    }
    groups.reverse();
    let int_grouped = groups.join(",");

    if frac_part.is_empty() {
        int_grouped
    } else {
        format!("{int_grouped}.{frac_part}")
    }
}

use serde::Deserialize;

use crate::core::FinancialInputs;
use crate::error::InputError;

/// Longest projection accepted from callers, in months.
pub const MAX_TIMEFRAME_MONTHS: i64 = 1_200;
/// Largest accepted monetary amount. At the 150% capacity ceiling and the
/// 1.15 peak season, a full horizon at this amount stays far inside `i64`.
pub const MAX_MONETARY_AMOUNT: i64 = 1_000_000_000_000;

/// A numeric request field as sent by form-driven clients: a JSON number or a
/// string holding one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericField {
    fn coerce(&self, field: &'static str) -> Result<i64, InputError> {
        match self {
            NumericField::Int(v) => Ok(*v),
            NumericField::Float(v) => float_to_int(*v, field),
            NumericField::Text(raw) => {
                let trimmed = raw.trim();
                if let Ok(v) = trimmed.parse::<i64>() {
                    return Ok(v);
                }
                let v = trimmed
                    .parse::<f64>()
                    .map_err(|_| InputError::NotNumeric { field })?;
                float_to_int(v, field)
            }
            NumericField::Other(_) => Err(InputError::NotNumeric { field }),
        }
    }
}

fn float_to_int(value: f64, field: &'static str) -> Result<i64, InputError> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(InputError::NotNumeric { field });
    }
    Ok(value.trunc() as i64)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatePayload {
    pub initial_investment: Option<NumericField>,
    pub expected_monthly_revenue: Option<NumericField>,
    pub monthly_operating_cost: Option<NumericField>,
    pub timeframe: Option<NumericField>,
    pub timeframe_months: Option<NumericField>,
    pub business_model: Option<String>,
}

pub fn inputs_from_payload(payload: CalculatePayload) -> Result<FinancialInputs, InputError> {
    let initial_investment = required(payload.initial_investment, "initialInvestment")?;
    let expected_monthly_revenue =
        required(payload.expected_monthly_revenue, "expectedMonthlyRevenue")?;
    let monthly_operating_cost = required(payload.monthly_operating_cost, "monthlyOperatingCost")?;
    let timeframe_months = required(
        payload.timeframe_months.or(payload.timeframe),
        "timeframeMonths",
    )?;

    build_inputs(
        initial_investment,
        expected_monthly_revenue,
        monthly_operating_cost,
        timeframe_months,
        payload.business_model,
    )
}

/// Checks the numeric fields and assembles the engine inputs. Blank business
/// model labels are treated as absent.
pub fn build_inputs(
    initial_investment: i64,
    expected_monthly_revenue: i64,
    monthly_operating_cost: i64,
    timeframe_months: i64,
    business_model: Option<String>,
) -> Result<FinancialInputs, InputError> {
    positive(initial_investment, "initialInvestment")?;
    positive(expected_monthly_revenue, "expectedMonthlyRevenue")?;
    positive(monthly_operating_cost, "monthlyOperatingCost")?;
    positive(timeframe_months, "timeframeMonths")?;
    at_most(initial_investment, "initialInvestment", MAX_MONETARY_AMOUNT)?;
    at_most(expected_monthly_revenue, "expectedMonthlyRevenue", MAX_MONETARY_AMOUNT)?;
    at_most(monthly_operating_cost, "monthlyOperatingCost", MAX_MONETARY_AMOUNT)?;
    at_most(timeframe_months, "timeframeMonths", MAX_TIMEFRAME_MONTHS)?;

    Ok(FinancialInputs {
        initial_investment,
        expected_monthly_revenue,
        monthly_operating_cost,
        timeframe_months: timeframe_months as u32,
        business_model: business_model.filter(|label| !label.trim().is_empty()),
    })
}

fn required(value: Option<NumericField>, field: &'static str) -> Result<i64, InputError> {
    value
        .ok_or(InputError::Missing { field })?
        .coerce(field)
}

fn at_most(value: i64, field: &'static str, max: i64) -> Result<(), InputError> {
    if value > max {
        return Err(InputError::TooLarge { field, max });
    }
    Ok(())
}

fn positive(value: i64, field: &'static str) -> Result<(), InputError> {
    if value <= 0 {
        return Err(InputError::NotPositive { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ZeroVariance, run_projection};

    fn parse(json: &str) -> Result<FinancialInputs, InputError> {
        let payload = serde_json::from_str::<CalculatePayload>(json).expect("valid JSON");
        inputs_from_payload(payload)
    }

    #[test]
    fn parses_numeric_fields() {
        let inputs = parse(
            r#"{"initialInvestment":100000,"expectedMonthlyRevenue":20000,
                "monthlyOperatingCost":12000,"timeframeMonths":12,
                "businessModel":"Franchise"}"#,
        )
        .expect("valid inputs");

        assert_eq!(inputs.initial_investment, 100_000);
        assert_eq!(inputs.expected_monthly_revenue, 20_000);
        assert_eq!(inputs.monthly_operating_cost, 12_000);
        assert_eq!(inputs.timeframe_months, 12);
        assert_eq!(inputs.business_model.as_deref(), Some("Franchise"));
    }

    #[test]
    fn coerces_strings_and_floats_to_integers() {
        let inputs = parse(
            r#"{"initialInvestment":"100000","expectedMonthlyRevenue":" 20000.75 ",
                "monthlyOperatingCost":12000.9,"timeframe":"24"}"#,
        )
        .expect("valid inputs");

        assert_eq!(inputs.initial_investment, 100_000);
        assert_eq!(inputs.expected_monthly_revenue, 20_000);
        assert_eq!(inputs.monthly_operating_cost, 12_000);
        assert_eq!(inputs.timeframe_months, 24);
        assert!(inputs.business_model.is_none());
    }

    #[test]
    fn rejects_missing_field_by_name() {
        let err = parse(r#"{"initialInvestment":1,"expectedMonthlyRevenue":1,"timeframeMonths":1}"#)
            .expect_err("must reject missing cost");
        assert_eq!(
            err,
            InputError::Missing {
                field: "monthlyOperatingCost"
            }
        );
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = parse(
            r#"{"initialInvestment":"lots","expectedMonthlyRevenue":1,
                "monthlyOperatingCost":1,"timeframeMonths":1}"#,
        )
        .expect_err("must reject text");
        assert!(err.to_string().contains("initialInvestment"));
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = parse(
            r#"{"initialInvestment":1,"expectedMonthlyRevenue":1,
                "monthlyOperatingCost":1,"timeframeMonths":0}"#,
        )
        .expect_err("must reject zero timeframe");
        assert_eq!(
            err,
            InputError::NotPositive {
                field: "timeframeMonths"
            }
        );
    }

    #[test]
    fn rejects_oversized_timeframe() {
        let err = build_inputs(1, 1, 1, MAX_TIMEFRAME_MONTHS + 1, None)
            .expect_err("must reject long horizon");
        assert!(matches!(err, InputError::TooLarge { .. }));
    }

    #[test]
    fn rejects_non_scalar_json_values() {
        for value in ["true", "[1]", r#"{"amount":1}"#] {
            let json = format!(
                r#"{{"initialInvestment":1,"expectedMonthlyRevenue":{value},
                    "monthlyOperatingCost":1,"timeframeMonths":1}}"#
            );
            let err = parse(&json).expect_err("must reject non-scalar value");
            assert_eq!(
                err,
                InputError::NotNumeric {
                    field: "expectedMonthlyRevenue"
                },
                "value {value}"
            );
        }
    }

    #[test]
    fn rejects_amounts_above_ceiling() {
        let err = build_inputs(1, MAX_MONETARY_AMOUNT + 1, 1, 12, None)
            .expect_err("must reject oversized revenue");
        assert_eq!(
            err,
            InputError::TooLarge {
                field: "expectedMonthlyRevenue",
                max: MAX_MONETARY_AMOUNT
            }
        );

        let err = build_inputs(10_000_000_000_000_000, 1, 1, 12, None)
            .expect_err("must reject oversized investment");
        assert!(matches!(err, InputError::TooLarge { .. }));
    }

    #[test]
    fn projection_at_input_ceiling_keeps_exact_totals() {
        let inputs = build_inputs(
            MAX_MONETARY_AMOUNT,
            MAX_MONETARY_AMOUNT,
            1,
            MAX_TIMEFRAME_MONTHS,
            Some("Direct-to-consumer sales".to_string()),
        )
        .expect("ceiling values are valid");
        let result = run_projection(&inputs, &mut ZeroVariance);

        assert_eq!(result.monthly_data.len(), MAX_TIMEFRAME_MONTHS as usize);
        let revenue: i128 = result.monthly_data.iter().map(|p| i128::from(p.revenue)).sum();
        assert_eq!(i128::from(result.total_revenue), revenue);
        assert_eq!(result.total_operating_cost, MAX_TIMEFRAME_MONTHS);
        assert_eq!(
            result.monthly_data[1199].cumulative_profit,
            result.net_profit - MAX_MONETARY_AMOUNT
        );
        assert!(result.total_revenue < i64::MAX / 1_000);
    }

    #[test]
    fn blank_business_model_is_absent() {
        let inputs = build_inputs(1, 1, 1, 1, Some("   ".to_string())).expect("valid inputs");
        assert!(inputs.business_model.is_none());
    }
}

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{LedgerError, Result};
use crate::pricing::RateTierProvider;
use crate::types::RateTier;

/// rate tier schedule supplied by upstream configuration records
///
/// tier order is preserved as configured; selection tie-breaks depend on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSchedule {
    tiers: Vec<RateTier>,
}

impl TierSchedule {
    /// create a schedule, rejecting tiers that cannot be priced
    pub fn new(tiers: Vec<RateTier>) -> Result<Self> {
        for tier in &tiers {
            if tier.installment_count == 0 {
                return Err(LedgerError::InvalidConfiguration {
                    message: "tier installment count must be greater than zero".to_string(),
                });
            }
            if tier.rate.is_negative() {
                return Err(LedgerError::InvalidConfiguration {
                    message: format!("tier rate must not be negative: {}", tier.rate),
                });
            }
        }

        Ok(Self { tiers })
    }

    /// empty schedule, prices everything as "no tier available"
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// typical employee-purchase schedule: short terms at low rates
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RateTier::new(3, Rate::from_percentage(dec!(1.5))),
                RateTier::new(6, Rate::from_percentage(dec!(2.0))),
                RateTier::new(12, Rate::from_percentage(dec!(3.5))),
            ],
        }
    }

    /// promotional schedule with no interest on any term
    pub fn interest_free(installment_counts: &[u32]) -> Result<Self> {
        Self::new(
            installment_counts
                .iter()
                .map(|&count| RateTier::new(count, Rate::ZERO))
                .collect(),
        )
    }

    /// parse a schedule from a configuration record's json body
    pub fn from_json(json: &str) -> Result<Self> {
        let tiers: Vec<RateTier> =
            serde_json::from_str(json).map_err(|e| LedgerError::InvalidConfiguration {
                message: format!("unparsable tier schedule: {e}"),
            })?;
        Self::new(tiers)
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }
}

impl RateTierProvider for TierSchedule {
    fn rate_tiers(&self) -> Result<Vec<RateTier>> {
        Ok(self.tiers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_installment_count() {
        let result = TierSchedule::new(vec![RateTier::new(0, Rate::from_percentage(dec!(1.0)))]);
        assert!(matches!(
            result,
            Err(LedgerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let result = TierSchedule::new(vec![RateTier::new(3, Rate::from_decimal(dec!(-0.01)))]);
        assert!(matches!(
            result,
            Err(LedgerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_preserves_configured_order() {
        let schedule = TierSchedule::new(vec![
            RateTier::new(12, Rate::from_percentage(dec!(3.5))),
            RateTier::new(3, Rate::from_percentage(dec!(1.5))),
        ])
        .unwrap();

        assert_eq!(schedule.tiers()[0].installment_count, 12);
        assert_eq!(schedule.tiers()[1].installment_count, 3);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"installment_count": 3, "rate": "0.015"},
            {"installment_count": 6, "rate": "0.02"}
        ]"#;

        let schedule = TierSchedule::from_json(json).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.tiers()[0].rate, Rate::from_percentage(dec!(1.5)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(TierSchedule::from_json("not json").is_err());
        assert!(TierSchedule::from_json(r#"[{"installment_count": 0, "rate": "0.01"}]"#).is_err());
    }

    #[test]
    fn test_interest_free() {
        let schedule = TierSchedule::interest_free(&[3, 6]).unwrap();
        assert!(schedule.tiers().iter().all(|t| t.rate == Rate::ZERO));
    }

    #[test]
    fn test_provider_returns_configured_tiers() {
        let schedule = TierSchedule::standard();
        let tiers = schedule.rate_tiers().unwrap();
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].installment_count, 3);
    }
}

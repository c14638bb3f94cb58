use serde::{Deserialize, Serialize};

use crate::models::token::Token;

// Aggregator quote body, kept as received so the fee math can read the
// threshold figures straight from it. Unknown route fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    #[serde(default)]
    pub input_mint: Option<String>,
    #[serde(default)]
    pub output_mint: Option<String>,
    #[serde(default)]
    pub in_amount: Option<String>,
    pub out_amount: String,
    pub other_amount_threshold: String,
    #[serde(default)]
    pub slippage_bps: Option<u16>,
    #[serde(default)]
    pub price_impact_pct: Option<String>,
}

// One settled pricing round for a (input, output, amount) triple. Superseded
// wholesale by the next round, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDetails {
    pub input: Token,
    pub output: Token,
    pub input_amount: String,
    pub estimated_output: String,
    pub quote: SwapQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityTip {
    #[default]
    Standard,
    Fast,
    Turbo,
}

impl PriorityTip {
    pub fn sol(&self) -> f64 {
        match self {
            PriorityTip::Standard => 0.00003,
            PriorityTip::Fast => 0.0001,
            PriorityTip::Turbo => 0.0003,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimate {
    pub slippage_reserve: String,
    pub service_fee_percent: String,
    pub priority_tip: String,
    pub estimated_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aggregator_body_parses_with_extra_route_fields() {
        let body = json!({
            "inputMint": "So11111111111111111111111111111111111111112",
            "inAmount": "1500000000",
            "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "outAmount": "2500000",
            "otherAmountThreshold": "2487500",
            "swapMode": "ExactIn",
            "slippageBps": 50,
            "priceImpactPct": "0.0001",
            "routePlan": [{ "percent": 100 }],
            "contextSlot": 299184025u64
        });

        let quote: SwapQuote = serde_json::from_value(body).unwrap();

        assert_eq!(quote.out_amount, "2500000");
        assert_eq!(quote.other_amount_threshold, "2487500");
        assert_eq!(quote.slippage_bps, Some(50));
        assert_eq!(quote.price_impact_pct.as_deref(), Some("0.0001"));
    }

    #[test]
    fn body_without_out_amount_is_rejected() {
        let body = json!({ "otherAmountThreshold": "2487500" });
        assert!(serde_json::from_value::<SwapQuote>(body).is_err());
    }

    #[test]
    fn tip_tiers_step_up() {
        assert_eq!(PriorityTip::default(), PriorityTip::Standard);
        assert!(PriorityTip::Standard.sol() < PriorityTip::Fast.sol());
        assert!(PriorityTip::Fast.sol() < PriorityTip::Turbo.sol());
        assert_eq!(PriorityTip::Turbo.sol(), 0.0003);
    }
}

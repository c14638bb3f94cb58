use log::error;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::quotes::{LAMPORTS_PER_SOL, QUOTE_API_BASE, SERVICE_FEE_PERCENT, SLIPPAGE_BPS};
use crate::models::quotes::{FeeEstimate, PriorityTip, QuoteDetails, SwapQuote};
use crate::models::token::Token;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Quote request error: {0}")]
    Request(String),

    #[error("Quote HTTP error status: {0}")]
    Status(u16),

    #[error("Quote parsing error: {0}")]
    Parse(String),

    #[error("Quote URL error: {0}")]
    Url(String),

    #[error("Quote amount out of range: {0}")]
    Amount(String),
}

pub fn parse_positive_amount(amount: &str) -> Option<f64> {
    let parsed: f64 = amount.trim().parse().ok()?;
    if parsed.is_finite() && parsed > 0.0 {
        Some(parsed)
    } else {
        None
    }
}

// None when the scaled amount cannot fit the aggregator's u64 field.
pub fn to_base_units(amount: f64, decimals: u8) -> Option<u64> {
    let scaled = (amount * 10f64.powi(decimals as i32)).round();
    if scaled >= 0.0 && scaled < u64::MAX as f64 {
        Some(scaled as u64)
    } else {
        None
    }
}

pub async fn fetch_swap_quote(
    client: &Client,
    base_url: &str,
    input: &Token,
    output: &Token,
    amount: f64,
) -> Result<QuoteDetails, QuoteError> {
    let base_units = to_base_units(amount, input.decimals).ok_or_else(|| {
        QuoteError::Amount(format!("{} at {} decimals", amount, input.decimals))
    })?;
    let amount_param = base_units.to_string();
    let slippage_param = SLIPPAGE_BPS.to_string();
    let url = Url::parse_with_params(
        &format!("{}/v6/quote", base_url),
        [
            ("inputMint", input.address.as_str()),
            ("outputMint", output.address.as_str()),
            ("amount", amount_param.as_str()),
            ("slippageBps", slippage_param.as_str()),
        ],
    )
    .map_err(|e| QuoteError::Url(e.to_string()))?;

    let res = client
        .get(url)
        .send()
        .await
        .map_err(|e| QuoteError::Request(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(QuoteError::Status(status.as_u16()));
    }

    let quote: SwapQuote = res
        .json()
        .await
        .map_err(|e| QuoteError::Parse(e.to_string()))?;

    let out_amount: f64 = quote.out_amount.parse().unwrap_or_default();
    let estimated_output = format!("{:.4}", out_amount / 10f64.powi(output.decimals as i32));

    Ok(QuoteDetails {
        input: input.clone(),
        output: output.clone(),
        input_amount: amount.to_string(),
        estimated_output,
        quote,
    })
}

// Holds the newest settled quote for one UI session. Tickets order the
// rounds: a commit lands only while its ticket is still the latest one
// handed out, so a slow response can never overwrite a newer round.
pub struct QuoteSession {
    client: Client,
    base_url: String,
    seq: u64,
    latest: Option<QuoteDetails>,
}

impl QuoteSession {
    pub fn new() -> Self {
        QuoteSession::with_base_url(QUOTE_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        QuoteSession {
            client: Client::new(),
            base_url: base_url.to_string(),
            seq: 0,
            latest: None,
        }
    }

    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn commit(&mut self, ticket: u64, details: QuoteDetails) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.latest = Some(details);
        true
    }

    pub fn latest(&self) -> Option<&QuoteDetails> {
        self.latest.as_ref()
    }

    // Does nothing unless both tokens are picked and the amount is a
    // positive number. On failure the previous quote stays on display.
    pub async fn refresh(
        &mut self,
        input: Option<&Token>,
        output: Option<&Token>,
        amount: &str,
    ) -> Option<&QuoteDetails> {
        let (input, output) = match (input, output) {
            (Some(input), Some(output)) => (input, output),
            _ => return self.latest.as_ref(),
        };
        let amount = match parse_positive_amount(amount) {
            Some(amount) => amount,
            None => return self.latest.as_ref(),
        };

        let ticket = self.begin();
        let outcome = fetch_swap_quote(&self.client, &self.base_url, input, output, amount).await;
        match outcome {
            Ok(details) => {
                self.commit(ticket, details);
            }
            Err(e) => error!("quote refresh failed: {}", e),
        }

        self.latest.as_ref()
    }
}

pub fn estimate_fees(latest: Option<&QuoteDetails>, tip: PriorityTip) -> FeeEstimate {
    let slippage_reserve = match latest {
        Some(details) => {
            let threshold: f64 = details
                .quote
                .other_amount_threshold
                .parse()
                .unwrap_or_default();
            format!("{:.5}", threshold / LAMPORTS_PER_SOL)
        }
        None => "0.00000".to_string(),
    };

    let estimated_output = match latest {
        Some(details) => details.estimated_output.clone(),
        None => "0".to_string(),
    };

    FeeEstimate {
        slippage_reserve,
        service_fee_percent: format!("{}", SERVICE_FEE_PERCENT),
        priority_tip: format!("{:.5}", tip.sol()),
        estimated_output,
    }
}

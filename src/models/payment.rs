use serde::{Deserialize, Serialize};

pub const DEFAULT_FAILURE_REASON: &str = "The payment could not be processed.";

/// How a gateway redirect is presented. The gateway reports failures as free
/// text, so "cancelled" is detected by substring; everything else is a
/// generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Cancelled,
    Failed,
}

impl PaymentOutcome {
    pub fn classify(reason: &str) -> Self {
        if reason.to_lowercase().contains("cancelled") {
            Self::Cancelled
        } else {
            Self::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the failure page shows, derived once from the redirect query.
///
/// The parameters are displayed verbatim and trusted as delivered; the page
/// has no side effect beyond display, so URL tampering can only change what
/// the visitor sees (templates escape on output).
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentNotice {
    pub outcome: PaymentOutcome,
    pub reason: String,
    pub tran_id: Option<String>,
}

impl PaymentNotice {
    /// Builds the notice from the raw redirect parameters. Absent or empty
    /// values count as missing, matching how the gateway omits them.
    pub fn from_redirect(tran_id: Option<String>, reason: Option<String>) -> Self {
        let reason = reason
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string());
        let tran_id = tran_id.filter(|t| !t.is_empty());

        Self {
            outcome: PaymentOutcome::classify(&reason),
            reason,
            tran_id,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.outcome {
            PaymentOutcome::Cancelled => "Payment Cancelled",
            PaymentOutcome::Failed => "Payment Failed",
        }
    }

    pub fn lede(&self) -> &'static str {
        match self.outcome {
            PaymentOutcome::Cancelled => {
                "You cancelled the payment before it was completed. \
                 Your card has not been charged."
            }
            PaymentOutcome::Failed => {
                "Something went wrong while processing your payment. \
                 If money was deducted, it will be refunded automatically."
            }
        }
    }
}

#[cfg(test)]
pub mod payment_tests {
    use uttoron::models::*;

    #[test]
    fn test_outcome_classify_success_on_cancelled_text() {
        assert_eq!(
            PaymentOutcome::classify("User cancelled payment"),
            PaymentOutcome::Cancelled
        );
    }

    #[test]
    fn test_outcome_classify_success_on_mixed_case() {
        assert_eq!(
            PaymentOutcome::classify("Payment CANCELLED by user"),
            PaymentOutcome::Cancelled
        );
    }

    #[test]
    fn test_outcome_classify_fails_on_declined_text() {
        assert_eq!(
            PaymentOutcome::classify("Card declined"),
            PaymentOutcome::Failed
        );
    }

    #[test]
    fn test_outcome_classify_fails_on_single_l_spelling() {
        // The heuristic matches the gateway's spelling only; "canceled"
        // falls through to the generic failure.
        assert_eq!(
            PaymentOutcome::classify("User canceled payment"),
            PaymentOutcome::Failed
        );
    }

    #[test]
    fn test_outcome_display_success() {
        assert_eq!(PaymentOutcome::Cancelled.as_str(), "cancelled");
        assert_eq!(PaymentOutcome::Failed.to_string(), "failed");
    }

    #[test]
    fn test_notice_success_with_reason_and_tran_id() {
        let notice = PaymentNotice::from_redirect(
            Some("TX123".to_string()),
            Some("Card declined".to_string()),
        );

        assert_eq!(notice.outcome, PaymentOutcome::Failed);
        assert_eq!(notice.reason, "Card declined");
        assert_eq!(notice.tran_id.as_deref(), Some("TX123"));
        assert_eq!(notice.headline(), "Payment Failed");
    }

    #[test]
    fn test_notice_success_on_cancelled_reason() {
        let notice =
            PaymentNotice::from_redirect(None, Some("User cancelled payment".to_string()));

        assert_eq!(notice.outcome, PaymentOutcome::Cancelled);
        assert_eq!(notice.headline(), "Payment Cancelled");
        assert!(notice.lede().contains("has not been charged"));
    }

    #[test]
    fn test_notice_success_on_missing_params() {
        let notice = PaymentNotice::from_redirect(None, None);

        assert_eq!(notice.outcome, PaymentOutcome::Failed);
        assert_eq!(notice.reason, DEFAULT_FAILURE_REASON);
        assert_eq!(notice.tran_id, None);
    }

    #[test]
    fn test_notice_treats_empty_params_as_missing() {
        let notice = PaymentNotice::from_redirect(Some(String::new()), Some(String::new()));

        assert_eq!(notice.reason, DEFAULT_FAILURE_REASON);
        assert_eq!(notice.tran_id, None);
    }

    #[test]
    fn test_notice_keeps_reason_verbatim() {
        let reason = "  Gateway said:   NO  ";
        let notice = PaymentNotice::from_redirect(None, Some(reason.to_string()));
        assert_eq!(notice.reason, reason);
    }
}

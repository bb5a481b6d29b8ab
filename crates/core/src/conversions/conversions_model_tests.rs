//! Tests for conversion domain models, rounding, and query validation.

#[cfg(test)]
mod tests {
    use crate::conversions::{
        round_half_up, Conversion, ConversionRequest, HistoryFilter, Page, PageRequest, SortOrder,
    };
    use crate::errors::ValidationError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn request(amount: rust_decimal::Decimal, source: &str, target: &str) -> ConversionRequest {
        ConversionRequest {
            source_amount: amount,
            source_currency: source.to_string(),
            target_currency: target.to_string(),
        }
    }

    // ==================== Rounding ====================

    #[test]
    fn test_round_half_up_plain_product() {
        assert_eq!(round_half_up(dec!(100.00) * dec!(0.85)), dec!(85.00));
    }

    #[test]
    fn test_round_half_up_midpoint_rounds_away_from_zero() {
        // Half-up, not banker's rounding: 33.335 -> 33.34, not 33.34/33.33 split.
        assert_eq!(round_half_up(dec!(33.335) * dec!(1.00)), dec!(33.34));
        assert_eq!(round_half_up(dec!(2.675)), dec!(2.68));
        assert_eq!(round_half_up(dec!(2.665)), dec!(2.67));
    }

    #[test]
    fn test_round_half_up_truncates_long_products() {
        assert_eq!(round_half_up(dec!(10) * dec!(1.0923)), dec!(10.92));
        assert_eq!(round_half_up(dec!(1) * dec!(157.50)), dec!(157.50));
    }

    // ==================== Request validation ====================

    #[test]
    fn test_valid_request_passes() {
        assert!(request(dec!(100), "EUR", "USD").validate().is_ok());
    }

    #[test]
    fn test_lowercase_currency_is_rejected() {
        let err = request(dec!(100), "usd", "EUR").validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCurrencyCode(code) if code == "usd"));
    }

    #[test]
    fn test_short_and_long_currency_codes_are_rejected() {
        assert!(request(dec!(100), "EUR", "US").validate().is_err());
        assert!(request(dec!(100), "EURO", "USD").validate().is_err());
        assert!(request(dec!(100), "EUR", "").validate().is_err());
    }

    #[test]
    fn test_non_positive_amounts_are_rejected() {
        let err = request(dec!(0), "EUR", "USD").validate().unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveAmount(_)));

        let err = request(dec!(-5.00), "EUR", "USD").validate().unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveAmount(_)));
    }

    // ==================== History filter ====================

    fn ts(s: &str) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 5)
            .unwrap()
            .and_time(s.parse().unwrap())
    }

    #[test]
    fn test_transaction_id_filter() {
        let filter = HistoryFilter::from_params(Some("  abc-123  ".to_string()), None, None);
        assert_eq!(
            filter.unwrap(),
            HistoryFilter::TransactionId("abc-123".to_string())
        );
    }

    #[test]
    fn test_complete_date_pair_filter() {
        let filter =
            HistoryFilter::from_params(None, Some(ts("00:00:00")), Some(ts("23:59:59"))).unwrap();
        assert!(matches!(filter, HistoryFilter::TimestampRange { .. }));
    }

    #[test]
    fn test_missing_everything_is_rejected() {
        let err = HistoryFilter::from_params(None, None, None).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHistoryQuery(_)));
    }

    #[test]
    fn test_partial_date_pair_is_rejected() {
        assert!(HistoryFilter::from_params(None, Some(ts("00:00:00")), None).is_err());
        assert!(HistoryFilter::from_params(None, None, Some(ts("23:59:59"))).is_err());
    }

    #[test]
    fn test_blank_transaction_id_is_rejected() {
        assert!(HistoryFilter::from_params(Some("   ".to_string()), None, None).is_err());
    }

    // ==================== Pagination ====================

    #[test]
    fn test_page_request_defaults() {
        let page = PageRequest::default();
        assert_eq!(page.page, 0);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.sort, SortOrder::Asc);
    }

    #[test]
    fn test_page_request_clamps_out_of_range_values() {
        let page = PageRequest::new(Some(-3), Some(0), None);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_size, 1);

        let page = PageRequest::new(Some(2), Some(10_000), Some(SortOrder::Desc));
        assert_eq!(page.page_size, 100);
        assert_eq!(page.offset(), 200);
    }

    #[test]
    fn test_page_total_pages_math() {
        let request = PageRequest::new(Some(0), Some(10), None);
        let page: Page<i32> = Page::new(vec![], &request, 0);
        assert_eq!(page.total_pages, 0);

        let page: Page<i32> = Page::new(vec![1; 10], &request, 25);
        assert_eq!(page.total_pages, 3);

        let page: Page<i32> = Page::new(vec![1; 10], &request, 30);
        assert_eq!(page.total_pages, 3);
    }

    // ==================== Serialization ====================

    #[test]
    fn test_conversion_serializes_camel_case() {
        let conversion = Conversion {
            transaction_id: "id-1".to_string(),
            source_amount: dec!(100.00),
            source_currency: "EUR".to_string(),
            target_amount: dec!(109.00),
            target_currency: "USD".to_string(),
            exchange_rate: dec!(1.09),
            timestamp: ts("12:30:00"),
        };

        let json = serde_json::to_value(&conversion).unwrap();
        assert!(json.get("transactionId").is_some());
        assert!(json.get("sourceAmount").is_some());
        assert!(json.get("targetCurrency").is_some());
        assert!(json.get("exchangeRate").is_some());
        assert!(json.get("transaction_id").is_none());
    }
}

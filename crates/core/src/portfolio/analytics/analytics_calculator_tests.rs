#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::portfolio::analytics::calculate_portfolio_summary;
    use crate::test_support::{at, holding, ledger};
    use crate::transactions::TransactionType::{Buy, Sell};

    #[test]
    fn test_empty_portfolio() {
        let summary = calculate_portfolio_summary(&[], &[]);

        assert_eq!(summary.total_invested, Decimal::ZERO);
        assert_eq!(summary.total_market_value, Decimal::ZERO);
        assert_eq!(summary.total_profit_loss_percentage, Decimal::ZERO);
        assert!(summary.allocation_by_symbol.is_empty());
        assert!(summary.allocation_by_sector.is_empty());
        assert!(summary.allocation_by_category.is_empty());
        assert!(summary.top_performers.is_empty());
        assert!(summary.recent_operations.is_empty());
    }

    #[test]
    fn test_totals_and_symbol_allocation() {
        let holdings = vec![
            holding("ITSA4", 100, dec!(1000), dec!(1200)),
            holding("VALE3", 10, dec!(700), dec!(600)),
            holding("WEGE3", 20, dec!(800), dec!(1000)),
        ];

        let summary = calculate_portfolio_summary(&holdings, &[]);

        assert_eq!(summary.total_invested, dec!(2500));
        assert_eq!(summary.total_market_value, dec!(2800));
        assert_eq!(summary.total_profit_loss, dec!(300));
        assert_eq!(summary.total_profit_loss_percentage, dec!(12));
        assert_eq!(summary.number_of_assets, 3);

        let symbols: Vec<&str> = summary
            .allocation_by_symbol
            .iter()
            .map(|a| a.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["ITSA4", "WEGE3", "VALE3"]);

        let itsa = &summary.allocation_by_symbol[0];
        assert_eq!(itsa.value, dec!(1200));
        assert_eq!(itsa.percentage, dec!(42.86));
        assert_eq!(itsa.quantity, 100);
        assert_eq!(itsa.cost, dec!(1000));
        assert_eq!(itsa.profit_loss, dec!(200));
        assert_eq!(itsa.profit_loss_percentage, dec!(20));

        let vale = &summary.allocation_by_symbol[2];
        assert_eq!(vale.profit_loss, dec!(-100));
        assert_eq!(vale.profit_loss_percentage, dec!(-14.29));

        let distribution: Vec<(&str, Decimal)> = summary
            .portfolio_distribution
            .iter()
            .map(|p| (p.name.as_str(), p.value))
            .collect();
        assert_eq!(
            distribution,
            vec![("ITSA4", dec!(1200)), ("WEGE3", dec!(1000)), ("VALE3", dec!(600))]
        );
    }

    #[test]
    fn test_top_performers_only_positive_sorted_by_return() {
        let holdings = vec![
            holding("A", 1, dec!(100), dec!(110)),
            holding("B", 1, dec!(100), dec!(150)),
            holding("C", 1, dec!(100), dec!(90)),
            holding("D", 1, dec!(100), dec!(100)),
            holding("E", 1, dec!(100), dec!(101)),
            holding("F", 1, dec!(100), dec!(102)),
            holding("G", 1, dec!(100), dec!(103)),
            holding("H", 1, dec!(100), dec!(104)),
        ];

        let summary = calculate_portfolio_summary(&holdings, &[]);
        let top: Vec<&str> = summary
            .top_performers
            .iter()
            .map(|a| a.symbol.as_str())
            .collect();
        assert_eq!(top, vec!["B", "A", "H", "G", "F"]);
    }

    #[test]
    fn test_zero_cost_holding_has_zero_return() {
        let holdings = vec![holding("BONUS3", 5, Decimal::ZERO, dec!(50))];
        let summary = calculate_portfolio_summary(&holdings, &[]);

        assert_eq!(summary.allocation_by_symbol[0].profit_loss_percentage, Decimal::ZERO);
        assert_eq!(summary.total_profit_loss_percentage, Decimal::ZERO);
        assert!(summary.top_performers.is_empty());
    }

    #[test]
    fn test_sector_and_category_groups_default_to_unknown() {
        let mut bank = holding("ITSA4", 1, dec!(100), dec!(300));
        bank.sector = Some("Financials".to_string());
        bank.category = Some("Stock".to_string());
        let mut other_bank = holding("BBAS3", 1, dec!(100), dec!(200));
        other_bank.sector = Some("Financials".to_string());
        other_bank.category = Some("Stock".to_string());
        let unclassified = holding("XPML11", 1, dec!(100), dec!(500));

        let summary = calculate_portfolio_summary(&[bank, other_bank, unclassified], &[]);

        let sectors: Vec<(&str, Decimal, Decimal)> = summary
            .allocation_by_sector
            .iter()
            .map(|s| (s.name.as_str(), s.value, s.percentage))
            .collect();
        assert_eq!(
            sectors,
            vec![
                ("Financials", dec!(500), dec!(50)),
                ("Unknown", dec!(500), dec!(50))
            ]
        );
        let categories: Vec<&str> = summary
            .allocation_by_category
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(categories, vec!["Stock", "Unknown"]);
    }

    #[test]
    fn test_zero_market_value_yields_empty_allocations() {
        let holdings = vec![holding("ZERO3", 10, dec!(100), Decimal::ZERO)];
        let summary = calculate_portfolio_summary(&holdings, &[]);

        assert!(summary.allocation_by_symbol.is_empty());
        assert!(summary.allocation_by_sector.is_empty());
        assert_eq!(summary.total_profit_loss, dec!(-100));
        assert_eq!(summary.total_profit_loss_percentage, dec!(-100));
    }

    #[test]
    fn test_recent_operations_newest_first_limited_to_five() {
        let transactions = ledger(
            "ITSA4",
            &[
                (Buy, 1, dec!(10)),
                (Buy, 2, dec!(20)),
                (Buy, 3, dec!(30)),
                (Sell, 1, dec!(12)),
                (Buy, 4, dec!(40)),
                (Buy, 5, dec!(50)),
                (Sell, 2, dec!(25)),
            ],
        );

        let summary = calculate_portfolio_summary(&[], &transactions);

        assert_eq!(summary.number_of_operations, 7);
        let quantities: Vec<i64> = summary
            .recent_operations
            .iter()
            .map(|o| o.quantity)
            .collect();
        assert_eq!(quantities, vec![2, 5, 4, 1, 3]);
        assert_eq!(summary.recent_operations[0].date, at(2024, 1, 2).date_naive());
        assert_eq!(summary.recent_operations[0].op_type, Sell);
    }

    #[test]
    fn test_summary_serializes_with_camel_case_fields() {
        let holdings = vec![holding("ITSA4", 100, dec!(1000), dec!(1200))];
        let transactions = ledger("ITSA4", &[(Buy, 100, dec!(1000))]);
        let json = serde_json::to_value(calculate_portfolio_summary(&holdings, &transactions))
            .unwrap();

        assert!(json.get("totalProfitLossPercentage").is_some());
        assert!(json["allocationBySymbol"][0].get("profitLossPercentage").is_some());
        assert_eq!(json["recentOperations"][0]["opType"], "buy");
        assert_eq!(json["recentOperations"][0]["date"], "2024-01-02");
        assert_eq!(json["portfolioDistribution"][0]["name"], "ITSA4");
    }
}

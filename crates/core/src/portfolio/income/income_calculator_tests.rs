#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::incomes::IncomeKind;
    use crate::portfolio::income::{calculate_dividend_yields, calculate_income_summary};
    use crate::test_support::{date, holding, income};

    #[test]
    fn test_empty_income_summary() {
        let summary = calculate_income_summary(&[], date(2025, 6, 15));

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.average_monthly_income, Decimal::ZERO);
        assert_eq!(summary.income_count, 0);
        assert!(summary.income_by_symbol.is_empty());
        assert!(summary.income_over_time.is_empty());
        assert!(summary.recent_incomes.is_empty());
    }

    #[test]
    fn test_period_totals_have_no_upper_bound() {
        let incomes = vec![
            income("1", "ITSA4", IncomeKind::Dividend, dec!(10), date(2024, 12, 20)),
            income("2", "ITSA4", IncomeKind::Dividend, dec!(20), date(2025, 2, 10)),
            income("3", "BBAS3", IncomeKind::InterestOnEquity, dec!(30), date(2025, 6, 3)),
            // Announced payment dated after today still counts
            income("4", "BBAS3", IncomeKind::Dividend, dec!(5), date(2025, 7, 1)),
        ];

        let summary = calculate_income_summary(&incomes, date(2025, 6, 15));

        assert_eq!(summary.total_income, dec!(65));
        assert_eq!(summary.income_this_year, dec!(55));
        assert_eq!(summary.income_this_month, dec!(35));
        assert_eq!(summary.income_count, 4);
    }

    #[test]
    fn test_average_monthly_income_uses_thirty_day_months() {
        // 2025-01-01 -> 2025-03-02 is 60 days: exactly 2 months
        let incomes = vec![income("1", "A", IncomeKind::Dividend, dec!(100), date(2025, 1, 1))];
        let summary = calculate_income_summary(&incomes, date(2025, 3, 2));
        assert_eq!(summary.average_monthly_income, dec!(50));

        // 61 days rounds up to 3 months
        let summary = calculate_income_summary(&incomes, date(2025, 3, 3));
        assert_eq!(summary.average_monthly_income, dec!(33.33));

        // Same day counts as one month
        let summary = calculate_income_summary(&incomes, date(2025, 1, 1));
        assert_eq!(summary.average_monthly_income, dec!(100));
    }

    #[test]
    fn test_breakdowns_by_symbol_and_type() {
        let incomes = vec![
            income("1", "ITSA4", IncomeKind::Dividend, dec!(10), date(2025, 1, 5)),
            income("2", "BBAS3", IncomeKind::InterestOnEquity, dec!(50), date(2025, 1, 20)),
            income("3", "ITSA4", IncomeKind::InterestOnEquity, dec!(15), date(2025, 2, 5)),
            income(
                "4",
                "TAEE11",
                IncomeKind::Other("return_of_capital".to_string()),
                dec!(25),
                date(2025, 3, 5),
            ),
        ];

        let summary = calculate_income_summary(&incomes, date(2025, 6, 1));

        let by_symbol: Vec<(&str, Decimal, usize, Decimal)> = summary
            .income_by_symbol
            .iter()
            .map(|s| (s.symbol.as_str(), s.total, s.count, s.percentage))
            .collect();
        assert_eq!(
            by_symbol,
            vec![
                ("BBAS3", dec!(50), 1, dec!(50)),
                // Ties keep first-seen order
                ("ITSA4", dec!(25), 2, dec!(25)),
                ("TAEE11", dec!(25), 1, dec!(25)),
            ]
        );

        let by_type: Vec<(&str, Decimal, usize)> = summary
            .income_by_type
            .iter()
            .map(|t| (t.name.as_str(), t.value, t.count))
            .collect();
        assert_eq!(
            by_type,
            vec![
                ("JCP", dec!(65), 2),
                ("Return Of Capital", dec!(25), 1),
                ("Dividends", dec!(10), 1),
            ]
        );
    }

    #[test]
    fn test_income_over_time_is_chronological_across_years() {
        let incomes = vec![
            income("1", "A", IncomeKind::Dividend, dec!(1), date(2025, 1, 15)),
            income("2", "A", IncomeKind::Dividend, dec!(2), date(2024, 12, 1)),
            income("3", "A", IncomeKind::Dividend, dec!(3), date(2024, 2, 29)),
            income("4", "A", IncomeKind::Dividend, dec!(4), date(2025, 1, 2)),
        ];

        let summary = calculate_income_summary(&incomes, date(2025, 6, 1));
        let months: Vec<(&str, Decimal, usize)> = summary
            .income_over_time
            .iter()
            .map(|m| (m.month.as_str(), m.amount, m.count))
            .collect();

        assert_eq!(
            months,
            vec![
                ("Feb 2024", dec!(3), 1),
                ("Dec 2024", dec!(2), 1),
                ("Jan 2025", dec!(5), 2),
            ]
        );
    }

    #[test]
    fn test_recent_incomes_newest_payment_first() {
        let mut incomes: Vec<_> = (1..=12)
            .map(|m| {
                income(
                    &m.to_string(),
                    "ITSA4",
                    IncomeKind::Dividend,
                    dec!(1.5),
                    date(2024, m, 10),
                )
            })
            .collect();
        incomes[0].tax_withheld = Some(dec!(0.22));

        let summary = calculate_income_summary(&incomes, date(2025, 1, 1));

        assert_eq!(summary.recent_incomes.len(), 10);
        assert_eq!(summary.recent_incomes[0].payment_date, date(2024, 12, 10));
        assert_eq!(summary.recent_incomes[9].payment_date, date(2024, 3, 10));
        assert_eq!(summary.recent_incomes[0].tax_withheld, Decimal::ZERO);
        assert_eq!(summary.total_tax_withheld, dec!(0.22));
    }

    #[test]
    fn test_summary_json_keeps_value_total_asymmetry() {
        let incomes = vec![income("1", "ITSA4", IncomeKind::Dividend, dec!(10), date(2025, 1, 5))];
        let json = serde_json::to_value(calculate_income_summary(&incomes, date(2025, 6, 1)))
            .unwrap();

        assert!(json["incomeBySymbol"][0].get("total").is_some());
        assert!(json["incomeByType"][0].get("value").is_some());
        assert_eq!(json["incomeOverTime"][0]["month"], "Jan 2025");
        assert_eq!(json["recentIncomes"][0]["incomeType"], "dividend");
        assert_eq!(json["recentIncomes"][0]["paymentDate"], "2025-01-05");
    }

    #[test]
    fn test_dividend_yield_uses_trailing_year() {
        let holdings = vec![
            holding("ITSA4", 100, dec!(1000), dec!(1100)),
            holding("BBAS3", 10, dec!(250), dec!(260)),
            holding("WEGE3", 5, dec!(200), dec!(220)),
        ];
        let incomes = vec![
            income("1", "ITSA4", IncomeKind::Dividend, dec!(40), date(2024, 6, 15)),
            income("2", "ITSA4", IncomeKind::InterestOnEquity, dec!(20), date(2025, 3, 1)),
            // Outside the window
            income("3", "ITSA4", IncomeKind::Dividend, dec!(99), date(2024, 6, 14)),
            income("4", "BBAS3", IncomeKind::Dividend, dec!(25), date(2025, 1, 1)),
            // Not held anymore
            income("5", "VALE3", IncomeKind::Dividend, dec!(80), date(2025, 1, 1)),
        ];

        let yields = calculate_dividend_yields(&holdings, &incomes, date(2025, 6, 15));

        let rows: Vec<(&str, Decimal, Decimal, Decimal)> = yields
            .iter()
            .map(|y| (y.symbol.as_str(), y.annual_income, y.cost, y.dividend_yield))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("BBAS3", dec!(25), dec!(250), dec!(10)),
                ("ITSA4", dec!(60), dec!(1000), dec!(6)),
            ]
        );
    }
}

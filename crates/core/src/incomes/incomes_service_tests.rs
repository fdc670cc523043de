#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::incomes::{
        IncomeError, IncomeKind, IncomeService, IncomeServiceTrait, IncomeUpdate, NewIncome,
    };
    use crate::test_support::{date, MockIncomeRepository};
    use crate::utils::FixedClock;

    fn service() -> IncomeService {
        IncomeService::new(
            Arc::new(MockIncomeRepository::default()),
            Arc::new(FixedClock::on(date(2025, 6, 1))),
        )
    }

    fn dividend(symbol: &str, amount: rust_decimal::Decimal, paid: &str) -> NewIncome {
        NewIncome {
            symbol: symbol.to_string(),
            income_type: "dividend".to_string(),
            amount: Some(amount),
            payment_date: paid.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let service = service();
        service
            .create_income(dividend("ITSA4", dec!(12.50), "2025-02-10"))
            .await
            .unwrap();
        service
            .create_income(dividend("BBAS3", dec!(30), "2025-05-02"))
            .await
            .unwrap();

        let incomes = service.get_incomes(None).unwrap();
        assert_eq!(incomes.len(), 2);
        assert_eq!(incomes[0].symbol, "BBAS3");
        assert_eq!(service.get_incomes(Some("ITSA4")).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let err = service()
            .create_income(NewIncome {
                symbol: "ITSA4".to_string(),
                income_type: "rent".to_string(),
                amount: Some(dec!(-1)),
                payment_date: "2025-13-01".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        match err {
            Error::Validation(v) => {
                let fields: Vec<&str> = v.errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["incomeType", "amount", "paymentDate"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let service = service();
        let created = service
            .create_income(NewIncome {
                tax_withheld: Some(dec!(1.5)),
                notes: Some("Q1".to_string()),
                ..dividend("ITSA4", dec!(10), "2025-03-01")
            })
            .await
            .unwrap();

        let updated = service
            .update_income(IncomeUpdate {
                id: created.id.clone(),
                income_type: Some("jcp".to_string()),
                amount: Some(dec!(11)),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.income_type, IncomeKind::InterestOnEquity);
        assert_eq!(updated.amount, dec!(11));
        assert_eq!(updated.payment_date, date(2025, 3, 1));
        assert_eq!(updated.tax_withheld, Some(dec!(1.5)));
        assert_eq!(updated.notes.as_deref(), Some("Q1"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();
        let created = service
            .create_income(dividend("ITSA4", dec!(10), "2025-03-01"))
            .await
            .unwrap();

        service.delete_income(&created.id).await.unwrap();

        let err = service.get_income(&created.id).unwrap_err();
        assert!(matches!(err, Error::Income(IncomeError::NotFound(_))));
    }
}

use crate::{render, BasicRenderer, RenderError, Renderer, TextRenderer};
use chrono::NaiveDate;
use daybook_core::*;
use daybook_report::{Report, Table, TableRenderer, Vector};
use indoc::indoc;
use rust_decimal_macros::dec;
use std::convert::TryFrom;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn account(s: &str) -> Account<'_> {
    Account::try_from(s).unwrap()
}

fn render_directive(directive: Directive<'_>) -> Result<String, RenderError> {
    let mut rendered = Vec::new();
    BasicRenderer::new().render(&directive, &mut rendered)?;
    Ok(String::from_utf8(rendered).unwrap())
}

fn render_table(renderer: TextRenderer, table: &Table<'_>) -> anyhow::Result<String> {
    let mut rendered = Vec::new();
    renderer.render(table, &mut rendered)?;
    Ok(String::from_utf8(rendered)?)
}

#[test]
fn test_open_close() -> anyhow::Result<()> {
    let open = Open::builder()
        .date(date(2016, 1, 1))
        .account(account("Liabilities:CreditCard:CapitalOne"))
        .build();
    assert_eq!(
        render_directive(open.into())?,
        "2016-01-01 open Liabilities:CreditCard:CapitalOne"
    );
    let close = Close::builder()
        .date(date(2016, 11, 28))
        .account(account("Liabilities:CreditCard:CapitalOne"))
        .build();
    assert_eq!(
        render_directive(close.into())?,
        "2016-11-28 close Liabilities:CreditCard:CapitalOne"
    );
    Ok(())
}

#[test]
fn test_price() -> anyhow::Result<()> {
    let price = Price::builder()
        .date(date(2014, 7, 9))
        .commodity("HOOL")
        .price(dec!(579.18))
        .target("USD")
        .build();
    assert_eq!(render_directive(price.into())?, "2014-07-09 price HOOL 579.18 USD");
    Ok(())
}

#[test]
fn test_assertion_and_value() -> anyhow::Result<()> {
    let assertion = Assertion::builder()
        .date(date(2014, 8, 9))
        .account(account("Assets:Cash"))
        .amount(dec!(562.00))
        .commodity("USD")
        .build();
    assert_eq!(
        render_directive(assertion.into())?,
        "2014-08-09 balance Assets:Cash 562.00 USD"
    );
    let value = Value::builder()
        .date(date(2020, 12, 31))
        .account(account("Assets:Pension"))
        .amount(dec!(41250))
        .commodity("CHF")
        .build();
    assert_eq!(
        render_directive(value.into())?,
        "2020-12-31 value Assets:Pension 41250 CHF"
    );
    Ok(())
}

fn groceries() -> Transaction<'static> {
    Transaction::builder()
        .date(date(2021, 1, 5))
        .description("Groceries")
        .tags(vec!["#food".into()])
        .postings(vec![
            Posting::builder()
                .credit(account("Assets:Checking"))
                .debit(account("Expenses:Food"))
                .commodity("USD")
                .amount(dec!(54.20))
                .build(),
            Posting::builder()
                .credit(account("Assets:Broker"))
                .debit(account("Assets:Cash"))
                .commodity("AAPL")
                .amount(dec!(-2))
                .lot(
                    Lot::builder()
                        .price(dec!(120.50))
                        .commodity("USD")
                        .date(date(2020, 6, 1))
                        .label("apple")
                        .build(),
                )
                .build(),
        ])
        .build()
}

#[test]
fn test_transaction() -> anyhow::Result<()> {
    assert_eq!(
        render_directive(groceries().into())?,
        indoc! {r#"
            2021-01-05 "Groceries" #food
            Assets:Checking Expenses:Food        54.20 USD
            Assets:Broker   Assets:Cash             -2 AAPL { 120.50 USD, 2020-06-01 apple }
        "#}
    );
    Ok(())
}

#[test]
fn test_accrual() -> anyhow::Result<()> {
    let mut transaction = groceries();
    transaction.postings.truncate(1);
    transaction.tags.clear();
    let accrual = Accrual::builder()
        .period(Period::Monthly)
        .t0(date(2021, 1, 1))
        .t1(date(2021, 12, 31))
        .account(account("Liabilities:Accruals"))
        .transaction(transaction)
        .build();
    assert_eq!(
        render_directive(accrual.into())?,
        indoc! {r#"
            @accrue monthly 2021-01-01 2021-12-31 Liabilities:Accruals
            2021-01-05 "Groceries"
            Assets:Checking Expenses:Food        54.20 USD
        "#}
    );
    Ok(())
}

#[test]
fn test_unsupported() {
    assert!(matches!(
        render_directive(Directive::Unsupported),
        Err(RenderError::Unsupported)
    ));
}

#[test]
fn test_ledger() -> anyhow::Result<()> {
    let directives: Vec<Directive> = vec![
        Close::builder()
            .date(date(2021, 1, 5))
            .account(account("Assets:Checking"))
            .build()
            .into(),
        groceries().into(),
        Open::builder()
            .date(date(2021, 1, 1))
            .account(account("Assets:Checking"))
            .build()
            .into(),
        Price::builder()
            .date(date(2021, 1, 5))
            .commodity("AAPL")
            .price(dec!(130))
            .target("USD")
            .build()
            .into(),
    ];
    let filter = Filter::new(None, Some("^USD$"))?;
    let ledger = build(&filter, directives.into_iter().map(Ok::<_, RenderError>))?;

    let mut rendered = Vec::new();
    render(&mut rendered, &ledger)?;
    assert_eq!(
        String::from_utf8(rendered)?,
        indoc! {r#"
            2021-01-01 open Assets:Checking
            2021-01-05 price AAPL 130 USD
            2021-01-05 "Groceries" #food
            Assets:Checking Expenses:Food        54.20 USD

            2021-01-05 close Assets:Checking
        "#}
    );
    Ok(())
}

fn report() -> Report<'static> {
    let mut report = Report::new(vec![date(2024, 1, 1), date(2024, 2, 1)]);
    report.add(
        &account("Assets:Cash"),
        "USD".into(),
        Vector::from(vec![dec!(1234.5), dec!(0)]),
    );
    report.add(
        &account("Income:Salary"),
        "USD".into(),
        Vector::from(vec![dec!(-1234.5), dec!(-10)]),
    );
    report
}

#[test]
fn test_table() -> anyhow::Result<()> {
    let table = TableRenderer::default().render(&report());
    assert_eq!(
        render_table(TextRenderer::default(), &table)?,
        indoc! {"
            +----------+------------+------------+
            | Account  | 2024-01-01 | 2024-02-01 |
            +----------+------------+------------+
            | Assets   |            |            |
            |   Cash   |     1234.5 |            |
            |          |            |            |
            | Total    |     1234.5 |            |
            +----------+------------+------------+
            | Income   |            |            |
            |   Salary |     1234.5 |         10 |
            |          |            |            |
            | Total    |     1234.5 |         10 |
            +----------+------------+------------+
            | Delta    |            |        -10 |
            +----------+------------+------------+
        "}
    );
    Ok(())
}

#[test]
fn test_table_number_format() -> anyhow::Result<()> {
    let table = TableRenderer::builder()
        .commodities(true)
        .build()
        .render(&report());
    let renderer = TextRenderer::builder().thousands(true).round(2).build();
    assert_eq!(
        render_table(renderer, &table)?,
        indoc! {"
            +----------+------------+------------+
            | Account  | 2024-01-01 | 2024-02-01 |
            +----------+------------+------------+
            | Assets   |            |            |
            |   Cash   |            |            |
            |     USD  |   1,234.50 |            |
            |          |            |            |
            | Total    |            |            |
            |   USD    |   1,234.50 |            |
            +----------+------------+------------+
            | Income   |            |            |
            |   Salary |            |            |
            |     USD  |   1,234.50 |      10.00 |
            |          |            |            |
            | Total    |            |            |
            |   USD    |   1,234.50 |      10.00 |
            +----------+------------+------------+
            | Delta    |            |            |
            |   USD    |            |     -10.00 |
            +----------+------------+------------+
        "}
    );
    Ok(())
}

use nwfee::calculator::format_fee;
use nwfee::config::ruleset_from_str;
use nwfee::engine::FeeEngine;
use nwfee::ruleset::Ruleset;
use nwfee::transaction::Transaction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const RULES: &str = "
id: nw-fees-test
name: Network assessment fees
effectiveDate: 2024-04-01
status: ACTIVE
fees:
  - key: interchange-assessment
    name: Interchange Assessment
    description: Volume-based assessment on swiped Visa
    pctRate: '0.01'
    txRate: '0.10'
    authRate: '0.05'
    rules:
      - cardType: VISA
        cardEntryMode: SWIPED
  - key: debit-authorization
    name: Debit Authorization Fee
    description: Per-authorization charge on debit cards
    authRate: '0.02'
    rules:
      - debit: true
  - key: large-ticket
    name: Large Ticket Fee
    description: Flat charge above a thousand
    txRate: '0.50'
    rules:
      - minTxAmount: '1000.00'
";

fn load() -> Ruleset {
    ruleset_from_str(RULES).unwrap()
}

fn transaction(amount: Decimal, entry_mode: &str, debit: bool) -> Transaction {
    Transaction {
        order_amount: amount,
        card_type: "VISA".to_string(),
        card_entry_mode: entry_mode.to_string(),
        debit,
        prepaid: false,
        international: false,
        opt_blue: false,
        refund: false,
        avs: false,
        cvc: false,
        nw_fee: Decimal::ZERO,
    }
}

#[test]
fn test_worked_example_renders_to_four_places() {
    let one_fee = ruleset_from_str(
        "
id: single
name: Single fee
effectiveDate: 2024-01-01
status: ACTIVE
fees:
  - key: interchange-assessment
    name: Interchange Assessment
    description: Worked example
    pctRate: '0.01'
    txRate: '0.10'
    authRate: '0.05'
    rules:
      - cardType: VISA
        cardEntryMode: SWIPED
",
    )
    .unwrap();

    let mut tx = transaction(dec!(10.00), "SWIPED", true);
    FeeEngine::new(one_fee).assess(&mut tx);

    assert_eq!(tx.nw_fee, dec!(0.25));
    assert_eq!(format_fee(tx.nw_fee).to_string(), "0.2500");
}

#[test]
fn test_total_equals_sum_of_isolated_contributions() {
    let ruleset = load();
    let combined_total = {
        let mut tx = transaction(dec!(10.00), "SWIPED", true);
        FeeEngine::new(ruleset.clone()).assess(&mut tx)
    };

    let mut isolated_sum = Decimal::ZERO;
    for fee in &ruleset.fees {
        let mut single = ruleset.clone();
        single.fees = vec![fee.clone()];
        let mut tx = transaction(dec!(10.00), "SWIPED", true);
        isolated_sum += FeeEngine::new(single).assess(&mut tx);
    }

    assert_eq!(combined_total, isolated_sum);
    // 0.25 assessment + 0.02 debit authorization, large-ticket unmatched
    assert_eq!(combined_total, dec!(0.27));
}

#[test]
fn test_entry_mode_drives_authorization_term() {
    let engine = FeeEngine::new(load());

    // Swiped debit: 0.25 + 0.02 * 1
    let mut swiped = transaction(dec!(10.00), "SWIPED", true);
    assert_eq!(engine.assess(&mut swiped), dec!(0.27));

    // Tokenized debit misses the swiped-only assessment but pays
    // the debit authorization at 3 auths: 0.02 * 3.
    let mut tokenized = transaction(dec!(10.00), "TOKENIZED", true);
    assert_eq!(engine.assess(&mut tokenized), dec!(0.06));

    // Incremental pre-auth debit: 0.02 * 2.
    let mut incremental = transaction(dec!(10.00), "INCREMENTAL_PRE_AUTHED", true);
    assert_eq!(engine.assess(&mut incremental), dec!(0.04));
}

#[test]
fn test_minimum_amount_bound_is_inclusive() {
    let engine = FeeEngine::new(load());

    // Credit keyed transactions only ever hit the large-ticket fee.
    let mut at_bound = transaction(dec!(1000.00), "KEYED", false);
    assert_eq!(engine.assess(&mut at_bound), dec!(0.50));

    let mut below_bound = transaction(dec!(999.99), "KEYED", false);
    assert_eq!(engine.assess(&mut below_bound), Decimal::ZERO);
}

#[test]
fn test_repeated_assessment_is_stable_and_additive() {
    let engine = FeeEngine::new(load());
    let mut tx = transaction(dec!(10.00), "SWIPED", true);

    let first = engine.assess(&mut tx);
    let second = engine.assess(&mut tx);

    assert_eq!(first, second);
    assert_eq!(tx.nw_fee, first + second);
}

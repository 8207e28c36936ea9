//! Market-level properties checked over whole runs
//!
//! Run with: cargo test -p abm --test market_properties

use std::collections::HashMap;

use abm::{MarketConfig, Marketplace, RunLimit};
use agora_core::{
    AgentId, Interaction, MarketPolicy, MarketSnapshot, PartnerSelection, PriceAdaptation,
    RosterEntry, SaleKind, Step, StepReport,
};
use agora_ports::NullReporter;

/// Everyone enters at step 0, so totals are fixed from the first report on
fn village(seed: u64, policy: MarketPolicy) -> MarketConfig {
    MarketConfig::new()
        .with_cash(60)
        .with_cooldown(2)
        .with_seed(seed)
        .with_policy(policy)
        .with_price("bread", 10)
        .with_price("flour", 4)
        .with_price("wheat", 2)
        .with_price("salt", 3)
        .with_agent(RosterEntry::new("farmer").count(3).sells("wheat", 6).buys("salt", 2))
        .with_agent(RosterEntry::new("miller").count(2).sells("flour", 5).buys("wheat", 4))
        .with_agent(RosterEntry::new("baker").count(2).sells("bread", 4).buys("flour", 3))
        .with_agent(RosterEntry::new("trader").sells("salt", 6).cash(10))
        .with_agent(RosterEntry::new("customer").count(3).buys("bread", 2).buys("salt", 1))
}

fn presets() -> [MarketPolicy; 3] {
    [
        MarketPolicy::cash_only(),
        MarketPolicy::barter(),
        MarketPolicy::adaptive(),
    ]
}

fn run_reports(config: MarketConfig, steps: usize) -> Vec<StepReport> {
    let mut market = Marketplace::new(config).unwrap();
    (0..steps).map(|_| market.tick()).collect()
}

fn units(snapshot: &MarketSnapshot) -> HashMap<String, u64> {
    ["bread", "flour", "wheat", "salt"]
        .into_iter()
        .map(|p| (p.to_string(), snapshot.total_units(p)))
        .collect()
}

#[test]
fn test_scenario_a_cash_sale() {
    let config = MarketConfig::new()
        .with_price("bread", 10)
        .with_agent(RosterEntry::new("S").sells("bread", 5))
        .with_agent(RosterEntry::new("B").buys("bread", 1).cash(100))
        .with_seed(1);
    let mut market = Marketplace::new(config).unwrap();

    let report = market.tick();

    assert_eq!(report.interactions.len(), 1);
    assert!(matches!(
        &report.interactions[0],
        Interaction::Sale { product, price: 10, kind: SaleKind::Direct, .. } if product == "bread"
    ));
    let seller = market.agent("S1").unwrap();
    let buyer = market.agent("B2").unwrap();
    assert_eq!(seller.cash, 10);
    assert_eq!(buyer.cash, 90);
    assert_eq!(buyer.inventory.get("bread"), Some(&1));
    assert_eq!(seller.sells.get("bread"), Some(&4));
    assert!(!buyer.buys.contains_key("bread"));
}

#[test]
fn test_scenario_b_barter() {
    let config = MarketConfig::new()
        .with_cash(20)
        .with_price("wheat", 2)
        .with_price("flour", 4)
        .with_agent(RosterEntry::new("A").sells("wheat", 1).buys("flour", 1))
        .with_agent(RosterEntry::new("B").sells("flour", 1).buys("wheat", 1))
        .with_seed(5);
    let mut market = Marketplace::new(config).unwrap();

    let report = market.tick();

    assert!(matches!(report.interactions[0], Interaction::Barter { .. }));
    assert!(report.interactions[0].to_string().contains("swap"));
    let a = market.agent("A1").unwrap();
    let b = market.agent("B2").unwrap();
    assert_eq!((a.cash, b.cash), (20, 20));
    assert_eq!(a.inventory.get("flour"), Some(&1));
    assert_eq!(b.inventory.get("wheat"), Some(&1));
    assert!(a.inventory.get("wheat").is_none());
    assert!(a.buys.is_empty() && b.buys.is_empty());
}

#[test]
fn test_scenario_c_no_trade_adapts_both_parties() {
    let config = MarketConfig::new()
        .with_price("silk", 50)
        .with_price("salt", 10)
        .with_price("tea", 20)
        .with_price("rice", 7)
        .with_agent(RosterEntry::new("weaver").sells("silk", 1).buys("tea", 1))
        .with_agent(RosterEntry::new("miner").sells("salt", 2).buys("rice", 1))
        .with_seed(3);
    let mut market = Marketplace::new(config).unwrap();

    let report = market.tick();

    assert_eq!(report.interactions.len(), 1);
    assert!(matches!(
        report.interactions[0],
        Interaction::NoTrade { step: 0, .. }
    ));

    let weaver = market.agent("weaver1").unwrap();
    let miner = market.agent("miner2").unwrap();
    assert_eq!(weaver.sell_price("silk"), Some(45));
    assert_eq!(weaver.buy_price("tea"), Some(22));
    assert_eq!(miner.sell_price("salt"), Some(9));
    assert_eq!(miner.buy_price("rice"), Some(7));
}

#[test]
fn test_no_trade_only_trigger_skips_successful_trades() {
    let mut policy = MarketPolicy::cash_only();
    policy.price_adaptation = PriceAdaptation::NoTradeOnly;
    let config = MarketConfig::new()
        .with_cash(100)
        .with_price("bread", 10)
        .with_agent(RosterEntry::new("seller").sells("bread", 5))
        .with_agent(RosterEntry::new("buyer").buys("bread", 1))
        .with_policy(policy)
        .with_seed(8);
    let mut market = Marketplace::new(config).unwrap();

    market.tick();
    assert_eq!(market.agent("seller1").unwrap().sell_price("bread"), Some(10));

    // the buyer is satisfied; the next pairing is a no-trade
    for _ in 0..3 {
        market.tick();
    }
    assert_eq!(market.agent("seller1").unwrap().sell_price("bread"), Some(9));
}

#[test]
fn test_scenario_d_satisfied_want_is_removed() {
    let config = MarketConfig::new()
        .with_cash(100)
        .with_price("bread", 10)
        .with_agent(RosterEntry::new("seller").sells("bread", 5))
        .with_agent(RosterEntry::new("buyer").buys("bread", 2))
        .with_policy(MarketPolicy::cash_only())
        .with_seed(11);
    let mut market = Marketplace::new(config).unwrap();

    market.tick();
    let buyer = market.agent("buyer2").unwrap();
    assert_eq!(buyer.buys.get("bread"), Some(&1));

    for _ in 0..3 {
        market.tick();
    }
    let buyer = market.agent("buyer2").unwrap();
    assert!(!buyer.buys.contains_key("bread"));
    assert!(!buyer.buy_prices.contains_key("bread"));
    assert_eq!(buyer.inventory.get("bread"), Some(&2));
    assert_eq!(buyer.cash, 80);
}

#[test]
fn test_cash_and_units_are_conserved() {
    for policy in presets() {
        for seed in 0..5 {
            let reports = run_reports(village(seed, policy), 40);
            let cash = reports[0].snapshot.total_cash();
            let stock = units(&reports[0].snapshot);

            // step 0 already traded, so compare against the roster
            assert_eq!(cash, 60 * 10 + 10);
            assert_eq!(stock["wheat"], 18);
            assert_eq!(stock["flour"], 10);
            assert_eq!(stock["bread"], 8);
            assert_eq!(stock["salt"], 6);

            for report in &reports {
                assert_eq!(report.snapshot.total_cash(), cash, "{policy:?} seed {seed}");
                assert_eq!(units(&report.snapshot), stock, "{policy:?} seed {seed}");
            }
        }
    }
}

#[test]
fn test_no_zero_entries_and_price_floor() {
    for policy in presets() {
        let mut market = Marketplace::new(village(21, policy)).unwrap();
        for _ in 0..200 {
            market.tick();
            for agent in market.agents() {
                assert!(agent.sells.values().all(|&q| q > 0), "{}", agent.id);
                assert!(agent.buys.values().all(|&q| q > 0), "{}", agent.id);
                assert!(agent.inventory.values().all(|&q| q > 0), "{}", agent.id);
                assert!(agent.sell_prices.values().all(|&p| p >= 1), "{}", agent.id);
                for product in agent.sell_prices.keys() {
                    assert!(agent.sells.contains_key(product), "{} quotes unsold {product}", agent.id);
                }
                for product in agent.buy_prices.keys() {
                    assert!(agent.buys.contains_key(product), "{} bids for {product}", agent.id);
                }
            }
        }
    }
}

#[test]
fn test_price_floor_after_long_decay() {
    let config = MarketConfig::new()
        .with_price("stone", 5)
        .with_cooldown(1)
        .with_agent(RosterEntry::new("a").sells("stone", 1))
        .with_agent(RosterEntry::new("b").sells("stone", 1))
        .with_policy(MarketPolicy {
            partner_selection: PartnerSelection::Uniform,
            ..MarketPolicy::adaptive()
        })
        .with_seed(2);
    let mut market = Marketplace::new(config).unwrap();

    for _ in 0..30 {
        market.tick();
    }
    for agent in market.agents() {
        assert_eq!(agent.sell_price("stone"), Some(1));
    }
}

#[test]
fn test_busy_agents_sit_out_the_cooldown() {
    let config = village(13, MarketPolicy::adaptive()).with_cooldown(3);
    let reports = run_reports(config, 60);

    let mut last_paired: HashMap<AgentId, Step> = HashMap::new();
    for report in &reports {
        for interaction in &report.interactions {
            let parties = match interaction {
                Interaction::Barter { initiator, partner, .. }
                | Interaction::NoTrade { initiator, partner, .. } => [initiator, partner],
                Interaction::Sale { seller, buyer, .. } => [seller, buyer],
            };
            for id in parties {
                if let Some(&previous) = last_paired.get(id) {
                    assert!(
                        report.step >= previous + 3,
                        "{id} paired at {previous} and again at {}",
                        report.step
                    );
                }
                last_paired.insert(id.clone(), report.step);
            }
        }
    }
    assert!(!last_paired.is_empty());
}

#[test]
fn test_same_seed_same_history() {
    for policy in presets() {
        let first = run_reports(village(99, policy), 30);
        let second = run_reports(village(99, policy), 30);
        assert_eq!(first, second);
    }
}

#[test]
fn test_late_arrivals_enter_on_schedule() {
    let config = village(4, MarketPolicy::adaptive())
        .with_agent(RosterEntry::new("latecomer").count(2).enters(3).buys("bread", 1));
    let mut market = Marketplace::new(config).unwrap();

    let metrics = market.run(RunLimit::Steps(6), &mut NullReporter);
    assert_eq!(metrics.arrivals, 11);
    assert_eq!(market.pending_arrivals(), 2);

    let report = market.tick();
    assert_eq!(report.step, 6);
    assert_eq!(
        report.entered,
        vec![AgentId::new("latecomer12"), AgentId::new("latecomer13")]
    );
}

#[test]
fn test_every_preset_trades() {
    for policy in presets() {
        let mut market = Marketplace::new(village(17, policy)).unwrap();
        let metrics = market.run(RunLimit::Steps(50), &mut NullReporter);

        assert_eq!(metrics.steps, 50);
        assert!(metrics.trades() > 0, "{policy:?}");
        if !policy.barter {
            assert_eq!(metrics.barters, 0);
        }
        if policy == MarketPolicy::cash_only() {
            assert_eq!(metrics.opportunistic_purchases, 0);
        }
        assert_eq!(
            metrics.pairings,
            metrics.trades() + metrics.no_trades,
            "{policy:?}"
        );
    }
}

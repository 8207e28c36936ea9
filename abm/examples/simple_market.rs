//! Small village market run to completion, printing each step's interactions

use abm::{MarketConfig, Marketplace};
use agora_core::{MarketPolicy, RosterEntry};

fn main() {
    println!("=== Agora Market Example ===\n");

    let config = MarketConfig::new()
        .with_cash(50)
        .with_cooldown(2)
        .with_seed(42)
        .with_policy(MarketPolicy::adaptive())
        .with_price("bread", 10)
        .with_price("flour", 4)
        .with_price("wheat", 2)
        .with_agent(RosterEntry::new("farmer").count(2).sells("wheat", 6).buys("bread", 1))
        .with_agent(RosterEntry::new("miller").sells("flour", 5).buys("wheat", 4))
        .with_agent(RosterEntry::new("baker").sells("bread", 4).buys("flour", 3))
        .with_agent(RosterEntry::new("customer").count(2).enters(2).buys("bread", 2));

    let mut market = match Marketplace::new(config) {
        Ok(market) => market,
        Err(e) => {
            eprintln!("invalid config: {e}");
            return;
        }
    };

    for _ in 0..20 {
        let report = market.tick();
        if report.interactions.is_empty() && report.entered.is_empty() {
            continue;
        }
        println!("-- Step {} --", report.step);
        for id in &report.entered {
            println!("  + {id}");
        }
        for interaction in &report.interactions {
            println!("  {interaction}");
        }
    }

    let metrics = market.metrics();
    println!("\n=== Results ===");
    println!("Pairings:       {}", metrics.pairings);
    println!("Barters:        {}", metrics.barters);
    println!("Direct sales:   {}", metrics.direct_sales);
    println!("Opportunistic:  {}", metrics.opportunistic_purchases);
    println!("No trade:       {}", metrics.no_trades);
    println!("Cash turnover:  {}", metrics.cash_turnover);
    println!("Total cash:     {}", market.total_cash());
}

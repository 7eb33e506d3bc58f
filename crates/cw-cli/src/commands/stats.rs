use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cw_mechanics::TokenBag;
use cw_mechanics::token::bag::{MAX_WOOD_DECLARATION, MIN_WOOD_DECLARATION};
use cw_mechanics::trials::{mean_fish, snake_rate, storm_positions};

pub fn run(trials: u32, seed: u64) -> Result<(), String> {
    if trials == 0 {
        return Err("trials must be at least 1".into());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let bag = TokenBag::standard();

    println!(
        "  {} {}",
        "Castaway odds".bold(),
        format!("({trials} trials, seed={seed})").dimmed()
    );
    println!();

    // Storm position
    let counts = storm_positions(trials, &mut rng);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Storm position", "Decks", "Share"]);
    for (i, count) in counts.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            count.to_string(),
            percent(f64::from(*count) / f64::from(trials)),
        ]);
    }
    println!("  {}", "Weather deck".bold().underline());
    println!("{table}");
    println!();

    // Wood draws
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Declared", "Snake bite", "Expected wood"]);
    for declared in MIN_WOOD_DECLARATION..=MAX_WOOD_DECLARATION {
        let rate = snake_rate(declared, trials, &bag, &mut rng).map_err(|e| e.to_string())?;
        table.add_row(vec![
            declared.to_string(),
            percent(rate),
            format!("{:.2}", f64::from(declared) * (1.0 - rate)),
        ]);
    }
    println!("  {}", "Wood".bold().underline());
    println!("{table}");
    println!();

    let mean = mean_fish(trials, &bag, &mut rng);
    println!("  {} mean fish per food draw: {mean:.2}", "Food".bold());

    Ok(())
}

fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

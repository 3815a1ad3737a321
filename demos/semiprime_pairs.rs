use prime_omega::Engine;

/// List semiprimes (Ω = 2) up to 1000 that are at most 1 apart, and the numbers
/// with three prime factors (Ω = 3) that are at most 2 apart
fn main() -> Result<(), prime_omega::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let engine = Engine::new(1000)?;
    for &(m, gap) in [(2usize, 1u64), (3, 2)].iter() {
        let pairs = engine.pairs_with_gap(m, gap);
        println!("{} pairs with Ω={} and gap <= {}:", pairs.len(), m, gap);
        for pair in pairs {
            println!("  {}", pair);
        }
    }
    Ok(())
}

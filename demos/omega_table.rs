use prime_omega::Engine;

fn main() -> Result<(), prime_omega::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let engine = Engine::new(99)?;
    println!("Big omega of numbers from 10 to 99:");
    for (i, omega) in engine.factor_count_sequence().iter().enumerate().skip(10) {
        println!("{}: Ω={}", i, omega);
    }
    Ok(())
}

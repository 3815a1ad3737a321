use prime_omega::{Engine, FAILURE_SENTINEL};

fn main() -> Result<(), prime_omega::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    const BOUND: u64 = 200;
    let engine = Engine::new(BOUND)?;
    println!("Moves turning n into a prime under {} (0: 2n+1, 1: n+1):", BOUND);
    for n in 0..=BOUND {
        match engine.shortest_transform(n) {
            Some(path) if path.is_empty() => println!("{}: prime", n),
            Some(path) => {
                // the path always replays within the bound
                let end = path.apply(n, BOUND).unwrap_or(n);
                println!("{}: {} -> {}", n, path, end)
            }
            None => println!("{}: {}", n, FAILURE_SENTINEL),
        }
    }
    Ok(())
}

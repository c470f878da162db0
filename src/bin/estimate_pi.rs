use std::time::Duration;

use mcpi::{estimate_pi, even_percentage, Config};

const SEPARATOR: &str = "----------------------------------------------";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args(&args);

    println!("\nPI-Estimation tool with Monte Carlo Algorithm");
    println!(
        "Using these settings: {} samples, {} report interval",
        config.sample_count, config.report_interval
    );
    println!("{}", SEPARATOR);
    println!(
        "\nFirst calculating an accuracy estimate of our samples ({}). This may take some time.",
        config.sample_count
    );

    let mut rng = rand::thread_rng();
    let randomness = even_percentage(&mut rng, config.sample_count);
    println!(
        "\nThe accuracy with {} samples in randomness is {} for this run",
        config.sample_count, randomness
    );
    println!("{}", SEPARATOR);
    println!("\nStarting estimation");

    let result = estimate_pi(
        &mut rng,
        config.sample_count,
        config.report_interval,
        |progress| {
            println!(
                "The average pi-estimation is {}, operation running for {} (HH:MM:SS:ffff). Sample {} out of {}.",
                progress.mean,
                format_elapsed(progress.elapsed),
                progress.sample,
                progress.total
            );
        },
    );

    println!("\n{}", SEPARATOR);
    println!(
        "Final estimation of pi: {} - total duration: {}",
        result.pi,
        format_elapsed(result.elapsed)
    );
}

/// Formats a duration as `HH:MM:SS:ffff`, with the fractional part in
/// ten-thousandths of a second.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let frac = elapsed.subsec_micros() / 100;
    format!(
        "{:02}:{:02}:{:02}:{:04}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        frac
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00:0000");
    }

    #[test]
    fn test_format_elapsed_subsecond() {
        assert_eq!(format_elapsed(Duration::from_millis(123)), "00:00:00:1230");
    }

    #[test]
    fn test_format_elapsed_full_fields() {
        let elapsed = Duration::new(3_661, 500_000_000);
        assert_eq!(format_elapsed(elapsed), "01:01:01:5000");
    }

    #[test]
    fn test_format_elapsed_rolls_over_days() {
        let elapsed = Duration::from_secs(25 * 3600);
        assert_eq!(format_elapsed(elapsed), "25:00:00:0000");
    }
}

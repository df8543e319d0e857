use rand::Rng;

pub const FILLERS: [&str; 6] = [
    "Hmm",
    "Alright",
    "Okay",
    "Let me see",
    "Just a moment",
    "Right",
];

const FILLER_PROBABILITY: f64 = 0.4;

/// Cosmetic post-processing applied after the dialogue decision: with
/// probability 0.4, prefix one filler phrase and an ellipsis. Takes the
/// random source explicitly so tests can seed it; production callers pass
/// `rand::thread_rng()`.
pub fn humanize<R: Rng + ?Sized>(rng: &mut R, text: &str) -> String {
    if rng.gen_bool(FILLER_PROBABILITY) {
        let filler = FILLERS[rng.gen_range(0..FILLERS.len())];
        format!("{filler}… {text}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prefix_rate_is_roughly_forty_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = "Got it. What date would you prefer?";
        let trials = 10_000;

        let prefixed = (0..trials)
            .filter(|_| humanize(&mut rng, base) != base)
            .count();

        let rate = prefixed as f64 / trials as f64;
        assert!((0.35..=0.45).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_prefix_comes_from_filler_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = "Thanks. May I have your name, please?";

        for _ in 0..1_000 {
            let out = humanize(&mut rng, base);
            if out == base {
                continue;
            }
            assert!(out.ends_with(&format!("… {base}")));
            let prefix = out.strip_suffix(&format!("… {base}")).unwrap();
            assert!(FILLERS.contains(&prefix), "unexpected filler {prefix:?}");
        }
    }

    #[test]
    fn test_base_reply_always_preserved() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let out = humanize(&mut rng, "Sorry, could you repeat that for me?");
            assert!(out.contains("Sorry, could you repeat that for me?"));
        }
    }
}

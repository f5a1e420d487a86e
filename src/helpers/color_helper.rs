use rand::Rng;

const RGB_MAX: u32 = 0x00FF_FFFF;

/// A color drawn uniformly from the 24-bit RGB space, as `#rrggbb`.
pub fn random_hex_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=RGB_MAX))
}

/// `#` followed by exactly six lowercase hex digits.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_colors_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let color = random_hex_color(&mut rng);
            assert!(is_hex_color(&color), "bad color {}", color);
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let first = random_hex_color(&mut StdRng::seed_from_u64(42));
        let second = random_hex_color(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn small_values_are_zero_padded() {
        assert_eq!(format!("#{:06x}", 0x00ab_u32), "#0000ab");
    }

    #[test]
    fn hex_color_check_rejects_uppercase_and_short_values() {
        assert!(is_hex_color("#0a1b2c"));
        assert!(!is_hex_color("#7F7F7F"));
        assert!(!is_hex_color("#abc"));
        assert!(!is_hex_color("abcdef"));
    }
}

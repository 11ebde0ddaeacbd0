//! Tests for per-channel color averaging

#[cfg(test)]
mod tests {
    use mosaictile::color::{Color, average};

    // Tests empty input yields no color
    // Verified by returning black for empty input
    #[test]
    fn test_average_of_nothing_is_none() {
        assert_eq!(average(&[]), None);
    }

    // Tests single sample is returned unchanged
    // Verified by routing single samples through the division path with rounding up
    #[test]
    fn test_average_single_color_is_verbatim() {
        let color = [17, 254, 3, 128];
        assert_eq!(average(&[color]), Some(color));
    }

    // Tests per-channel mean truncates toward zero
    // Verified by rounding to nearest instead
    #[test]
    fn test_average_truncates() {
        let colors = [[0, 1, 255, 255], [1, 2, 254, 255]];
        assert_eq!(average(&colors), Some([0, 1, 254, 255]));
    }

    // Tests a uniform tile averages to its own color
    // Verified by summing into u8 accumulators
    #[test]
    fn test_average_uniform_tile() {
        let colors = vec![[250, 250, 250, 255]; 16];
        assert_eq!(average(&colors), Some([250, 250, 250, 255]));
    }

    // Tests each channel of the result lies within that channel's input range
    // Verified by mixing channels between samples
    #[test]
    fn test_average_within_channel_bounds() {
        let samples: Vec<Color> = (0u8..40)
            .map(|i| {
                [
                    i.wrapping_mul(37),
                    i.wrapping_mul(11).wrapping_add(5),
                    255 - i,
                    if i % 2 == 0 { 255 } else { 100 },
                ]
            })
            .collect();

        for len in 1..=samples.len() {
            let slice = samples.get(..len).unwrap_or_default();
            let Some(mean) = average(slice) else {
                unreachable!("non-empty input must average");
            };
            for (channel, &value) in mean.iter().enumerate() {
                let values = slice.iter().filter_map(|c| c.get(channel).copied());
                let min = values.clone().min().unwrap_or(0);
                let max = values.max().unwrap_or(0);
                assert!(
                    (min..=max).contains(&value),
                    "channel {channel} mean {value} outside [{min}, {max}] for {len} samples"
                );
            }
        }
    }
}

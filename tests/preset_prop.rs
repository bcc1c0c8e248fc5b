use proptest::prelude::*;
use pst_gen::preset::{BandSpec, FOOTER, PRESET_LEN, encode};

proptest! {
    // Every well-formed 8-band input must hit exactly 240 bytes with the
    // fixed header and footer in place, whatever the parameter values.
    #[test]
    fn any_valid_input_encodes_to_240_bytes(
        freqs in prop::collection::vec(20.0f64..20000.0, 8),
        gains in prop::collection::vec(proptest::option::of(-24.0f64..24.0), 8),
        qs in prop::collection::vec(proptest::option::of(0.1f64..10.0), 8),
        enables in prop::collection::vec(proptest::option::of(any::<bool>()), 8),
    ) {
        let bands: Vec<BandSpec> = (0..8)
            .map(|i| BandSpec {
                frequency: Some(freqs[i]),
                gain: gains[i],
                q: qs[i],
                enabled: enables[i],
            })
            .collect();

        let preset = encode(&bands).unwrap();
        prop_assert_eq!(preset.len(), PRESET_LEN);
        prop_assert_eq!(&preset[12..20], b"GAMETSPP");
        prop_assert_eq!(&preset[152..240], &FOOTER[..]);
    }

    #[test]
    fn enabled_flag_is_strictly_zero_or_one(
        enables in prop::collection::vec(proptest::option::of(any::<bool>()), 8),
    ) {
        let bands: Vec<BandSpec> = enables
            .iter()
            .map(|&enabled| BandSpec {
                frequency: Some(1000.0),
                gain: None,
                q: None,
                enabled,
            })
            .collect();

        let preset = encode(&bands).unwrap();
        for (i, &enabled) in enables.iter().enumerate() {
            let start = 24 + i * 16 + 4;
            let flag = f32::from_le_bytes(preset[start..start + 4].try_into().unwrap());
            let expected = if enabled == Some(false) { 0.0 } else { 1.0 };
            prop_assert_eq!(flag, expected);
        }
    }

    #[test]
    fn any_other_band_count_is_rejected(count in 0usize..20) {
        prop_assume!(count != 8);
        let bands = vec![
            BandSpec { frequency: Some(100.0), ..BandSpec::default() };
            count
        ];
        prop_assert!(encode(&bands).is_err());
    }
}

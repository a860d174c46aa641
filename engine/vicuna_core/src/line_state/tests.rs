use super::*;
use pretty_assertions::assert_eq;

// === Bit Layout ===

#[test]
fn flags_pack_into_low_bits() {
    assert_eq!(
        LineState {
            empty: true,
            ..LineState::default()
        }
        .encode(),
        0x01
    );
    assert_eq!(
        LineState {
            line_comment: true,
            ..LineState::default()
        }
        .encode(),
        0x02
    );
    assert_eq!(
        LineState {
            string_continues: true,
            ..LineState::default()
        }
        .encode(),
        0x04
    );
    assert_eq!(
        LineState {
            close_brace: true,
            ..LineState::default()
        }
        .encode(),
        0x08
    );
    assert_eq!(
        LineState {
            interpolation: true,
            ..LineState::default()
        }
        .encode(),
        0x10
    );
}

#[test]
fn counters_pack_into_high_bits() {
    let state = LineState {
        comment_depth: 3,
        indent_count: 12,
        ..LineState::default()
    };
    assert_eq!(state.encode(), (12 << 16) | (3 << 8));
}

#[test]
fn full_record_packs_every_field() {
    let state = LineState {
        empty: false,
        line_comment: true,
        string_continues: true,
        close_brace: false,
        interpolation: true,
        comment_depth: 0xAB,
        indent_count: 0xCDEF,
    };
    assert_eq!(state.encode(), 0xCDEF_AB16);
}

#[test]
fn decode_ignores_reserved_bits() {
    let word = 0x0000_00E0; // bits 5..8 set, nothing else
    assert_eq!(LineState::decode(word), LineState::default());
}

// === Roundtrip ===

#[test]
fn zero_roundtrips() {
    assert_eq!(LineState::decode(0), LineState::default());
    assert_eq!(LineState::default().encode(), 0);
}

#[test]
fn decode_inverts_encode() {
    let state = LineState {
        empty: true,
        line_comment: false,
        string_continues: true,
        close_brace: true,
        interpolation: false,
        comment_depth: 200,
        indent_count: 40_000,
    };
    assert_eq!(LineState::decode(state.encode()), state);
}

// === Saturation ===

#[test]
fn depth_saturates_at_u8_max() {
    assert_eq!(LineState::saturate_depth(0), 0);
    assert_eq!(LineState::saturate_depth(255), 255);
    assert_eq!(LineState::saturate_depth(256), 255);
    assert_eq!(LineState::saturate_depth(u32::MAX), 255);
}

#[test]
fn indent_saturates_at_u16_max() {
    assert_eq!(LineState::saturate_indent(0), 0);
    assert_eq!(LineState::saturate_indent(65_535), 65_535);
    assert_eq!(LineState::saturate_indent(65_536), 65_535);
}

// === Property tests ===

mod proptest_codec {
    use super::LineState;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_record_roundtrips(
            empty in any::<bool>(),
            line_comment in any::<bool>(),
            string_continues in any::<bool>(),
            close_brace in any::<bool>(),
            interpolation in any::<bool>(),
            comment_depth in any::<u8>(),
            indent_count in any::<u16>(),
        ) {
            let state = LineState {
                empty,
                line_comment,
                string_continues,
                close_brace,
                interpolation,
                comment_depth,
                indent_count,
            };
            prop_assert_eq!(LineState::decode(state.encode()), state);
        }

        #[test]
        fn every_clean_word_roundtrips(word in any::<u32>()) {
            // Reserved bits 5..8 encode back to zero; mask them off.
            let clean = word & !0xE0;
            prop_assert_eq!(LineState::decode(clean).encode(), clean);
        }
    }
}
